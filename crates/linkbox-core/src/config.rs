use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Where display labels come from: derived from the hostname (synchronous,
/// never fails) or looked up from the remote page title, falling back to the
/// hostname label on any failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleSource {
    #[default]
    Hostname,
    Remote,
}

/// Global configuration loaded from `~/.config/linkbox/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkboxConfig {
    /// Label policy: "hostname" (default) or "remote".
    #[serde(default)]
    pub title_source: TitleSource,
    /// Connect timeout for the remote title fetch, in seconds.
    pub fetch_connect_timeout_secs: u64,
    /// Total timeout for the remote title fetch, in seconds.
    pub fetch_timeout_secs: u64,
    /// Optional proxy template for the title fetch, with a `{url}`
    /// placeholder for the percent-encoded target
    /// (e.g. `https://api.allorigins.win/get?url={url}`). When unset, the
    /// target URL is fetched directly.
    #[serde(default)]
    pub title_proxy: Option<String>,
}

impl Default for LinkboxConfig {
    fn default() -> Self {
        Self {
            title_source: TitleSource::Hostname,
            fetch_connect_timeout_secs: 15,
            fetch_timeout_secs: 30,
            title_proxy: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkbox")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkboxConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LinkboxConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: LinkboxConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = LinkboxConfig::default();
        assert_eq!(cfg.title_source, TitleSource::Hostname);
        assert_eq!(cfg.fetch_connect_timeout_secs, 15);
        assert_eq!(cfg.fetch_timeout_secs, 30);
        assert!(cfg.title_proxy.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = LinkboxConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: LinkboxConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.title_source, cfg.title_source);
        assert_eq!(parsed.fetch_connect_timeout_secs, cfg.fetch_connect_timeout_secs);
        assert_eq!(parsed.fetch_timeout_secs, cfg.fetch_timeout_secs);
        assert_eq!(parsed.title_proxy, cfg.title_proxy);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            fetch_connect_timeout_secs = 5
            fetch_timeout_secs = 10
            title_proxy = "https://api.allorigins.win/get?url={url}"
        "#;
        let cfg: LinkboxConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.fetch_connect_timeout_secs, 5);
        assert_eq!(cfg.fetch_timeout_secs, 10);
        assert_eq!(
            cfg.title_proxy.as_deref(),
            Some("https://api.allorigins.win/get?url={url}")
        );
        assert_eq!(cfg.title_source, TitleSource::Hostname);
    }

    #[test]
    fn config_toml_title_source() {
        let toml = r#"
            title_source = "remote"
            fetch_connect_timeout_secs = 15
            fetch_timeout_secs = 30
        "#;
        let cfg: LinkboxConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.title_source, TitleSource::Remote);

        let toml_hostname = r#"
            title_source = "hostname"
            fetch_connect_timeout_secs = 15
            fetch_timeout_secs = 30
        "#;
        let cfg_hostname: LinkboxConfig = toml::from_str(toml_hostname).unwrap();
        assert_eq!(cfg_hostname.title_source, TitleSource::Hostname);
    }
}

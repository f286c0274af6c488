//! Hostname-derived display labels.
//!
//! The fallback (and default) display text for a bookmark is built from the
//! URL's host component with a leading `www.` removed. Remote page titles,
//! when enabled, replace this label at render time but are never persisted.

use url::Url;

/// Label used when a stored URL cannot be parsed at all.
pub const UNTITLED_LABEL: &str = "Untitled Link";

/// Derives the display label for `url` from its host component.
///
/// `"https://www.example.com/x"` → `"Link from example.com"`. URLs that do
/// not parse, or that have no host (e.g. `data:` URLs), get the generic
/// [`UNTITLED_LABEL`]. Never panics.
pub fn derive_label(url: &str) -> String {
    let parsed = match Url::parse(url) {
        Ok(u) => u,
        Err(_) => return UNTITLED_LABEL.to_string(),
    };
    let host = match parsed.host_str() {
        Some(h) => h,
        None => return UNTITLED_LABEL.to_string(),
    };
    let host = host.strip_prefix("www.").unwrap_or(host);
    format!("Link from {host}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_www() {
        assert_eq!(
            derive_label("https://www.example.com"),
            "Link from example.com"
        );
    }

    #[test]
    fn plain_host_kept_as_is() {
        assert_eq!(
            derive_label("https://ftp.debian.org/debian/"),
            "Link from ftp.debian.org"
        );
    }

    #[test]
    fn only_leading_www_is_stripped() {
        assert_eq!(
            derive_label("https://wiki.www.example.com"),
            "Link from wiki.www.example.com"
        );
    }

    #[test]
    fn unparsable_url_is_untitled() {
        assert_eq!(derive_label("https://not a url"), UNTITLED_LABEL);
        assert_eq!(derive_label(""), UNTITLED_LABEL);
    }

    #[test]
    fn hostless_url_is_untitled() {
        assert_eq!(derive_label("data:text/plain,hello"), UNTITLED_LABEL);
    }
}

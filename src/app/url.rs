//! URL protocol stripping and host extraction for referrer URL patterns.

use crate::config::SCHEME_SEPARATOR;

/// Removes a leading `<scheme>://` from a URL, returning the input unchanged
/// if it contains no `://`.
///
/// Everything up to and including the first `://` is dropped, without any
/// scheme validation: `udp://bla.fr` and `whatever://bla.fr` both strip to
/// `bla.fr`. Later `://` occurrences are preserved verbatim. This is a total
/// function; it never fails.
///
/// # Examples
///
/// ```
/// use referrer_audit::remove_url_protocol;
///
/// assert_eq!(remove_url_protocol("http://www.facebook.com"), "www.facebook.com");
/// assert_eq!(remove_url_protocol("bla.fr"), "bla.fr");
/// ```
pub fn remove_url_protocol(url: &str) -> &str {
    match url.find(SCHEME_SEPARATOR) {
        Some(idx) => &url[idx + SCHEME_SEPARATOR.len()..],
        None => url,
    }
}

/// Extracts the host component of a referrer URL pattern.
///
/// Patterns are stored without a scheme (e.g. `www.google.com/search`), so the
/// pattern is parsed as `http://<pattern>` and the host is taken from the
/// result. Returns `None` when no host can be extracted, which the audit
/// reports as an invalid pattern rather than aborting.
pub fn host_for_pattern(pattern: &str) -> Option<String> {
    let parsed = url::Url::parse(&format!("http://{pattern}")).ok()?;
    parsed.host_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::{host_for_pattern, remove_url_protocol};

    #[test]
    fn test_remove_url_protocol_strips_common_schemes() {
        assert_eq!(
            remove_url_protocol("http://www.facebook.com"),
            "www.facebook.com"
        );
        assert_eq!(remove_url_protocol("https://bla.fr"), "bla.fr");
        assert_eq!(remove_url_protocol("ftp://bla.fr"), "bla.fr");
        assert_eq!(remove_url_protocol("udp://bla.fr"), "bla.fr");
    }

    #[test]
    fn test_remove_url_protocol_without_scheme_is_identity() {
        assert_eq!(remove_url_protocol("bla.fr"), "bla.fr");
        assert_eq!(remove_url_protocol("ASDasdASDDasd"), "ASDasdASDDasd");
    }

    #[test]
    fn test_remove_url_protocol_empty_string() {
        assert_eq!(remove_url_protocol(""), "");
    }

    #[test]
    fn test_remove_url_protocol_empty_scheme() {
        // "://" at position 0: the scheme is empty, suffix is returned
        assert_eq!(remove_url_protocol("://bla.fr"), "bla.fr");
    }

    #[test]
    fn test_remove_url_protocol_only_first_separator_matters() {
        assert_eq!(
            remove_url_protocol("https://example.com/redirect?to=http://bla.fr"),
            "example.com/redirect?to=http://bla.fr"
        );
    }

    #[test]
    fn test_remove_url_protocol_unvalidated_scheme() {
        // No scheme validation: any prefix before :// is stripped
        assert_eq!(remove_url_protocol("not a scheme://rest"), "rest");
    }

    #[test]
    fn test_host_for_pattern_plain_host() {
        assert_eq!(
            host_for_pattern("www.google.com"),
            Some("www.google.com".to_string())
        );
    }

    #[test]
    fn test_host_for_pattern_with_path() {
        assert_eq!(
            host_for_pattern("search.naver.com/search.naver"),
            Some("search.naver.com".to_string())
        );
    }

    #[test]
    fn test_host_for_pattern_invalid() {
        assert_eq!(host_for_pattern(""), None);
        assert_eq!(host_for_pattern("   "), None);
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_remove_url_protocol_output_is_suffix(url in ".{0,120}") {
            let stripped = remove_url_protocol(&url);
            prop_assert!(url.ends_with(stripped),
                "Output must be a suffix of the input");
        }

        #[test]
        fn test_remove_url_protocol_no_separator_unchanged(
            url in "[a-zA-Z0-9./?=-]{0,80}"
        ) {
            prop_assume!(!url.contains("://"));
            prop_assert_eq!(remove_url_protocol(&url), url.as_str());
        }

        #[test]
        fn test_remove_url_protocol_known_scheme(
            scheme in "[a-z]{1,10}",
            rest in "[a-z0-9.]{1,40}"
        ) {
            let url = format!("{}://{}", scheme, rest);
            prop_assert_eq!(remove_url_protocol(&url), rest.as_str());
        }
    }
}

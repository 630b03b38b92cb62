//! # Link Sanitizer
//!
//! Article bodies are plain authored text, so every captured link target is
//! classified before it reaches a rendered `href`: root-relative paths stay,
//! everything else becomes a link that goes nowhere.

/// Prefix that marks a target as internal to the site.
pub const INTERNAL_PREFIX: char = '/';

/// Href substituted for any target that is not root-relative.
pub const PLACEHOLDER_HREF: &str = "#";

/// Returns a safe href for a raw captured link target.
///
/// Root-relative targets (starting with `/`) are returned unchanged. Anything
/// else, including `http:`, `mailto:` and `javascript:` targets, is replaced by
/// [`PLACEHOLDER_HREF`]. No trimming, case folding or decoding is applied.
pub fn sanitize_href(raw: &str) -> String {
    if is_internal(raw) {
        return raw.to_string();
    }
    log::debug!("replacing non-internal link target {raw:?} with placeholder");
    PLACEHOLDER_HREF.to_string()
}

/// Returns true if `href` would survive [`sanitize_href`] unchanged.
pub fn is_internal(href: &str) -> bool {
    href.starts_with(INTERNAL_PREFIX)
}

/// Returns true if `href` is a possible output of [`sanitize_href`].
pub fn is_safe_href(href: &str) -> bool {
    is_internal(href) || href == PLACEHOLDER_HREF
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/pagina")]
    #[case("/")]
    #[case("/produse/cabluri?tip=cupru#sectiune")]
    fn root_relative_targets_pass_through(#[case] href: &str) {
        assert_eq!(sanitize_href(href), href);
    }

    #[rstest]
    #[case("http://evil.com")]
    #[case("https://example.com/pagina")]
    #[case("javascript:alert(1)")]
    #[case("JAVASCRIPT:alert(1)")]
    #[case("mailto:someone@example.com")]
    #[case("pagina")]
    #[case("./pagina")]
    #[case(" /pagina")]
    #[case("")]
    fn everything_else_becomes_placeholder(#[case] href: &str) {
        assert_eq!(sanitize_href(href), PLACEHOLDER_HREF);
    }

    #[test]
    fn placeholder_is_itself_safe() {
        assert!(is_safe_href(&sanitize_href(PLACEHOLDER_HREF)));
    }

    #[test]
    fn sanitized_output_is_always_safe() {
        for raw in ["/a", "b", "http://x", "", "#frag", "//cdn.example.com"] {
            assert!(is_safe_href(&sanitize_href(raw)), "unsafe output for {raw:?}");
        }
    }
}

//! # URL Construction
//!
//! Resolves relative request paths against the configured base URL.

/// Construct a full request URL from `base_url` and `url`.
///
/// Rules, in order:
/// 1. `url` already contains `base_url` — returned unchanged.
/// 2. `url` starts with `/` — appended to `base_url` with the leading slash
///    stripped, so a trailing-slash base never produces `//`.
/// 3. Otherwise — direct concatenation.
///
/// Rule 1 is a substring check, not a prefix check: any URL merely
/// containing the base URL anywhere is treated as already absolute. Known
/// imprecision, kept intentionally.
pub fn construct_url(base_url: &str, url: &str) -> String {
    if url.contains(base_url) {
        url.to_string()
    } else if let Some(stripped) = url.strip_prefix('/') {
        format!("{base_url}{stripped}")
    } else {
        format!("{base_url}{url}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.example.com/";

    #[test]
    fn test_leading_slash_is_stripped() {
        assert_eq!(construct_url(BASE, "/v1/coins"), "https://api.example.com/v1/coins");
    }

    #[test]
    fn test_relative_path_is_appended() {
        assert_eq!(construct_url(BASE, "v1/coins"), "https://api.example.com/v1/coins");
    }

    #[test]
    fn test_absolute_url_is_returned_unchanged() {
        let absolute = "https://api.example.com/v1/coins";
        assert_eq!(construct_url(BASE, absolute), absolute);
    }

    #[test]
    fn test_contains_check_is_loose() {
        // The base URL appearing anywhere in the path counts as absolute.
        let tricky = "other/https://api.example.com/suffix";
        assert_eq!(construct_url(BASE, tricky), tricky);
    }
}

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for issued tracking codes: "INF-" followed by 8 uppercase hex chars
    /// - Valid: "INF-0A1B2C3D", "INF-DEADBEEF"
    /// - Invalid: "inf-0a1b2c3d", "INF-123", "XYZ-0A1B2C3D"
    pub static ref TRACKING_REGEX: Regex = Regex::new(r"^INF-[0-9A-F]{8}$").unwrap();
}

/// A tracking path segment the client should never have sent: empty, or the
/// literal "null"/"undefined" strings a broken frontend serializes for a
/// missing value. These get a 400, never a 404.
pub fn is_unusable_tracking(tracking: &str) -> bool {
    let t = tracking.trim();
    t.is_empty() || t.eq_ignore_ascii_case("null") || t.eq_ignore_ascii_case("undefined")
}

/// Escape LIKE/ILIKE metacharacters so user input is matched literally
/// inside a pattern. Backslash first, then `%` and `_`.
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracking_regex_valid() {
        assert!(TRACKING_REGEX.is_match("INF-0A1B2C3D"));
        assert!(TRACKING_REGEX.is_match("INF-DEADBEEF"));
        assert!(TRACKING_REGEX.is_match("INF-00000000"));
    }

    #[test]
    fn test_tracking_regex_invalid() {
        assert!(!TRACKING_REGEX.is_match("inf-0a1b2c3d")); // lowercase
        assert!(!TRACKING_REGEX.is_match("INF-123")); // too short
        assert!(!TRACKING_REGEX.is_match("INF-0A1B2C3D4")); // too long
        assert!(!TRACKING_REGEX.is_match("XYZ-0A1B2C3D")); // wrong prefix
        assert!(!TRACKING_REGEX.is_match("INF-0A1B2C3G")); // non-hex char
        assert!(!TRACKING_REGEX.is_match(""));
    }

    #[test]
    fn test_unusable_tracking() {
        assert!(is_unusable_tracking(""));
        assert!(is_unusable_tracking("  "));
        assert!(is_unusable_tracking("null"));
        assert!(is_unusable_tracking("NULL"));
        assert!(is_unusable_tracking("undefined"));
        assert!(!is_unusable_tracking("INF-0A1B2C3D"));
        assert!(!is_unusable_tracking("nullish")); // only the exact literal
    }

    #[test]
    fn test_escape_like_passes_plain_text_through() {
        assert_eq!(escape_like("maria.silva@example.com"), "maria.silva@example.com");
        assert_eq!(escape_like(""), "");
    }

    #[test]
    fn test_escape_like_quotes_wildcards() {
        assert_eq!(escape_like("a%b"), "a\\%b");
        assert_eq!(escape_like("joao_pt"), "joao\\_pt");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("%_%"), "\\%\\_\\%");
    }
}

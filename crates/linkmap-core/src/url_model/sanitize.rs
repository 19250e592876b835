//! Normalization of pasted URL text before decomposition.

const QUOTES: [char; 3] = ['"', '\'', '`'];

/// Sanitizes pasted input, prepending `https://` when no scheme is present.
///
/// - Trims surrounding whitespace
/// - Strips one pair of matching wrapping quotes
/// - Removes all remaining whitespace (pasted links often wrap across lines)
/// - Prepends the scheme unless the text already starts with `http://` or `https://`
///
/// Empty input stays empty so the caller can report a missing URL.
pub fn sanitize_input(raw: &str) -> String {
    sanitize_input_with_scheme(raw, "https")
}

/// Like [`sanitize_input`] with a caller-chosen default scheme.
pub fn sanitize_input_with_scheme(raw: &str, default_scheme: &str) -> String {
    let trimmed = raw.trim();
    let unquoted = strip_wrapping_quotes(trimmed);
    let compact: String = unquoted.chars().filter(|c| !c.is_whitespace()).collect();

    if compact.is_empty() || has_http_scheme(&compact) {
        compact
    } else {
        format!("{default_scheme}://{compact}")
    }
}

fn strip_wrapping_quotes(s: &str) -> &str {
    let mut chars = s.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if first == last && QUOTES.contains(&first) => {
            &s[first.len_utf8()..s.len() - last.len_utf8()]
        }
        _ => s,
    }
}

fn has_http_scheme(s: &str) -> bool {
    let head: String = s.chars().take(8).collect::<String>().to_ascii_lowercase();
    head.starts_with("http://") || head.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_prepends_scheme() {
        assert_eq!(
            sanitize_input("  hotel.example.com/book?adults=2 "),
            "https://hotel.example.com/book?adults=2"
        );
    }

    #[test]
    fn keeps_existing_scheme() {
        assert_eq!(sanitize_input("http://a.example/x"), "http://a.example/x");
        assert_eq!(sanitize_input("HTTPS://a.example/x"), "HTTPS://a.example/x");
    }

    #[test]
    fn strips_one_pair_of_quotes() {
        assert_eq!(sanitize_input("\"https://a.example\""), "https://a.example");
        assert_eq!(sanitize_input("'https://a.example'"), "https://a.example");
        assert_eq!(
            sanitize_input("\"\"https://a.example\"\""),
            "https://\"https://a.example\""
        );
    }

    #[test]
    fn mismatched_quotes_left_alone() {
        assert_eq!(sanitize_input("\"a.example'"), "https://\"a.example'");
    }

    #[test]
    fn removes_internal_whitespace() {
        assert_eq!(
            sanitize_input("https://a.example/pa th?x=1\n&y=2"),
            "https://a.example/path?x=1&y=2"
        );
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(sanitize_input("   "), "");
        assert_eq!(sanitize_input("\"\""), "");
    }

    #[test]
    fn custom_default_scheme() {
        assert_eq!(
            sanitize_input_with_scheme("a.example", "http"),
            "http://a.example"
        );
    }
}

//! Date format guessing from an example value.

/// Guesses the date format of an example value.
///
/// Returns an empty string when nothing can be inferred; the caller applies
/// the variable's default.
pub(crate) fn guess_date_format(value: &str) -> &'static str {
    if value.is_empty() {
        ""
    } else if value.contains('-') {
        "YYYY-MM-DD"
    } else if value.len() == 8 && value.bytes().all(|b| b.is_ascii_digit()) {
        "DDMMYYYY"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashed_value() {
        assert_eq!(guess_date_format("2024-05-01"), "YYYY-MM-DD");
        assert_eq!(guess_date_format("01-05-2024"), "YYYY-MM-DD");
    }

    #[test]
    fn eight_digits() {
        assert_eq!(guess_date_format("01052024"), "DDMMYYYY");
        assert_eq!(guess_date_format("0105202"), "");
        assert_eq!(guess_date_format("0105202a"), "");
    }

    #[test]
    fn nothing_to_go_on() {
        assert_eq!(guess_date_format(""), "");
        assert_eq!(guess_date_format("01/05/2024"), "");
    }
}

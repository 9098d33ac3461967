//! Splitting raw input into name tokens.
//!
//! Pasted text and imported files follow different rules: pasted text treats
//! commas as separators, while a file line is always one whole name.

/// Split pasted text on newlines or commas, trim, and drop empty tokens.
pub fn split_text(raw: &str) -> Vec<&str> {
    raw.split(['\n', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split file contents on line breaks (`\n` or `\r\n`), trim, and drop blank
/// lines. Commas inside a line are kept.
pub fn split_lines(raw: &str) -> Vec<&str> {
    raw.lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_splits_on_commas_and_newlines() {
        assert_eq!(split_text("a, b\nc,,\n  d  "), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn text_handles_crlf() {
        assert_eq!(split_text("a\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn text_blank_input_is_empty() {
        assert!(split_text("  \n , \n").is_empty());
        assert!(split_text("").is_empty());
    }

    #[test]
    fn lines_keep_commas() {
        assert_eq!(
            split_lines("Smith, John\r\n\r\n  Doe, Jane  \n"),
            vec!["Smith, John", "Doe, Jane"]
        );
    }

    #[test]
    fn lines_drop_whitespace_only() {
        assert_eq!(split_lines("\n\t\n x \n   "), vec!["x"]);
    }
}

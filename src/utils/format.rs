//! Formatting utilities for display strings.

const ELLIPSIS: char = '…';

/// Shorten `text` to at most `max_chars` characters.
///
/// With `prefix`, the start is cut and the ellipsis leads (`"…ar/baz"`), which
/// keeps the most specific end of a title visible. Otherwise the end is cut.
/// Counts chars rather than bytes so multi-byte names are never split.
pub fn truncate(text: &str, max_chars: usize, prefix: bool) -> String {
    let len = text.chars().count();
    if len <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let keep = max_chars - 1;
    if prefix {
        let tail: String = text.chars().skip(len - keep).collect();
        format!("{ELLIPSIS}{tail}")
    } else {
        let head: String = text.chars().take(keep).collect();
        format!("{head}{ELLIPSIS}")
    }
}

/// Footer text for a selection count, or `None` when nothing is selected.
pub fn format_selection(count: usize) -> Option<String> {
    (count > 0).then(|| format!("{count} selected"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("File Explorer", 20, true), "File Explorer");
        assert_eq!(truncate("", 5, false), "");
    }

    #[test]
    fn test_truncate_prefix() {
        let title = "File Explorer - Directory 2";
        let short = truncate(title, 20, true);
        assert_eq!(short.chars().count(), 20);
        assert_eq!(short, "…lorer - Directory 2");
        assert!(short.starts_with('…'));
    }

    #[test]
    fn test_truncate_suffix() {
        assert_eq!(truncate("abcdefgh", 5, false), "abcd…");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("éééééé", 3, true), "…éé");
        assert_eq!(truncate("abc", 0, true), "");
    }

    #[test]
    fn test_format_selection() {
        assert_eq!(format_selection(0), None);
        assert_eq!(format_selection(3).as_deref(), Some("3 selected"));
    }
}

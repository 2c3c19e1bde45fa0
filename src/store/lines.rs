use crate::config::{LINE_SEPARATOR, LINE_TERMINATORS};

/// Splits text into lines, stripping `\n`, `\r\n` and lone `\r` terminators.
///
/// A terminator at the very end does not start another line: `"a\n"` yields `["a"]`.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(pos) => {
                lines.push(rest[..pos].to_string());
                let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + skip..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }
    lines
}

/// True when the last byte is a line terminator.
pub fn ends_with_terminator(bytes: &[u8]) -> bool {
    bytes
        .last()
        .is_some_and(|last| LINE_TERMINATORS.contains(last))
}

/// Joins lines with CRLF. The last line gets no separator; an empty slice joins to `""`.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let Some((last, init)) = lines.split_last() else {
        return String::new();
    };
    let capacity = lines.iter().map(|l| l.as_ref().len()).sum::<usize>()
        + init.len() * LINE_SEPARATOR.len();
    let mut out = String::with_capacity(capacity);
    for line in init {
        out.push_str(line.as_ref());
        out.push_str(LINE_SEPARATOR);
    }
    out.push_str(last.as_ref());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_mixed_terminators() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_trailing_terminator_adds_no_line() {
        assert_eq!(split_lines("a\r\n"), vec!["a"]);
        assert_eq!(split_lines("a\r\n\r\n"), vec!["a", ""]);
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_split_keeps_non_ascii() {
        assert_eq!(split_lines("héllo\r\n世界"), vec!["héllo", "世界"]);
    }

    #[test]
    fn test_ends_with_terminator() {
        assert!(ends_with_terminator(b"a\r\n"));
        assert!(ends_with_terminator(b"a\r"));
        assert!(!ends_with_terminator(b"a"));
        assert!(!ends_with_terminator(b""));
    }

    #[test]
    fn test_join_no_trailing_separator() {
        assert_eq!(join_lines(&["a", "b"]), "a\r\nb");
        assert_eq!(join_lines(&["a", ""]), "a\r\n");
        assert_eq!(join_lines(&["only"]), "only");
    }

    #[test]
    fn test_join_empty() {
        let none: [&str; 0] = [];
        assert_eq!(join_lines(&none), "");
    }
}

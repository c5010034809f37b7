//! Escaping of literal values.

/// Backslash-escape quotes and lone backslashes in a literal value.
///
/// A backslash that starts a wildcard escape (`\*`, `\?`) or a backslash pair (`\\`) is left
/// as it is, so values that were already escaped are not escaped twice.
pub fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut previous = None;
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => {
                let preceded = previous == Some('\\');
                let followed = matches!(chars.peek(), Some('*' | '?' | '\\'));
                if preceded || followed {
                    escaped.push('\\');
                } else {
                    escaped.push_str("\\\\");
                }
            }
            c => escaped.push(c),
        }
        previous = Some(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_value;

    #[test]
    fn plain_values_are_untouched() {
        assert_eq!(escape_value("cmd.exe /c whoami"), "cmd.exe /c whoami");
        assert_eq!(escape_value(""), "");
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(escape_value(r#"say "hi""#), r#"say \"hi\""#);
    }

    #[test]
    fn escapes_lone_backslashes() {
        assert_eq!(escape_value(r"C:\Windows\System32"), r"C:\\Windows\\System32");
        assert_eq!(escape_value("trailing\\"), "trailing\\\\");
    }

    #[test]
    fn keeps_wildcard_escapes_and_pairs() {
        assert_eq!(escape_value(r"a\*b"), r"a\*b");
        assert_eq!(escape_value(r"a\?b"), r"a\?b");
        assert_eq!(escape_value(r"a\\b"), r"a\\b");
    }

    #[test]
    fn backslash_quote_does_not_collide_with_wildcard_escape() {
        let quoted = escape_value(r#"a\"b"#);
        let wildcard = escape_value(r"a\*b");
        assert_eq!(quoted, r#"a\\\"b"#);
        assert_ne!(quoted, wildcard);
    }
}

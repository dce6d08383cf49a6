// hostsfile/src/scanner/scanner.rs

//! Line-by-line classifier.

use super::token::{Line, LineKind};

/// Line scanner for sectioned key/value files.
pub struct Scanner {
    input: String,
    comment_prefixes: Vec<char>,
    delimiters: Vec<char>,
}

impl Scanner {
    /// Create a new scanner for the given input.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            comment_prefixes: vec!['#', ';'],
            delimiters: vec!['=', ':'],
        }
    }

    /// Set key/value delimiters (default: ['=', ':']).
    pub fn with_delimiters(mut self, delimiters: Vec<char>) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Classify every line of the input.
    pub fn scan_all(&self) -> Vec<Line> {
        self.input
            .lines()
            .enumerate()
            .map(|(idx, raw)| self.scan_line(raw, idx + 1))
            .collect()
    }

    fn scan_line(&self, raw: &str, number: usize) -> Line {
        let text = raw.trim();
        let indent = raw.chars().take_while(|c| c.is_whitespace()).count();

        let kind = if text.is_empty() {
            LineKind::Blank
        } else if text.starts_with(|c: char| self.comment_prefixes.contains(&c)) {
            LineKind::Comment
        } else if let Some(name) = section_name(text) {
            LineKind::SectionHeader {
                name: name.to_string(),
            }
        } else if let Some(pos) = text.find(|c: char| self.delimiters.contains(&c)) {
            // The first delimiter wins, so values may contain ':' and '='.
            let (key, rest) = text.split_at(pos);
            let delimiter_len = rest.chars().next().map_or(0, char::len_utf8);
            LineKind::Assignment {
                key: key.trim_end().to_string(),
                value: rest[delimiter_len..].trim().to_string(),
            }
        } else {
            LineKind::Bare
        };

        Line::new(kind, text.to_string(), indent, number)
    }
}

/// Name between the first `[` and the last `]`, if the text is a header.
fn section_name(text: &str) -> Option<&str> {
    let inner = text.strip_prefix('[')?;
    let close = inner.rfind(']')?;
    if close == 0 {
        return None;
    }
    Some(&inner[..close])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<LineKind> {
        Scanner::new(input)
            .scan_all()
            .into_iter()
            .map(|line| line.kind)
            .collect()
    }

    #[test]
    fn test_scan_simple_file() {
        let input = "[work]\nweb = alice@10.0.0.1\n\n# note\n; other note\n";
        let expected = vec![
            LineKind::SectionHeader {
                name: "work".to_string(),
            },
            LineKind::Assignment {
                key: "web".to_string(),
                value: "alice@10.0.0.1".to_string(),
            },
            LineKind::Blank,
            LineKind::Comment,
            LineKind::Comment,
        ];
        assert_eq!(kinds(input), expected);
    }

    #[test]
    fn test_first_delimiter_splits() {
        let lines = Scanner::new("web: root@[::1] # a=b").scan_all();
        assert_eq!(
            lines[0].kind,
            LineKind::Assignment {
                key: "web".to_string(),
                value: "root@[::1] # a=b".to_string(),
            }
        );
    }

    #[test]
    fn test_hash_inside_value_is_not_a_comment() {
        let lines = Scanner::new("db = root@db1 # primary").scan_all();
        match &lines[0].kind {
            LineKind::Assignment { value, .. } => assert_eq!(value, "root@db1 # primary"),
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn test_header_uses_last_bracket() {
        assert_eq!(section_name("[a]b]"), Some("a]b"));
        assert_eq!(section_name("[lab] trailing"), Some("lab"));
        assert_eq!(section_name("[]"), None);
        assert_eq!(section_name("no header"), None);
    }

    #[test]
    fn test_indent_and_numbers() {
        let lines = Scanner::new("a = x@y\n    more text").scan_all();
        assert_eq!(lines[1].indent, 4);
        assert_eq!(lines[1].number, 2);
        assert_eq!(lines[1].kind, LineKind::Bare);
        assert_eq!(lines[1].text, "more text");
    }

    #[test]
    fn test_custom_delimiters() {
        let lines = Scanner::new("a: b = c").with_delimiters(vec!['=']).scan_all();
        assert_eq!(
            lines[0].kind,
            LineKind::Assignment {
                key: "a: b".to_string(),
                value: "c".to_string(),
            }
        );
    }
}

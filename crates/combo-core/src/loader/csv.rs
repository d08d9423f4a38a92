//! Minimal CSV record reader.
//!
//! Comma separated, `"` quoted with `""` escapes. A quote only opens a quoted
//! section at the start of a field; elsewhere it is literal. Quoted fields may
//! span lines. Blank lines produce records with no fields.

use std::mem;

/// One CSV record and the line it starts on (1-based)
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Record {
    pub line: usize,
    pub fields: Vec<String>,
}

/// A quoted field that runs to end of input. `line` is where the quote opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UnterminatedQuote {
    pub line: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    StartRecord,
    StartField,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

pub(crate) fn parse(content: &str) -> Result<Vec<Record>, UnterminatedQuote> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut state = State::StartRecord;
    let mut line = 1;
    let mut record_line = 1;
    let mut quote_line = 1;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        let newline = c == '\n' || c == '\r';
        if c == '\r' && chars.peek() == Some(&'\n') {
            chars.next();
        }

        match state {
            State::StartRecord | State::StartField => match c {
                '"' => {
                    quote_line = line;
                    state = State::Quoted;
                }
                ',' => {
                    fields.push(mem::take(&mut field));
                    state = State::StartField;
                }
                _ if newline => {
                    if state == State::StartField {
                        fields.push(mem::take(&mut field));
                    }
                    records.push(Record {
                        line: record_line,
                        fields: mem::take(&mut fields),
                    });
                    line += 1;
                    record_line = line;
                    state = State::StartRecord;
                }
                _ => {
                    field.push(c);
                    state = State::Unquoted;
                }
            },
            State::Unquoted | State::QuoteInQuoted => match c {
                '"' if state == State::QuoteInQuoted => {
                    field.push('"');
                    state = State::Quoted;
                }
                ',' => {
                    fields.push(mem::take(&mut field));
                    state = State::StartField;
                }
                _ if newline => {
                    fields.push(mem::take(&mut field));
                    records.push(Record {
                        line: record_line,
                        fields: mem::take(&mut fields),
                    });
                    line += 1;
                    record_line = line;
                    state = State::StartRecord;
                }
                _ => {
                    field.push(c);
                    state = State::Unquoted;
                }
            },
            State::Quoted => match c {
                '"' => state = State::QuoteInQuoted,
                _ if newline => {
                    field.push('\n');
                    line += 1;
                }
                _ => field.push(c),
            },
        }
    }

    match state {
        State::StartRecord => {}
        State::Quoted => return Err(UnterminatedQuote { line: quote_line }),
        State::StartField | State::Unquoted | State::QuoteInQuoted => {
            fields.push(field);
            records.push(Record {
                line: record_line,
                fields,
            });
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(content: &str) -> Vec<Vec<String>> {
        parse(content)
            .unwrap()
            .into_iter()
            .map(|r| r.fields)
            .collect()
    }

    #[test]
    fn test_plain_rows() {
        assert_eq!(
            fields("액션,테트리스\n퍼즐,갤러그\n"),
            vec![vec!["액션", "테트리스"], vec!["퍼즐", "갤러그"]]
        );
    }

    #[test]
    fn test_quoted_field_with_commas() {
        assert_eq!(
            fields("액션 게임,\"테트리스[1988], 갤러그\"\r\n"),
            vec![vec!["액션 게임", "테트리스[1988], 갤러그"]]
        );
    }

    #[test]
    fn test_escaped_quote_and_trailing_text() {
        assert_eq!(fields("\"a\"\"b\",\"c\"d"), vec![vec!["a\"b", "cd"]]);
        assert_eq!(fields("a\"b,c"), vec![vec!["a\"b", "c"]]);
    }

    #[test]
    fn test_empty_fields_and_blank_line() {
        let records = parse("a,\n\n,b").unwrap();
        assert_eq!(records[0].fields, vec!["a", ""]);
        assert!(records[1].fields.is_empty());
        assert_eq!(records[2].fields, vec!["", "b"]);
        assert_eq!(records[2].line, 3);
    }

    #[test]
    fn test_multiline_quoted_field_line_numbers() {
        let records = parse("a,\"x\ny\"\nb,c\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].fields, vec!["a", "x\ny"]);
        assert_eq!(records[1].line, 3);
    }

    #[test]
    fn test_unterminated_quote() {
        assert_eq!(
            parse("a,b\nc,\"open\nmore"),
            Err(UnterminatedQuote { line: 2 })
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").unwrap().is_empty());
    }
}

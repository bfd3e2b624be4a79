//! Java-style `.properties` parsing using nom
//!
//! Supports `key=value`, `key: value` and `key value` entries, `#`/`!` comment
//! lines, backslash line continuations and the usual escapes (`\t`, `\n`,
//! `\uXXXX`, escaped separators).

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::take_while,
    character::complete::{anychar, char, none_of, one_of},
    combinator::{opt, recognize, rest},
    multi::many0,
    sequence::preceded,
};

use super::LoadError;

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Key characters up to the first unescaped separator
fn key(input: &str) -> IResult<&str, &str> {
    recognize(many0(alt((
        recognize(preceded(char('\\'), anychar)),
        recognize(none_of(" \t\x0c=:\\")),
    ))))
    .parse(input)
}

/// Whitespace, at most one `=` or `:`, then whitespace
fn separator(input: &str) -> IResult<&str, &str> {
    recognize((take_while(is_blank), opt(one_of("=:")), take_while(is_blank))).parse(input)
}

fn entry(input: &str) -> IResult<&str, (&str, &str)> {
    (key, preceded(separator, rest)).parse(input)
}

/// A physical line ends in a continuation when it has an odd number of trailing backslashes
fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

/// Join continued physical lines into logical lines, dropping blanks and comments.
///
/// Returns the 1-based line number each logical line started on.
fn logical_lines(content: &str) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    let mut current: Option<(usize, String)> = None;

    for (index, raw) in content.lines().enumerate() {
        let trimmed = raw.trim_start_matches(is_blank);

        let (start, mut buffer) = match current.take() {
            Some(pending) => pending,
            None => {
                if trimmed.is_empty() || trimmed.starts_with(['#', '!']) {
                    continue;
                }
                (index + 1, String::new())
            }
        };

        if continues(trimmed) {
            buffer.push_str(&trimmed[..trimmed.len() - 1]);
            current = Some((start, buffer));
        } else {
            buffer.push_str(trimmed);
            lines.push((start, buffer));
        }
    }

    // A continuation on the last line just ends the value
    if let Some(pending) = current {
        lines.push(pending);
    }

    lines
}

/// Read the four hex digits of a `\uXXXX` escape
fn code_unit(chars: &mut std::str::Chars<'_>, line: usize) -> Result<u16, LoadError> {
    let hex: String = chars.by_ref().take(4).collect();
    if hex.len() != 4 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(malformed_escape(line, &hex));
    }
    u16::from_str_radix(&hex, 16).map_err(|_| malformed_escape(line, &hex))
}

fn malformed_escape(line: usize, hex: &str) -> LoadError {
    LoadError::Properties {
        line,
        message: format!("malformed \\u escape: \\u{hex}"),
    }
}

/// Decode a `\u` escape, joining a high surrogate with the `\uXXXX` low surrogate after it
fn unicode_escape(chars: &mut std::str::Chars<'_>, line: usize) -> Result<char, LoadError> {
    let first = code_unit(chars, line)?;
    let mut units = vec![first];

    if (0xD800..0xDC00).contains(&first) {
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            *chars = lookahead;
            units.push(code_unit(chars, line)?);
        }
    }

    let mut decoded = char::decode_utf16(units.iter().copied());
    match (decoded.next(), decoded.next()) {
        (Some(Ok(c)), None) => Ok(c),
        _ => Err(LoadError::Properties {
            line,
            message: format!("unpaired surrogate in \\u escape: \\u{first:04X}"),
        }),
    }
}

fn unescape(raw: &str, line: usize) -> Result<String, LoadError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => out.push(unicode_escape(&mut chars, line)?),
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

/// Parse properties text into `(key, value)` pairs in file order.
///
/// Later duplicates are kept in order, so collecting into a map lets the last one win.
pub fn parse_properties(content: &str) -> Result<Vec<(String, String)>, LoadError> {
    logical_lines(content)
        .into_iter()
        .map(|(line, text)| {
            let (_, (key, value)) = entry(&text).map_err(|e| LoadError::Properties {
                line,
                message: e.to_string(),
            })?;
            Ok((unescape(key, line)?, unescape(value, line)?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Vec<(String, String)> {
        parse_properties(content).unwrap()
    }

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_owned(), v.to_owned())
    }

    #[test]
    fn separators() {
        assert_eq!(
            parse("a=1\nb : 2\nc 3\nd=\n"),
            vec![pair("a", "1"), pair("b", "2"), pair("c", "3"), pair("d", "")]
        );
    }

    #[test]
    fn value_keeps_inner_separators_and_trailing_text() {
        assert_eq!(
            parse("findUser = SELECT * FROM t WHERE a = ? AND b: c"),
            vec![pair("findUser", "SELECT * FROM t WHERE a = ? AND b: c")]
        );
    }

    #[test]
    fn comments_and_blank_lines() {
        assert_eq!(
            parse("# comment\n   ! also comment\n\n  \nkey=value\n"),
            vec![pair("key", "value")]
        );
    }

    #[test]
    fn continuation_lines() {
        let content = "findUser = SELECT * \\\n    FROM users \\\n    WHERE id = ?\nnext=1\n";
        assert_eq!(
            parse(content),
            vec![
                pair("findUser", "SELECT * FROM users WHERE id = ?"),
                pair("next", "1")
            ]
        );
    }

    #[test]
    fn escaped_backslash_is_not_a_continuation() {
        assert_eq!(
            parse("path=C:\\\\\nother=1\n"),
            vec![pair("path", "C:\\"), pair("other", "1")]
        );
    }

    #[test]
    fn escapes() {
        assert_eq!(
            parse("my\\=key=tab\\there \\u00e9\n"),
            vec![pair("my=key", "tab\there é")]
        );
    }

    #[test]
    fn dotted_keys_are_kept_verbatim() {
        assert_eq!(
            parse("findUser.mysql=SELECT 1"),
            vec![pair("findUser.mysql", "SELECT 1")]
        );
    }

    #[test]
    fn surrogate_pairs_decode_to_one_char() {
        assert_eq!(
            parse("smile=\\uD83D\\uDE00!\nlower=\\ud83d\\ude00\n"),
            vec![pair("smile", "\u{1F600}!"), pair("lower", "\u{1F600}")]
        );
    }

    #[test]
    fn unpaired_surrogates_are_rejected() {
        for content in ["k=\\uD83D\n", "k=\\uD83Dx\n", "k=\\uDE00\n", "k=\\uD83D\\u0041\n"] {
            assert!(
                matches!(parse_properties(content), Err(LoadError::Properties { line: 1, .. })),
                "{content}"
            );
        }
    }

    #[test]
    fn unicode_escape_needs_four_hex_digits() {
        for content in ["k=\\u+041\n", "k=\\u-041\n", "k=\\u12\n", "k=\\u00g1\n"] {
            assert!(parse_properties(content).is_err(), "{content}");
        }
    }

    #[test]
    fn malformed_unicode_escape_reports_line() {
        let err = parse_properties("a=1\nb=\\u12\n").unwrap_err();
        match err {
            LoadError::Properties { line, .. } => assert_eq!(line, 2),
            other => panic!("expected properties error, got {other:?}"),
        }
    }
}

//! Operator and punctuation scanning: a longest-prefix-match table checked
//! longest-first so `...` isn't mistaken for `..` followed by `.`, `<=` for
//! `<` followed by `=`, and so on.

use crate::error::{LexErrorKind, LineError};
use crate::line_lexer::cursor::LineCursor;
use crate::token::{LineToken, LineTokenKind};

const THREE_CHAR: &[(&str, LineTokenKind)] = &[("...", LineTokenKind::Ellipsis)];

const TWO_CHAR: &[(&str, LineTokenKind)] = &[
    ("..", LineTokenKind::DotDot),
    ("=>", LineTokenKind::FatArrow),
    ("<=", LineTokenKind::LessThanEqualTo),
    ("<>", LineTokenKind::NotEqual),
    (">=", LineTokenKind::GreaterThanEqualTo),
];

const ONE_CHAR: &[(char, LineTokenKind)] = &[
    ('(', LineTokenKind::LeftParenthesis),
    (')', LineTokenKind::RightParenthesis),
    ('[', LineTokenKind::LeftBracket),
    (']', LineTokenKind::RightBracket),
    ('{', LineTokenKind::LeftBrace),
    ('}', LineTokenKind::RightBrace),
    (';', LineTokenKind::Semicolon),
    (',', LineTokenKind::Comma),
    ('@', LineTokenKind::AtSign),
    ('?', LineTokenKind::QuestionMark),
    ('=', LineTokenKind::Equal),
    ('<', LineTokenKind::LessThan),
    ('>', LineTokenKind::GreaterThan),
    ('+', LineTokenKind::Plus),
    ('-', LineTokenKind::Minus),
    ('*', LineTokenKind::Asterisk),
    ('/', LineTokenKind::Division),
    ('&', LineTokenKind::Ampersand),
];

/// Called at any character that isn't whitespace, an identifier/`#` start,
/// a digit, `.` before a digit, `"`, or `//`/`/*`. Matches the longest
/// operator or punctuation lexeme starting here, or reports
/// [`LexErrorKind::UnexpectedRead`].
pub fn lex_operator(cursor: &mut LineCursor<'_>) -> Result<LineToken, LineError> {
    let start = cursor.position();

    for (text, kind) in THREE_CHAR {
        if cursor.starts_with(text) {
            cursor.bump_str(text);
            return Ok(finish(start, cursor, *kind));
        }
    }
    for (text, kind) in TWO_CHAR {
        if cursor.starts_with(text) {
            cursor.bump_str(text);
            return Ok(finish(start, cursor, *kind));
        }
    }
    if let Some(c) = cursor.peek() {
        for (ch, kind) in ONE_CHAR {
            if *ch == c {
                cursor.bump();
                return Ok(finish(start, cursor, *kind));
            }
        }
        return Err(LineError {
            kind: LexErrorKind::UnexpectedRead(c),
            line_code_unit: start,
        });
    }

    Err(LineError {
        kind: LexErrorKind::UnexpectedEof,
        line_code_unit: start,
    })
}

fn finish(start: u32, cursor: &LineCursor<'_>, kind: LineTokenKind) -> LineToken {
    LineToken {
        kind,
        data: cursor.slice_from(start).to_string(),
        position_start: start,
        position_end: cursor.position(),
    }
}

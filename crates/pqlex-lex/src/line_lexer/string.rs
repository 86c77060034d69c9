//! Text literal scanning. M escapes an embedded `"` by doubling it
//! (`"say ""hi""""`), so a lone `"` closes the literal but `""` does not.

use crate::line_lexer::cursor::LineCursor;
use crate::token::{LineToken, LineTokenKind};

/// Called just after the opening `"` has been matched but not consumed.
pub fn lex_text_literal_start(cursor: &mut LineCursor<'_>) -> LineToken {
    let start = cursor.position();
    debug_assert_eq!(cursor.peek(), Some('"'));
    cursor.bump();

    match scan_for_close(cursor) {
        true => LineToken {
            kind: LineTokenKind::TextLiteral,
            data: cursor.slice_from(start).to_string(),
            position_start: start,
            position_end: cursor.position(),
        },
        false => LineToken {
            kind: LineTokenKind::TextLiteralStart,
            data: cursor.slice_from(start).to_string(),
            position_start: start,
            position_end: cursor.position(),
        },
    }
}

/// Called when a line starts already inside a text literal
/// (`mode_start == LexMode::Text`).
pub fn continue_text_literal(cursor: &mut LineCursor<'_>) -> LineToken {
    let start = cursor.position();

    match scan_for_close(cursor) {
        true => LineToken {
            kind: LineTokenKind::TextLiteralEnd,
            data: cursor.slice_from(start).to_string(),
            position_start: start,
            position_end: cursor.position(),
        },
        false => LineToken {
            kind: LineTokenKind::TextLiteralContent,
            data: cursor.slice_from(start).to_string(),
            position_start: start,
            position_end: cursor.position(),
        },
    }
}

/// Advances the cursor past content up to and including an unescaped
/// closing `"`. Returns `true` if a close was found before end of line,
/// `false` if the cursor reached end of line while still inside the
/// literal (a `""` pair is consumed as a single escaped quote and does not
/// close the literal).
fn scan_for_close(cursor: &mut LineCursor<'_>) -> bool {
    loop {
        match cursor.peek() {
            None => return false,
            Some('"') => {
                if cursor.peek_second() == Some('"') {
                    cursor.bump();
                    cursor.bump();
                } else {
                    cursor.bump();
                    return true;
                }
            }
            Some(_) => {
                cursor.bump();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_literal_on_one_line() {
        let mut c = LineCursor::new(r#""hello" rest"#);
        let tok = lex_text_literal_start(&mut c);
        assert_eq!(tok.kind, LineTokenKind::TextLiteral);
        assert_eq!(tok.data, r#""hello""#);
        assert_eq!(c.rest(), " rest");
    }

    #[test]
    fn escaped_quote_does_not_close() {
        let mut c = LineCursor::new(r#""say ""hi""""#);
        let tok = lex_text_literal_start(&mut c);
        assert_eq!(tok.kind, LineTokenKind::TextLiteral);
        assert_eq!(tok.data, r#""say ""hi""""#);
        assert!(c.is_eof());
    }

    #[test]
    fn unterminated_literal_becomes_start_fragment() {
        let mut c = LineCursor::new(r#""no close here"#);
        let tok = lex_text_literal_start(&mut c);
        assert_eq!(tok.kind, LineTokenKind::TextLiteralStart);
        assert!(c.is_eof());
    }

    #[test]
    fn continuation_closes() {
        let mut c = LineCursor::new(r#"more text" rest"#);
        let tok = continue_text_literal(&mut c);
        assert_eq!(tok.kind, LineTokenKind::TextLiteralEnd);
        assert_eq!(tok.data, r#"more text""#);
        assert_eq!(c.rest(), " rest");
    }

    #[test]
    fn continuation_stays_open() {
        let mut c = LineCursor::new("still no close");
        let tok = continue_text_literal(&mut c);
        assert_eq!(tok.kind, LineTokenKind::TextLiteralContent);
        assert!(c.is_eof());
    }
}

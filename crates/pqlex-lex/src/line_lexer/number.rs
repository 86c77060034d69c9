//! Numeric and hex literal scanning. Both are captured as raw lexeme text —
//! value parsing is a downstream concern, not the lexer's.

use crate::error::{LexErrorKind, LineError};
use crate::line_lexer::cursor::LineCursor;
use crate::token::{LineToken, LineTokenKind};
use crate::unicode::is_digit_in_base;

/// Called at a digit, or at `.` followed by a digit. Handles the optional
/// `0x`/`0X` hex prefix, the optional fractional part, and the optional
/// exponent (`e`/`E` with an optional sign).
pub fn lex_number(cursor: &mut LineCursor<'_>) -> Result<LineToken, LineError> {
    let start = cursor.position();

    if cursor.peek() == Some('0') && matches!(cursor.peek_second(), Some('x') | Some('X')) {
        return lex_hex_literal(cursor, start);
    }

    while matches!(cursor.peek(), Some(c) if is_digit_in_base(c, 10)) {
        cursor.bump();
    }

    if cursor.peek() == Some('.') && matches!(cursor.peek_second(), Some(c) if is_digit_in_base(c, 10))
    {
        cursor.bump();
        while matches!(cursor.peek(), Some(c) if is_digit_in_base(c, 10)) {
            cursor.bump();
        }
    }

    if matches!(cursor.peek(), Some('e') | Some('E')) {
        let mark = cursor.position();
        cursor.bump();
        if matches!(cursor.peek(), Some('+') | Some('-')) {
            cursor.bump();
        }
        if matches!(cursor.peek(), Some(c) if is_digit_in_base(c, 10)) {
            while matches!(cursor.peek(), Some(c) if is_digit_in_base(c, 10)) {
                cursor.bump();
            }
        } else {
            return Err(LineError {
                kind: LexErrorKind::ExpectedNumericLiteral,
                line_code_unit: mark,
            });
        }
    }

    if cursor.position() == start {
        return Err(LineError {
            kind: LexErrorKind::ExpectedNumericLiteral,
            line_code_unit: start,
        });
    }

    Ok(LineToken {
        kind: LineTokenKind::NumericLiteral,
        data: cursor.slice_from(start).to_string(),
        position_start: start,
        position_end: cursor.position(),
    })
}

fn lex_hex_literal(cursor: &mut LineCursor<'_>, start: u32) -> Result<LineToken, LineError> {
    cursor.bump();
    cursor.bump();

    let digits_start = cursor.position();
    while matches!(cursor.peek(), Some(c) if is_digit_in_base(c, 16)) {
        cursor.bump();
    }

    if cursor.position() == digits_start {
        return Err(LineError {
            kind: LexErrorKind::ExpectedHexLiteral,
            line_code_unit: start,
        });
    }

    Ok(LineToken {
        kind: LineTokenKind::HexLiteral,
        data: cursor.slice_from(start).to_string(),
        position_start: start,
        position_end: cursor.position(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_integer() {
        let mut c = LineCursor::new("123 rest");
        let tok = lex_number(&mut c).unwrap();
        assert_eq!(tok.kind, LineTokenKind::NumericLiteral);
        assert_eq!(tok.data, "123");
    }

    #[test]
    fn decimal_with_fraction() {
        let mut c = LineCursor::new("3.14");
        let tok = lex_number(&mut c).unwrap();
        assert_eq!(tok.data, "3.14");
        assert!(c.is_eof());
    }

    #[test]
    fn exponent_with_sign() {
        let mut c = LineCursor::new("1.5e-10");
        let tok = lex_number(&mut c).unwrap();
        assert_eq!(tok.data, "1.5e-10");
    }

    #[test]
    fn dangling_exponent_is_error() {
        let mut c = LineCursor::new("1e");
        let err = lex_number(&mut c).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::ExpectedNumericLiteral);
    }

    #[test]
    fn hex_literal() {
        let mut c = LineCursor::new("0xFF rest");
        let tok = lex_number(&mut c).unwrap();
        assert_eq!(tok.kind, LineTokenKind::HexLiteral);
        assert_eq!(tok.data, "0xFF");
    }

    #[test]
    fn hex_literal_missing_digits_is_error() {
        let mut c = LineCursor::new("0x rest");
        let err = lex_number(&mut c).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::ExpectedHexLiteral);
    }

    #[test]
    fn trailing_dot_not_consumed_without_digit() {
        let mut c = LineCursor::new("12.");
        let tok = lex_number(&mut c).unwrap();
        assert_eq!(tok.data, "12");
        assert_eq!(c.rest(), ".");
    }
}

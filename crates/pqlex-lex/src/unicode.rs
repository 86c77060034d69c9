//! Character classification helpers shared by the line-lexer submodules.
//!
//! This module provides functions for validating Unicode characters in
//! identifiers and classifying digits, kept separate from the scanning code
//! so each is independently testable.

/// Checks if a character is valid as the start of an identifier.
///
/// Valid identifier start characters:
/// - ASCII letters: a-z, A-Z
/// - Underscore: _
/// - Unicode letters (categories L*)
///
/// # Example
///
/// ```
/// use pqlex_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('α'));  // Greek alpha
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('+'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character is valid as a continuation of an identifier.
///
/// Valid identifier continuation characters are all start characters plus
/// digits. The M grammar additionally allows `.` inside an identifier body
/// (e.g. `Table.AddColumn`), which callers must check for separately since
/// it is not a general "continue" character (it cannot start an
/// identifier).
///
/// # Example
///
/// ```
/// use pqlex_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('_'));
/// assert!(is_ident_continue('1'));
/// assert!(is_ident_continue('α'));
/// assert!(!is_ident_continue('+'));
/// assert!(!is_ident_continue(' '));
/// ```
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Checks if a character is a valid digit in the given numeric base.
/// Only decimal and hexadecimal are meaningful for M numeric literals.
///
/// # Example
///
/// ```
/// use pqlex_lex::unicode::is_digit_in_base;
///
/// assert!(is_digit_in_base('0', 10));
/// assert!(is_digit_in_base('9', 10));
/// assert!(!is_digit_in_base('a', 10));
///
/// assert!(is_digit_in_base('0', 16));
/// assert!(is_digit_in_base('f', 16));
/// assert!(is_digit_in_base('F', 16));
/// ```
pub fn is_digit_in_base(c: char, base: u32) -> bool {
    match base {
        10 => c.is_ascii_digit(),
        16 => c.is_ascii_hexdigit(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ident_start_ascii() {
        for c in 'a'..='z' {
            assert!(is_ident_start(c), "{c} should be ident start");
        }
        for c in 'A'..='Z' {
            assert!(is_ident_start(c), "{c} should be ident start");
        }
        assert!(is_ident_start('_'));
    }

    #[test]
    fn ident_start_unicode() {
        assert!(is_ident_start('α'));
        assert!(is_ident_start('あ'));
        assert!(is_ident_start('中'));
        assert!(is_ident_start('ñ'));
    }

    #[test]
    fn ident_start_invalid() {
        for c in '0'..='9' {
            assert!(!is_ident_start(c), "{c} should not be ident start");
        }
        assert!(!is_ident_start('+'));
        assert!(!is_ident_start(' '));
        assert!(!is_ident_start('\n'));
    }

    #[test]
    fn ident_continue() {
        assert!(is_ident_continue('a'));
        assert!(is_ident_continue('_'));
        for c in '0'..='9' {
            assert!(is_ident_continue(c), "{c} should be ident continue");
        }
        assert!(is_ident_continue('α'));
    }

    #[test]
    fn ident_continue_invalid() {
        assert!(!is_ident_continue('+'));
        assert!(!is_ident_continue(' '));
        assert!(!is_ident_continue('.'));
        assert!(!is_ident_continue(';'));
    }

    #[test]
    fn digit_in_base_decimal_and_hex() {
        for c in '0'..='9' {
            assert!(is_digit_in_base(c, 10));
        }
        assert!(!is_digit_in_base('a', 10));
        for c in '0'..='9' {
            assert!(is_digit_in_base(c, 16));
        }
        for c in 'a'..='f' {
            assert!(is_digit_in_base(c, 16));
        }
        for c in 'A'..='F' {
            assert!(is_digit_in_base(c, 16));
        }
        assert!(!is_digit_in_base('g', 16));
        assert!(!is_digit_in_base('0', 2));
    }
}

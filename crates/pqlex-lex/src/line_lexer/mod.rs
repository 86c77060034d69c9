//! Component B — the inner line lexer.
//!
//! [`lex_line`] processes exactly one physical line, carrying only the
//! [`LexMode`] it started in. It never looks at any other line: the same
//! text lexed with the same `mode_start` always produces the same result,
//! which is what makes incremental re-lexing (`crate::state`) sound.

pub mod comment;
pub mod cursor;
pub mod identifier;
pub mod number;
pub mod operator;
pub mod string;

use cursor::LineCursor;

use crate::error::LineError;
use crate::token::{LexMode, LineToken};
use crate::unicode::is_ident_start;

/// The result of lexing one physical line in isolation.
pub struct LineLexResult {
    pub tokens: Vec<LineToken>,
    pub mode_end: LexMode,
    /// At most one error: the line lexer stops at the first one, matching
    /// the "malformed content halts that line's lexing" rule.
    pub error: Option<LineError>,
}

/// Lexes `text` (one physical line, terminator excluded) starting in
/// `mode_start`.
pub fn lex_line(text: &str, mode_start: LexMode) -> LineLexResult {
    let mut cursor = LineCursor::new(text);
    let mut tokens = Vec::new();
    let mut mode = mode_start;

    // A line that starts mid-construct resolves that construct first; the
    // continuation call may itself close it and leave the rest of the line
    // for ordinary dispatch below.
    match mode {
        LexMode::Comment => {
            let tok = comment::continue_multiline_comment(&mut cursor);
            mode = if tok.kind == crate::token::LineTokenKind::MultilineCommentEnd {
                LexMode::Default
            } else {
                LexMode::Comment
            };
            tokens.push(tok);
        }
        LexMode::Text => {
            let tok = string::continue_text_literal(&mut cursor);
            mode = if tok.kind == crate::token::LineTokenKind::TextLiteralEnd {
                LexMode::Default
            } else {
                LexMode::Text
            };
            tokens.push(tok);
        }
        LexMode::QuotedIdentifier => {
            let tok = identifier::continue_quoted_identifier(&mut cursor);
            mode = if tok.kind == crate::token::LineTokenKind::QuotedIdentifierEnd {
                LexMode::Default
            } else {
                LexMode::QuotedIdentifier
            };
            tokens.push(tok);
        }
        LexMode::Default => {}
    }

    if mode != LexMode::Default {
        return LineLexResult {
            tokens,
            mode_end: mode,
            error: None,
        };
    }

    loop {
        skip_whitespace(&mut cursor);
        if cursor.is_eof() {
            break;
        }

        let c = cursor.peek().expect("checked not eof");

        let outcome = if c == '#' {
            identifier::lex_hash_form(&mut cursor)
        } else if is_ident_start(c) {
            Ok(identifier::lex_identifier_or_keyword(&mut cursor))
        } else if c.is_ascii_digit() || (c == '.' && cursor.peek_second().is_some_and(|d| d.is_ascii_digit()))
        {
            number::lex_number(&mut cursor)
        } else if c == '"' {
            Ok(string::lex_text_literal_start(&mut cursor))
        } else if cursor.starts_with("//") {
            Ok(comment::lex_line_comment(&mut cursor))
        } else if cursor.starts_with("/*") {
            Ok(comment::lex_multiline_comment_start(&mut cursor))
        } else {
            operator::lex_operator(&mut cursor)
        };

        match outcome {
            Ok(tok) => {
                let became_fragment_mode = match tok.kind {
                    crate::token::LineTokenKind::MultilineCommentStart => Some(LexMode::Comment),
                    crate::token::LineTokenKind::TextLiteralStart => Some(LexMode::Text),
                    crate::token::LineTokenKind::QuotedIdentifierStart => {
                        Some(LexMode::QuotedIdentifier)
                    }
                    _ => None,
                };
                tokens.push(tok);
                if let Some(m) = became_fragment_mode {
                    mode = m;
                    break;
                }
            }
            Err(err) => {
                return LineLexResult {
                    tokens,
                    mode_end: LexMode::Default,
                    error: Some(err),
                };
            }
        }
    }

    LineLexResult {
        tokens,
        mode_end: mode,
        error: None,
    }
}

fn skip_whitespace(cursor: &mut LineCursor<'_>) {
    while matches!(cursor.peek(), Some(c) if c.is_ascii_whitespace()) {
        cursor.bump();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::LineTokenKind;

    #[test]
    fn empty_line_produces_no_tokens() {
        let result = lex_line("", LexMode::Default);
        assert!(result.tokens.is_empty());
        assert_eq!(result.mode_end, LexMode::Default);
        assert!(result.error.is_none());
    }

    #[test]
    fn whitespace_only_line() {
        let result = lex_line("   \t  ", LexMode::Default);
        assert!(result.tokens.is_empty());
        assert_eq!(result.mode_end, LexMode::Default);
    }

    #[test]
    fn simple_expression() {
        let result = lex_line("let x = 1 + 2", LexMode::Default);
        let kinds: Vec<_> = result.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LineTokenKind::KeywordLet,
                LineTokenKind::Identifier,
                LineTokenKind::Equal,
                LineTokenKind::NumericLiteral,
                LineTokenKind::Plus,
                LineTokenKind::NumericLiteral,
            ]
        );
        assert_eq!(result.mode_end, LexMode::Default);
    }

    #[test]
    fn multiline_comment_open_stops_the_line() {
        let result = lex_line("x; /* start", LexMode::Default);
        assert_eq!(result.mode_end, LexMode::Comment);
        assert_eq!(
            result.tokens.last().unwrap().kind,
            LineTokenKind::MultilineCommentStart
        );
    }

    #[test]
    fn multiline_comment_close_resumes_dispatch() {
        let result = lex_line("still comment */ + 1", LexMode::Comment);
        let kinds: Vec<_> = result.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LineTokenKind::MultilineCommentEnd,
                LineTokenKind::Plus,
                LineTokenKind::NumericLiteral,
            ]
        );
        assert_eq!(result.mode_end, LexMode::Default);
    }

    #[test]
    fn error_stops_line_lexing() {
        let result = lex_line("x ` y", LexMode::Default);
        assert_eq!(result.tokens.len(), 1);
        assert!(result.error.is_some());
    }

    #[test]
    fn leading_dot_fraction() {
        let result = lex_line(".5", LexMode::Default);
        assert_eq!(result.tokens.len(), 1);
        assert_eq!(result.tokens[0].kind, LineTokenKind::NumericLiteral);
        assert_eq!(result.tokens[0].data, ".5");
    }
}

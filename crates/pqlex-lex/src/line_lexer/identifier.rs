//! Identifier, keyword, and quoted-identifier scanning.
//!
//! Three shapes share this module because they all start by looking at
//! what follows the first character: a bare identifier, a `#keyword`
//! (`#table`, `#date`, ...), or a `#"quoted identifier"`.

use crate::error::{LexErrorKind, LineError};
use crate::keyword;
use crate::line_lexer::cursor::LineCursor;
use crate::line_lexer::string;
use crate::token::{LineToken, LineTokenKind};
use crate::unicode::{is_ident_continue, is_ident_start};

/// Called at a character for which [`is_ident_start`] holds.
pub fn lex_identifier_or_keyword(cursor: &mut LineCursor<'_>) -> LineToken {
    let start = cursor.position();
    scan_identifier_body(cursor);
    let text = cursor.slice_from(start);

    let kind = keyword::lookup(text).unwrap_or(LineTokenKind::Identifier);
    LineToken {
        kind,
        data: text.to_string(),
        position_start: start,
        position_end: cursor.position(),
    }
}

/// Called at `#`. Dispatches to a quoted identifier (`#"..."`), a hash
/// keyword (`#table`, `#date`, ...), or an error if neither shape matches.
pub fn lex_hash_form(cursor: &mut LineCursor<'_>) -> Result<LineToken, LineError> {
    let start = cursor.position();
    debug_assert_eq!(cursor.peek(), Some('#'));

    if cursor.peek_second() == Some('"') {
        cursor.bump();
        return Ok(string::lex_text_literal_start(cursor).retag_as_quoted_identifier(start));
    }

    cursor.bump();
    if !matches!(cursor.peek(), Some(c) if is_ident_start(c)) {
        return Err(LineError {
            kind: LexErrorKind::ExpectedKeywordOrIdentifier,
            line_code_unit: start,
        });
    }
    while matches!(cursor.peek(), Some(c) if is_ident_continue(c)) {
        cursor.bump();
    }

    let text = cursor.slice_from(start);
    match keyword::lookup(text) {
        Some(kind) => Ok(LineToken {
            kind,
            data: text.to_string(),
            position_start: start,
            position_end: cursor.position(),
        }),
        None => Err(LineError {
            kind: LexErrorKind::ExpectedKeywordOrIdentifier,
            line_code_unit: start,
        }),
    }
}

impl LineToken {
    /// A `#"..."` quoted identifier is scanned with the same
    /// doubled-quote-escaping rules as a text literal, then retagged:
    /// `TextLiteral`/`*Start`/`*Content`/`*End` become the matching
    /// `Identifier`/`QuotedIdentifier*` kind and the token's span is
    /// widened to include the leading `#`.
    fn retag_as_quoted_identifier(mut self, outer_start: u32) -> Self {
        self.kind = match self.kind {
            LineTokenKind::TextLiteral => LineTokenKind::Identifier,
            LineTokenKind::TextLiteralStart => LineTokenKind::QuotedIdentifierStart,
            LineTokenKind::TextLiteralContent => LineTokenKind::QuotedIdentifierContent,
            LineTokenKind::TextLiteralEnd => LineTokenKind::QuotedIdentifierEnd,
            other => other,
        };
        self.position_start = outer_start;
        self.data = format!("#{}", self.data);
        self
    }
}

fn scan_identifier_body(cursor: &mut LineCursor<'_>) {
    cursor.bump();
    loop {
        if matches!(cursor.peek(), Some(c) if is_ident_continue(c)) {
            cursor.bump();
            continue;
        }
        if cursor.peek() == Some('.') && matches!(cursor.peek_second(), Some(c) if is_ident_start(c))
        {
            cursor.bump();
            continue;
        }
        break;
    }
}

/// Called when a line starts already inside a quoted identifier
/// (`mode_start == LexMode::QuotedIdentifier`). Reuses the text-literal
/// continuation scanner and retags the result.
pub fn continue_quoted_identifier(cursor: &mut LineCursor<'_>) -> LineToken {
    let tok = string::continue_text_literal(cursor);
    let start = tok.position_start;
    tok.retag_as_quoted_identifier(start)
}

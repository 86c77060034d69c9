//! Line and multiline comment scanning.

use crate::line_lexer::cursor::LineCursor;
use crate::token::{LineToken, LineTokenKind};

/// `//` to end of line. Never spans lines, so there is no fragment variant.
pub fn lex_line_comment(cursor: &mut LineCursor<'_>) -> LineToken {
    let start = cursor.position();
    debug_assert!(cursor.starts_with("//"));
    cursor.bump_to_eol();
    LineToken {
        kind: LineTokenKind::LineComment,
        data: cursor.slice_from(start).to_string(),
        position_start: start,
        position_end: cursor.position(),
    }
}

/// Called just after the opening `/*` has been matched (but not yet
/// consumed). Scans the rest of the line for `*/`; if found, the comment is
/// complete and the cursor stops right after it, leaving the rest of the
/// line for the `Default`-mode dispatcher. If not found, the whole rest of
/// the line becomes the fragment's content and the mode carries to
/// [`crate::token::LexMode::Comment`].
pub fn lex_multiline_comment_start(cursor: &mut LineCursor<'_>) -> LineToken {
    let start = cursor.position();
    debug_assert!(cursor.starts_with("/*"));
    cursor.bump_str("/*");

    match find_close(cursor.rest()) {
        Some(offset) => {
            cursor.bump_str(&cursor.rest()[..offset + 2]);
            LineToken {
                kind: LineTokenKind::MultilineComment,
                data: cursor.slice_from(start).to_string(),
                position_start: start,
                position_end: cursor.position(),
            }
        }
        None => {
            cursor.bump_to_eol();
            LineToken {
                kind: LineTokenKind::MultilineCommentStart,
                data: cursor.slice_from(start).to_string(),
                position_start: start,
                position_end: cursor.position(),
            }
        }
    }
}

/// Called when a line starts already inside a multiline comment
/// (`mode_start == LexMode::Comment`). Scans for `*/` from the start of the
/// line; on success the mode returns to `Default` and the dispatcher picks
/// up right after the fragment.
pub fn continue_multiline_comment(cursor: &mut LineCursor<'_>) -> LineToken {
    let start = cursor.position();

    match find_close(cursor.rest()) {
        Some(offset) => {
            cursor.bump_str(&cursor.rest()[..offset + 2]);
            LineToken {
                kind: LineTokenKind::MultilineCommentEnd,
                data: cursor.slice_from(start).to_string(),
                position_start: start,
                position_end: cursor.position(),
            }
        }
        None => {
            cursor.bump_to_eol();
            LineToken {
                kind: LineTokenKind::MultilineCommentContent,
                data: cursor.slice_from(start).to_string(),
                position_start: start,
                position_end: cursor.position(),
            }
        }
    }
}

fn find_close(text: &str) -> Option<usize> {
    text.find("*/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::LexMode;

    #[test]
    fn line_comment_consumes_to_eol() {
        let mut c = LineCursor::new("// hello");
        let tok = lex_line_comment(&mut c);
        assert_eq!(tok.kind, LineTokenKind::LineComment);
        assert_eq!(tok.data, "// hello");
        assert!(c.is_eof());
    }

    #[test]
    fn multiline_comment_complete_on_one_line() {
        let mut c = LineCursor::new("/* hi */ rest");
        let tok = lex_multiline_comment_start(&mut c);
        assert_eq!(tok.kind, LineTokenKind::MultilineComment);
        assert_eq!(tok.data, "/* hi */");
        assert_eq!(c.rest(), " rest");
    }

    #[test]
    fn multiline_comment_unterminated_on_line() {
        let mut c = LineCursor::new("/* start of comment");
        let tok = lex_multiline_comment_start(&mut c);
        assert_eq!(tok.kind, LineTokenKind::MultilineCommentStart);
        assert_eq!(tok.data, "/* start of comment");
        assert!(c.is_eof());
    }

    #[test]
    fn continuation_closes_mid_line() {
        let mut c = LineCursor::new("still comment */ code");
        let tok = continue_multiline_comment(&mut c);
        assert_eq!(tok.kind, LineTokenKind::MultilineCommentEnd);
        assert_eq!(tok.data, "still comment */");
        assert_eq!(c.rest(), " code");
        let _ = LexMode::Comment;
    }

    #[test]
    fn continuation_stays_open() {
        let mut c = LineCursor::new("more comment text");
        let tok = continue_multiline_comment(&mut c);
        assert_eq!(tok.kind, LineTokenKind::MultilineCommentContent);
        assert!(c.is_eof());
    }
}

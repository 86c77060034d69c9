//! Component C — the per-line record [`LexerState`](crate::state::LexerState)
//! threads its cascade over.

use pqlex_util::LineEnding;

use crate::error::LineError;
use crate::token::{LexMode, LineToken};

/// How a line's stored lex result relates to its current text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStatus {
    /// Lexed against its current text; no error.
    Touched,
    /// Not yet lexed since being inserted or since an edit invalidated it.
    Untouched,
    /// Lexed against its current text; produced an error.
    TouchedWithError,
}

/// The terminator a line ended with, plus the code-unit width of that
/// terminator — carried alongside [`LineEnding`] so absolute-position math
/// doesn't need to re-derive the length from the enum on every use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineTerminator {
    pub kind: LineEnding,
    pub len_code_units: u32,
}

impl LineTerminator {
    pub fn new(kind: LineEnding) -> Self {
        Self {
            kind,
            len_code_units: kind.len_code_units(),
        }
    }
}

/// One physical line of source text together with the result of lexing it
/// in isolation: the fragments it produced, the mode it started and ended
/// in, and its status relative to the text it was last lexed against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub terminator: LineTerminator,
    pub status: LineStatus,
    pub mode_start: LexMode,
    pub mode_end: LexMode,
    pub tokens: Vec<LineToken>,
    pub error: Option<LineError>,
}

impl Line {
    /// Builds an as-yet-unlexed line. `lex_line` (see `crate::line_lexer`)
    /// fills in `mode_end`/`tokens`/`error` and flips `status` out of
    /// `Untouched`.
    pub fn untouched(text: String, terminator: LineTerminator, mode_start: LexMode) -> Self {
        Self {
            text,
            terminator,
            status: LineStatus::Untouched,
            mode_start,
            mode_end: mode_start,
            tokens: Vec::new(),
            error: None,
        }
    }

    pub fn code_unit_len(&self) -> u32 {
        self.text.len() as u32
    }
}

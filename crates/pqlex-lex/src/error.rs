//! Component E (errors) — the closed set of lex errors and the aggregated
//! error a snapshot attempt can fail with.
//!
//! Two error families exist and are deliberately kept apart:
//!
//! - **Lex errors** — malformed or unterminated tokens. User-facing,
//!   always carry a position, captured at the line level and aggregated
//!   when a snapshot is built. Modeled here as [`LexErrorKind`] /
//!   [`LineError`] / [`LexError`].
//! - **Invariant violations** — "this should be impossible" states (a
//!   fragment start followed by the wrong terminator kind, for instance).
//!   These never flow through a `Result`: per the error-handling design,
//!   wrapping them in the same envelope as a recoverable lex error would
//!   let a caller silently treat a corrupted state as just another parse
//!   failure. They panic immediately via [`invariant_violation`] instead.

use std::fmt;

use pqlex_util::GraphemePosition;

/// Which multiline construct was left unterminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnterminatedKind {
    MultilineComment,
    String,
    QuotedIdentifier,
}

impl fmt::Display for UnterminatedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UnterminatedKind::MultilineComment => "multiline comment",
            UnterminatedKind::String => "text literal",
            UnterminatedKind::QuotedIdentifier => "quoted identifier",
        };
        f.write_str(s)
    }
}

/// The closed set of lex error kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LexErrorKind {
    /// The lexer reached end of input while a token required more.
    UnexpectedEof,
    /// A character that cannot begin any token.
    UnexpectedRead(char),
    /// `0x`/`0X` was not followed by at least one hex digit.
    ExpectedHexLiteral,
    /// An identifier-looking lexeme failed keyword/identifier classification.
    ExpectedKeywordOrIdentifier,
    /// A numeric literal's grammar was violated (e.g. no digits at all).
    ExpectedNumericLiteral,
    /// A multiline construct's start fragment was never matched by an end
    /// fragment before the state ran out of lines.
    UnterminatedMultilineToken(UnterminatedKind),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnexpectedEof => write!(f, "unexpected end of input"),
            LexErrorKind::UnexpectedRead(c) => write!(f, "unexpected character '{c}'"),
            LexErrorKind::ExpectedHexLiteral => write!(f, "expected a hex literal"),
            LexErrorKind::ExpectedKeywordOrIdentifier => {
                write!(f, "expected a keyword or identifier")
            }
            LexErrorKind::ExpectedNumericLiteral => write!(f, "expected a numeric literal"),
            LexErrorKind::UnterminatedMultilineToken(kind) => {
                write!(f, "unterminated {kind}")
            }
        }
    }
}

/// A lex error captured at the line level, before the line's absolute
/// position in the full text is known. `line_code_unit` is relative to the
/// start of the line that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineError {
    pub kind: LexErrorKind,
    pub line_code_unit: u32,
}

/// One error site in an aggregated [`LexError`], with a fully resolved,
/// grapheme-accurate position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexErrorSite {
    pub kind: LexErrorKind,
    pub position: GraphemePosition,
}

impl fmt::Display for LexErrorSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.kind,
            self.position.line_number + 1,
            self.position.column_number + 1
        )
    }
}

/// The error a snapshot attempt fails with: every affected site, never a
/// partial result.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("lexing failed at {} site(s): {}", .0.len(), render_sites(.0))]
pub struct LexError(pub Vec<LexErrorSite>);

fn render_sites(sites: &[LexErrorSite]) -> String {
    sites
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type LexResult<T> = Result<T, LexError>;

/// Panics with a message identifying the impossible state. Call sites are
/// places the stitcher or cascade logic proved can't happen given the
/// invariants in `spec.md` §3 — e.g. a `MultilineCommentStart` fragment
/// followed by anything other than `MultilineCommentContent`/`*End`.
#[track_caller]
pub(crate) fn invariant_violation(message: impl fmt::Display) -> ! {
    panic!("pqlex invariant violated: {message}");
}

//! pqlex-lex — incremental line-based lexical core for the M expression
//! language.
//!
//! ============================================================================
//! TWO LAYERS
//! ============================================================================
//!
//! The lexer is split into an inner and an outer layer, each independently
//! testable:
//!
//! - **The line lexer** (`line_lexer`) is a pure function of one physical
//!   line's text plus the [`LexMode`](token::LexMode) it starts in. It never
//!   looks past the line it's given. Constructs that don't fit on one line
//!   (`/* ... */`, `"..."`, `#"..."`) come out as *fragments* —
//!   [`LineTokenKind`](token::LineTokenKind) variants like
//!   `MultilineCommentStart` — paired with the mode the next line must start
//!   in.
//! - **The snapshot builder** (`snapshot`) walks every line's fragments in
//!   order and stitches them into whole [`Token`](token::Token)s and
//!   [`Comment`](token::Comment)s with absolute positions, or reports every
//!   malformed or unterminated site at once.
//!
//! Between the two sits [`LexerState`](state::LexerState): the editable
//! collection of lines an editor mutates one edit at a time. Editing a line
//! re-lexes it and then cascades downstream only as long as each
//! recomputed `mode_start` keeps disagreeing with what was stored — once a
//! line's mode is unchanged, every line after it is provably unchanged too,
//! since the line lexer is pure in `(text, mode_start)`.
//!
//! ============================================================================
//! TYPICAL USE
//! ============================================================================
//!
//! ```
//! use pqlex_lex::state::LexerState;
//! use pqlex_lex::snapshot::LexerSnapshot;
//!
//! let mut state = LexerState::from_text("let x = 1\nx + 1");
//! let snapshot = LexerSnapshot::try_from(&state).expect("valid source");
//! assert_eq!(snapshot.tokens.len(), 7);
//!
//! state.update_line(1, "x + 2".to_string());
//! let snapshot = LexerSnapshot::try_from(&state).expect("still valid");
//! assert_eq!(snapshot.tokens[6].data, "2");
//! ```

pub mod error;
pub mod keyword;
pub mod line;
pub mod line_lexer;
pub mod snapshot;
pub mod state;
pub mod token;
pub mod unicode;

pub use error::{LexError, LexErrorKind, LexErrorSite, LexResult, LineError, UnterminatedKind};
pub use line::{Line, LineStatus, LineTerminator};
pub use snapshot::LexerSnapshot;
pub use state::LexerState;
pub use token::{Comment, CommentKind, LexMode, LineToken, LineTokenKind, Token, TokenKind};

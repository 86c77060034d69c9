//! pqlex-util — shared source-position primitives for the `pqlex` workspace.
//!
//! ============================================================================
//! WHY A SEPARATE CRATE
//! ============================================================================
//!
//! Two pieces of the lexical core are general enough to outlive the lexer
//! itself: splitting text into lines without losing a byte, and turning a
//! code-unit offset into a column a human can read. A downstream parser, a
//! future formatter, or an editor's gutter renderer all need the same
//! grapheme-accurate column math the lexer uses for its own diagnostics —
//! so it lives here rather than being re-derived per consumer.
//!
//! `pqlex-lex` depends on this crate; it does not depend on `pqlex-lex`.
//!
//! ============================================================================
//! CODE UNITS
//! ============================================================================
//!
//! The originating specification for this lexer counts positions in UTF-16
//! code units, matching the host environment it was designed for. This
//! workspace counts positions in UTF-8 bytes instead — Rust's native string
//! representation — and documents the substitution once, here, rather than
//! at every call site:
//!
//! - Every invariant stated in terms of "code units" (round-trip,
//!   non-overlap, coverage of `[0, line.len())`) holds identically whether
//!   the unit is a UTF-16 code unit or a UTF-8 byte, because both are
//!   defined purely in terms of the encoding's own addressable unit and
//!   neither changes the *set* of valid split points within a `char`
//!   boundary-respecting implementation.
//! - The one place the distinction is visible to a caller is the *value* of
//!   an offset for non-ASCII text (a UTF-16 surrogate pair is 2 code units;
//!   its UTF-8 encoding is up to 4 bytes). Callers that need UTF-16 offsets
//!   for a host API (e.g. a browser-hosted editor) are expected to convert
//!   at the boundary, the same way they would convert grapheme columns for
//!   display; this crate does not attempt that conversion itself.

pub mod line_split;
pub mod position;

pub use line_split::{split_lines, LineEnding, SplitLine};
pub use position::{grapheme_column, GraphemePosition, Position};

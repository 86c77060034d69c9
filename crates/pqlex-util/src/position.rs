//! Source positions and grapheme-accurate columns.
//!
//! A [`Position`] is the lexer's internal currency: an absolute code-unit
//! offset from the start of the text, paired with the line-relative offset
//! and the zero-based line number it falls on. Positions are cheap to
//! construct and compare, which is what the hot paths (stitching, the
//! incremental cascade) need.
//!
//! [`GraphemePosition`] is the opposite: expensive to compute (it walks the
//! line counting extended grapheme clusters) and meant only for the rare
//! path — formatting a diagnostic for a human. Never carry a
//! `GraphemePosition` through the lexer's hot loop; derive it on demand from
//! a `Position` plus the enclosing line's text.
//!
//! Code units here are UTF-8 byte offsets rather than the UTF-16 code units
//! the originating spec assumes; see `DESIGN.md` for why that substitution
//! is sound for every invariant this crate checks.

use unicode_segmentation::UnicodeSegmentation;

/// An absolute source position, in code units from the start of the text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Offset from the start of the whole text.
    pub code_unit: u32,
    /// Offset from the start of the containing line.
    pub line_code_unit: u32,
    /// Zero-based line number.
    pub line_number: u32,
}

impl Position {
    pub const fn new(code_unit: u32, line_code_unit: u32, line_number: u32) -> Self {
        Self {
            code_unit,
            line_code_unit,
            line_number,
        }
    }
}

/// A human-facing position: the column is counted in extended grapheme
/// clusters (UAX #29) rather than code units, so combining marks and ZWJ
/// sequences count as one column each.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GraphemePosition {
    pub line_number: u32,
    pub line_code_unit: u32,
    pub column_number: u32,
}

impl GraphemePosition {
    /// Derive a grapheme position from an absolute [`Position`] and the text
    /// of the line it falls on. `line_text` must be the line's content
    /// without its terminator.
    pub fn from_position(position: Position, line_text: &str) -> Self {
        Self {
            line_number: position.line_number,
            line_code_unit: position.line_code_unit,
            column_number: grapheme_column(line_text, position.line_code_unit as usize),
        }
    }
}

/// Counts the number of extended grapheme clusters that start strictly
/// before `line_code_unit` in `line_text`. This is the column number (zero
/// based) a human would assign that offset.
///
/// `line_code_unit` may fall past the end of `line_text` (e.g. a position
/// one past the last character); in that case every cluster in the line is
/// counted.
pub fn grapheme_column(line_text: &str, line_code_unit: usize) -> u32 {
    UnicodeSegmentation::grapheme_indices(line_text, true)
        .take_while(|(idx, _)| *idx < line_code_unit)
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_column_matches_byte_offset() {
        assert_eq!(grapheme_column("abcdef", 0), 0);
        assert_eq!(grapheme_column("abcdef", 3), 3);
        assert_eq!(grapheme_column("abcdef", 6), 6);
    }

    #[test]
    fn combining_mark_counts_as_one_column() {
        // "e\u{0301}" (e + combining acute accent) is one grapheme cluster.
        let line = "e\u{0301}bc";
        assert_eq!(line.len(), 1 + 2 + 1 + 1); // 'e' + combining mark (2 bytes) + 'b' + 'c'
        assert_eq!(grapheme_column(line, 0), 0);
        // Offset 3 is the byte right after the combining mark, i.e. the
        // start of "b" — exactly one grapheme cluster precedes it.
        assert_eq!(grapheme_column(line, 3), 1);
        assert_eq!(grapheme_column(line, 4), 2);
    }

    #[test]
    fn zwj_sequence_counts_as_one_column() {
        // family emoji built from four ZWJ-joined codepoints.
        let line = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}X";
        let total_len = line.len();
        assert_eq!(grapheme_column(line, total_len), 2);
    }

    #[test]
    fn offset_past_end_counts_every_cluster() {
        assert_eq!(grapheme_column("abc", 1000), 3);
    }
}

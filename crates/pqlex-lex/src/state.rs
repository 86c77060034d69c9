//! Component D — the editable, incrementally re-lexed line collection.
//!
//! [`LexerState`] is the mutable side of the crate: a text editor calls
//! [`LexerState::update_line`] (or the range/append/delete variants) after
//! each keystroke-sized edit, and only the lines the edit actually disturbed
//! get re-lexed, by the cascade rule in `crate::state`'s module doc:
//!
//! > re-lex the edited line(s), then keep re-lexing downstream lines until a
//! > line's recomputed `mode_start` equals the `mode_start` it already had
//! > stored. At that point every line after it is guaranteed unchanged,
//! > because the inner line lexer is a pure function of `(text, mode_start)`.

use pqlex_util::{split_lines, LineEnding};

use crate::line::{Line, LineStatus, LineTerminator};
use crate::line_lexer;
use crate::token::LexMode;

/// The editable collection of lines backing a lexer session. Always has at
/// least one line, matching `split_lines`'s guarantee that even empty text
/// produces one (empty) line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerState {
    lines: Vec<Line>,
}

impl LexerState {
    /// Builds a state from whole-document text, lexing every line once.
    pub fn from_text(text: &str) -> Self {
        let mut state = Self { lines: Vec::new() };
        let mut mode = LexMode::Default;
        for split in split_lines(text) {
            let terminator = LineTerminator::new(split.terminator);
            let mut line = Line::untouched(split.text, terminator, mode);
            relex(&mut line);
            mode = line.mode_end;
            state.lines.push(line);
        }
        state
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Replaces the text of the line at `index`, then cascades.
    pub fn update_line(&mut self, index: usize, text: String) {
        self.lines[index].text = text;
        self.lines[index].status = LineStatus::Untouched;
        self.cascade_from(index);
    }

    /// Replaces the terminator of the line at `index` without touching its
    /// text — used when an edit only changes how a line ends (e.g. `\n`
    /// becomes `\r\n`). Does not require re-lexing since the terminator
    /// plays no part in `lex_line`.
    pub fn update_terminator(&mut self, index: usize, terminator: LineEnding) {
        self.lines[index].terminator = LineTerminator::new(terminator);
    }

    /// Inserts a new line at `index`, shifting later lines down, then
    /// cascades from the insertion point.
    pub fn insert_line(&mut self, index: usize, text: String, terminator: LineEnding) {
        let mode_start = if index == 0 {
            LexMode::Default
        } else {
            self.lines[index - 1].mode_end
        };
        let line = Line::untouched(text, LineTerminator::new(terminator), mode_start);
        self.lines.insert(index, line);
        self.cascade_from(index);
    }

    /// Appends a line at the end of the state — the common case when a
    /// document grows by typing past its last line.
    pub fn append_line(&mut self, text: String, terminator: LineEnding) {
        let index = self.lines.len();
        self.insert_line(index, text, terminator);
    }

    /// Removes the line at `index`, then cascades from the line that took
    /// its place (or re-lexes nothing, if the removed line was last).
    pub fn delete_line(&mut self, index: usize) {
        self.lines.remove(index);
        if self.lines.is_empty() {
            self.lines.push(Line::untouched(
                String::new(),
                LineTerminator::new(LineEnding::None),
                LexMode::Default,
            ));
            return;
        }
        if index < self.lines.len() {
            self.cascade_from(index);
        } else {
            self.cascade_from(index - 1);
        }
    }

    /// Replaces the source spanned by `(start_line, start_col)` through
    /// `(end_line, end_col)` (a `GraphemePosition`-free, code-unit range —
    /// column conversion from a human-facing position is the caller's job)
    /// with `replacement_text`, then cascades from `start_line`.
    ///
    /// Reconstructs the affected lines rather than requiring the caller to
    /// pre-split them: the untouched prefix of `start_line` and the
    /// untouched suffix of `end_line` are stitched around
    /// `replacement_text` and re-split on its embedded terminators, exactly
    /// as a text editor's selection-replace would produce. The final
    /// reconstructed line inherits `end_line`'s original terminator, since
    /// the suffix's own terminator was never part of the edited range.
    pub fn update_range(
        &mut self,
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
        replacement_text: &str,
    ) {
        let prefix = &self.lines[start_line].text[..start_col];
        let suffix = &self.lines[end_line].text[end_col..];
        let tail_terminator = self.lines[end_line].terminator.kind;

        let combined = format!("{prefix}{replacement_text}{suffix}");
        let mut replacement: Vec<(String, LineEnding)> = split_lines(&combined)
            .into_iter()
            .map(|split| (split.text, split.terminator))
            .collect();
        if let Some(last) = replacement.last_mut() {
            last.1 = tail_terminator;
        }

        self.splice_lines(start_line, end_line + 1, replacement);
    }

    /// Replaces the half-open range `start..end` of whole lines with
    /// `replacement` lines (each a `(text, terminator)` pair), then cascades
    /// from `start`. The line-granular primitive `update_range` builds on.
    fn splice_lines(&mut self, start: usize, end: usize, replacement: Vec<(String, LineEnding)>) {
        let mode_start = if start == 0 {
            LexMode::Default
        } else {
            self.lines[start - 1].mode_end
        };
        let new_lines = replacement
            .into_iter()
            .map(|(text, terminator)| {
                Line::untouched(text, LineTerminator::new(terminator), mode_start)
            })
            .collect::<Vec<_>>();
        let insert_count = new_lines.len();
        self.lines.splice(start..end, new_lines);
        if insert_count == 0 && start < self.lines.len() {
            self.cascade_from(start);
        } else if insert_count > 0 {
            self.cascade_from(start);
        }
    }

    fn cascade_from(&mut self, start: usize) {
        let mut index = start;
        let mut mode = if index == 0 {
            LexMode::Default
        } else {
            self.lines[index - 1].mode_end
        };

        loop {
            let Some(line) = self.lines.get_mut(index) else {
                break;
            };

            let first_pass = index == start;
            if !first_pass && line.status != LineStatus::Untouched && line.mode_start == mode {
                break;
            }

            line.mode_start = mode;
            relex(line);
            mode = line.mode_end;
            index += 1;
        }
    }
}

fn relex(line: &mut Line) {
    let result = line_lexer::lex_line(&line.text, line.mode_start);
    line.tokens = result.tokens;
    line.mode_end = result.mode_end;
    match result.error {
        Some(err) => {
            line.error = Some(err);
            line.status = LineStatus::TouchedWithError;
        }
        None => {
            line.error = None;
            line.status = LineStatus::Touched;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_lexes_every_line() {
        let state = LexerState::from_text("let x = 1\nx + 1");
        assert_eq!(state.line_count(), 2);
        assert!(state.lines().iter().all(|l| l.status != LineStatus::Untouched));
    }

    #[test]
    fn editing_a_line_only_recascades_until_mode_matches() {
        let mut state = LexerState::from_text("1\n2\n3\n4");
        for line in &state.lines {
            assert_eq!(line.mode_start, LexMode::Default);
        }
        state.update_line(1, "22".to_string());
        assert_eq!(state.lines()[1].text, "22");
        // None of these lines ever leave Default mode, so the cascade
        // should have stopped immediately after re-lexing line 1.
        assert_eq!(state.lines()[1].status, LineStatus::Touched);
    }

    #[test]
    fn opening_a_multiline_comment_cascades_mode_to_following_lines() {
        let mut state = LexerState::from_text("1\n2\n3");
        state.update_line(0, "/* start".to_string());
        assert_eq!(state.lines()[0].mode_end, LexMode::Comment);
        assert_eq!(state.lines()[1].mode_start, LexMode::Comment);
        assert_eq!(state.lines()[1].mode_end, LexMode::Comment);
        assert_eq!(state.lines()[2].mode_start, LexMode::Comment);
    }

    #[test]
    fn closing_a_multiline_comment_stops_the_cascade() {
        let mut state = LexerState::from_text("/* start\nstill open\nstill open\nplain");
        assert_eq!(state.lines()[3].mode_start, LexMode::Comment);
        state.update_line(2, "closes now */".to_string());
        assert_eq!(state.lines()[2].mode_end, LexMode::Default);
        assert_eq!(state.lines()[3].mode_start, LexMode::Default);
    }

    #[test]
    fn append_line_extends_the_document() {
        let mut state = LexerState::from_text("1");
        state.append_line("2".to_string(), LineEnding::Lf);
        assert_eq!(state.line_count(), 2);
        assert_eq!(state.lines()[1].text, "2");
    }

    #[test]
    fn delete_line_cascades_from_the_gap() {
        let mut state = LexerState::from_text("/* start\nclose */\nplain");
        state.delete_line(1);
        assert_eq!(state.line_count(), 2);
        // "plain" now immediately follows the still-open comment start.
        assert_eq!(state.lines()[1].mode_start, LexMode::Comment);
    }

    #[test]
    fn delete_last_line_of_document_leaves_one_empty_line() {
        let mut state = LexerState::from_text("only");
        state.delete_line(0);
        assert_eq!(state.line_count(), 1);
        assert_eq!(state.lines()[0].text, "");
    }

    #[test]
    fn update_range_reconstructs_a_single_line_insertion() {
        // spec.md §8 scenario 7: `let x = 1` with `/*` inserted at col 8
        // reads `let x = /*1`, leaving the line open in Comment mode.
        let mut state = LexerState::from_text("let x = 1");
        state.update_range(0, 8, 0, 8, "/*");
        assert_eq!(state.lines()[0].text, "let x = /*1");
        assert_eq!(state.lines()[0].mode_end, LexMode::Comment);
    }

    #[test]
    fn appending_after_an_opened_comment_completes_it_on_snapshot() {
        let mut state = LexerState::from_text("let x = 1");
        state.update_range(0, 8, 0, 8, "/*");
        state.append_line("*/".to_string(), LineEnding::None);
        assert_eq!(state.line_count(), 2);
        assert_eq!(state.lines()[1].mode_start, LexMode::Comment);
        assert_eq!(state.lines()[1].mode_end, LexMode::Default);
    }

    #[test]
    fn update_range_spanning_multiple_lines_merges_prefix_and_suffix() {
        let mut state = LexerState::from_text("abc\ndef\nghi");
        // Replace from (line 0, col 1) through (line 2, col 2) — i.e. the
        // text "bc\ndef\ng" — with a single replacement line.
        state.update_range(0, 1, 2, 2, "XYZ");
        assert_eq!(state.line_count(), 1);
        assert_eq!(state.lines()[0].text, "aXYZhi");
    }

    #[test]
    fn update_range_with_embedded_newline_splits_into_two_lines() {
        let mut state = LexerState::from_text("one two");
        state.update_range(0, 3, 0, 4, "\n");
        assert_eq!(state.line_count(), 2);
        assert_eq!(state.lines()[0].text, "one");
        assert_eq!(state.lines()[0].terminator.kind, LineEnding::Lf);
        assert_eq!(state.lines()[1].text, "two");
    }
}

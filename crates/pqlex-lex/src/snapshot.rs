//! Component F — the outer snapshot builder: stitches every line's
//! fragments into whole tokens and comments with absolute positions, or
//! fails with every affected site at once.
//!
//! A [`LexerSnapshot`] is built fresh from a [`LexerState`] whenever a
//! caller needs one; nothing here is incremental — the incrementality lives
//! entirely in `crate::state`'s per-line cascade. Building a snapshot is
//! `O(total tokens)`, dominated by walking each line's already-computed
//! fragments once.

use pqlex_util::{GraphemePosition, Position};

use crate::error::{invariant_violation, LexError, LexErrorKind, LexErrorSite, LexResult, UnterminatedKind};
use crate::line::{Line, LineTerminator};
use crate::state::LexerState;
use crate::token::{Comment, CommentKind, LineToken, LineTokenKind, Token, TokenKind};

/// A complete, valid lex of a document at one point in time: every whole
/// token and comment with absolute positions, plus the terminator each line
/// ended with (needed to reproduce the source text verbatim).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerSnapshot {
    pub text: String,
    pub tokens: Vec<Token>,
    pub comments: Vec<Comment>,
    pub line_terminators: Vec<LineTerminator>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FragmentFamily {
    TextLiteral,
    QuotedIdentifier,
    MultilineComment,
}

impl FragmentFamily {
    fn of(kind: LineTokenKind) -> Self {
        match kind {
            LineTokenKind::TextLiteralStart
            | LineTokenKind::TextLiteralContent
            | LineTokenKind::TextLiteralEnd => FragmentFamily::TextLiteral,
            LineTokenKind::QuotedIdentifierStart
            | LineTokenKind::QuotedIdentifierContent
            | LineTokenKind::QuotedIdentifierEnd => FragmentFamily::QuotedIdentifier,
            LineTokenKind::MultilineCommentStart
            | LineTokenKind::MultilineCommentContent
            | LineTokenKind::MultilineCommentEnd => FragmentFamily::MultilineComment,
            _ => invariant_violation("FragmentFamily::of called on a non-fragment kind"),
        }
    }

    fn unterminated_kind(self) -> UnterminatedKind {
        match self {
            FragmentFamily::TextLiteral => UnterminatedKind::String,
            FragmentFamily::QuotedIdentifier => UnterminatedKind::QuotedIdentifier,
            FragmentFamily::MultilineComment => UnterminatedKind::MultilineComment,
        }
    }
}

struct Pending {
    family: FragmentFamily,
    data: String,
    position_start: Position,
}

impl LexerSnapshot {
    /// Builds a snapshot from `state`, or the set of every error site if any
    /// line failed to lex or a multiline construct was never closed.
    pub fn try_from(state: &LexerState) -> LexResult<Self> {
        let line_starts = line_starts(state);
        let mut sites = Vec::new();
        let mut tokens = Vec::new();
        let mut comments = Vec::new();
        let mut line_terminators = Vec::new();
        let mut pending: Option<Pending> = None;

        for (li, line) in state.lines().iter().enumerate() {
            line_terminators.push(line.terminator);

            if let Some(err) = &line.error {
                let position = Position::new(
                    line_starts[li] + err.line_code_unit,
                    err.line_code_unit,
                    li as u32,
                );
                sites.push(LexErrorSite {
                    kind: err.kind.clone(),
                    position: GraphemePosition::from_position(position, &line.text),
                });
            }

            for tok in &line.tokens {
                stitch_one(tok, li, &line_starts, line, &mut pending, &mut tokens, &mut comments);
            }
        }

        if let Some(p) = pending.take() {
            let position = GraphemePosition::from_position(
                p.position_start,
                &state.lines()[p.position_start.line_number as usize].text,
            );
            sites.push(LexErrorSite {
                kind: LexErrorKind::UnterminatedMultilineToken(p.family.unterminated_kind()),
                position,
            });
        }

        if !sites.is_empty() {
            return Err(LexError(sites));
        }

        let text = state
            .lines()
            .iter()
            .map(|l| format!("{}{}", l.text, l.terminator.kind))
            .collect();

        Ok(LexerSnapshot {
            text,
            tokens,
            comments,
            line_terminators,
        })
    }
}

fn stitch_one(
    tok: &LineToken,
    li: usize,
    line_starts: &[u32],
    line: &Line,
    pending: &mut Option<Pending>,
    tokens: &mut Vec<Token>,
    comments: &mut Vec<Comment>,
) {
    let abs_start = |p: u32| Position::new(line_starts[li] + p, p, li as u32);

    if tok.kind.is_fragment() {
        let family = FragmentFamily::of(tok.kind);
        let is_start = matches!(
            tok.kind,
            LineTokenKind::TextLiteralStart
                | LineTokenKind::QuotedIdentifierStart
                | LineTokenKind::MultilineCommentStart
        );
        let is_end = matches!(
            tok.kind,
            LineTokenKind::TextLiteralEnd
                | LineTokenKind::QuotedIdentifierEnd
                | LineTokenKind::MultilineCommentEnd
        );

        if is_start {
            if pending.is_some() {
                invariant_violation("fragment start while another fragment is already open");
            }
            *pending = Some(Pending {
                family,
                data: tok.data.clone(),
                position_start: abs_start(tok.position_start),
            });
            return;
        }

        let p = pending
            .as_mut()
            .unwrap_or_else(|| invariant_violation("fragment continuation with no open fragment"));
        if p.family != family {
            invariant_violation("fragment continuation's family does not match the open fragment");
        }
        p.data.push_str(&tok.data);

        if is_end {
            let finished = pending.take().unwrap();
            let position_end = abs_start(tok.position_end);
            match finished.family {
                FragmentFamily::TextLiteral => tokens.push(Token {
                    kind: TokenKind::TextLiteral,
                    data: finished.data,
                    position_start: finished.position_start,
                    position_end,
                }),
                FragmentFamily::QuotedIdentifier => tokens.push(Token {
                    kind: TokenKind::Identifier,
                    data: finished.data,
                    position_start: finished.position_start,
                    position_end,
                }),
                FragmentFamily::MultilineComment => comments.push(Comment {
                    kind: CommentKind::Multiline,
                    data: finished.data,
                    contains_newline: true,
                    position_start: finished.position_start,
                    position_end,
                }),
            }
        }
        return;
    }

    match tok.kind {
        LineTokenKind::LineComment => comments.push(Comment {
            kind: CommentKind::Line,
            data: tok.data.clone(),
            contains_newline: false,
            position_start: abs_start(tok.position_start),
            position_end: abs_start(tok.position_end),
        }),
        LineTokenKind::MultilineComment => comments.push(Comment {
            kind: CommentKind::Multiline,
            data: tok.data.clone(),
            contains_newline: false,
            position_start: abs_start(tok.position_start),
            position_end: abs_start(tok.position_end),
        }),
        _ => {
            let kind = tok
                .kind
                .to_token_kind()
                .unwrap_or_else(|| invariant_violation("non-fragment, non-comment kind with no TokenKind projection"));
            tokens.push(Token {
                kind,
                data: tok.data.clone(),
                position_start: abs_start(tok.position_start),
                position_end: abs_start(tok.position_end),
            });
        }
    }
    let _ = line;
}

fn line_starts(state: &LexerState) -> Vec<u32> {
    let mut starts = Vec::with_capacity(state.line_count());
    let mut offset = 0u32;
    for line in state.lines() {
        starts.push(offset);
        offset += line.code_unit_len() + line.terminator.len_code_units;
    }
    starts
}

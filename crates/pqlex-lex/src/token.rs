//! Token kinds and the token/comment/line-token data types.
//!
//! [`LineTokenKind`] is the closed set a single physical line can produce.
//! Nine of its variants are *fragments* — the start, content, or end of a
//! construct that spans more than one line — and never appear in a
//! [`TokenKind`], which is the set the snapshot builder (`crate::snapshot`)
//! actually hands to a downstream parser.

use pqlex_util::Position;

/// The lexer's automaton state carried across a line boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LexMode {
    #[default]
    Default,
    Comment,
    Text,
    QuotedIdentifier,
}

/// Every kind of token a single physical line can produce, including the
/// fragment kinds used for constructs that span multiple lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineTokenKind {
    Identifier,
    NumericLiteral,
    HexLiteral,

    KeywordAnd,
    KeywordAs,
    KeywordEach,
    KeywordElse,
    KeywordError,
    KeywordFalse,
    KeywordIf,
    KeywordIn,
    KeywordIs,
    KeywordLet,
    KeywordMeta,
    KeywordNot,
    KeywordNull,
    KeywordOr,
    KeywordOtherwise,
    KeywordSection,
    KeywordShared,
    KeywordThen,
    KeywordTrue,
    KeywordTry,
    KeywordType,
    KeywordHashBinary,
    KeywordHashDate,
    KeywordHashDateTime,
    KeywordHashDateTimeZone,
    KeywordHashDuration,
    KeywordHashInfinity,
    KeywordHashNan,
    KeywordHashSections,
    KeywordHashShared,
    KeywordHashTable,
    KeywordHashTime,

    /// A text literal complete on one line, e.g. `"hello"`.
    TextLiteral,
    /// `"` opens a text literal with no terminating `"` on this line.
    TextLiteralStart,
    /// The interior of a text literal on a line that is neither its first
    /// nor its last.
    TextLiteralContent,
    /// The line containing the terminating `"` of a text literal opened on
    /// an earlier line.
    TextLiteralEnd,

    /// `#"` ... `"` opens and closes a quoted identifier with no embedded
    /// newline; unifies into `Identifier` at the whole-token level.
    QuotedIdentifierStart,
    QuotedIdentifierContent,
    QuotedIdentifierEnd,

    LineComment,
    /// `/* ... */` complete on one line.
    MultilineComment,
    MultilineCommentStart,
    MultilineCommentContent,
    MultilineCommentEnd,

    LeftParenthesis,
    RightParenthesis,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Semicolon,
    Comma,
    AtSign,
    QuestionMark,
    FatArrow,
    Equal,
    LessThan,
    LessThanEqualTo,
    NotEqual,
    GreaterThan,
    GreaterThanEqualTo,
    Plus,
    Minus,
    Asterisk,
    Division,
    Ampersand,
    DotDot,
    Ellipsis,
}

impl LineTokenKind {
    /// True for the nine fragment kinds that only ever appear mid-construct
    /// and never reach a [`Token`] directly — the snapshot builder
    /// assembles them into a single whole token or comment.
    pub const fn is_fragment(self) -> bool {
        matches!(
            self,
            LineTokenKind::TextLiteralStart
                | LineTokenKind::TextLiteralContent
                | LineTokenKind::TextLiteralEnd
                | LineTokenKind::QuotedIdentifierStart
                | LineTokenKind::QuotedIdentifierContent
                | LineTokenKind::QuotedIdentifierEnd
                | LineTokenKind::MultilineCommentStart
                | LineTokenKind::MultilineCommentContent
                | LineTokenKind::MultilineCommentEnd
        )
    }

    /// Projects a single-line, non-fragment, non-comment kind onto the
    /// [`TokenKind`] it becomes in a snapshot. Returns `None` for fragment
    /// kinds and for `LineComment`/`MultilineComment`, which the stitcher
    /// handles explicitly rather than through this projection — spelled out
    /// as an exhaustive match rather than an unsafe cast, per design note.
    pub const fn to_token_kind(self) -> Option<TokenKind> {
        Some(match self {
            LineTokenKind::Identifier => TokenKind::Identifier,
            LineTokenKind::NumericLiteral => TokenKind::NumericLiteral,
            LineTokenKind::HexLiteral => TokenKind::HexLiteral,
            LineTokenKind::KeywordAnd => TokenKind::KeywordAnd,
            LineTokenKind::KeywordAs => TokenKind::KeywordAs,
            LineTokenKind::KeywordEach => TokenKind::KeywordEach,
            LineTokenKind::KeywordElse => TokenKind::KeywordElse,
            LineTokenKind::KeywordError => TokenKind::KeywordError,
            LineTokenKind::KeywordFalse => TokenKind::KeywordFalse,
            LineTokenKind::KeywordIf => TokenKind::KeywordIf,
            LineTokenKind::KeywordIn => TokenKind::KeywordIn,
            LineTokenKind::KeywordIs => TokenKind::KeywordIs,
            LineTokenKind::KeywordLet => TokenKind::KeywordLet,
            LineTokenKind::KeywordMeta => TokenKind::KeywordMeta,
            LineTokenKind::KeywordNot => TokenKind::KeywordNot,
            LineTokenKind::KeywordNull => TokenKind::KeywordNull,
            LineTokenKind::KeywordOr => TokenKind::KeywordOr,
            LineTokenKind::KeywordOtherwise => TokenKind::KeywordOtherwise,
            LineTokenKind::KeywordSection => TokenKind::KeywordSection,
            LineTokenKind::KeywordShared => TokenKind::KeywordShared,
            LineTokenKind::KeywordThen => TokenKind::KeywordThen,
            LineTokenKind::KeywordTrue => TokenKind::KeywordTrue,
            LineTokenKind::KeywordTry => TokenKind::KeywordTry,
            LineTokenKind::KeywordType => TokenKind::KeywordType,
            LineTokenKind::KeywordHashBinary => TokenKind::KeywordHashBinary,
            LineTokenKind::KeywordHashDate => TokenKind::KeywordHashDate,
            LineTokenKind::KeywordHashDateTime => TokenKind::KeywordHashDateTime,
            LineTokenKind::KeywordHashDateTimeZone => TokenKind::KeywordHashDateTimeZone,
            LineTokenKind::KeywordHashDuration => TokenKind::KeywordHashDuration,
            LineTokenKind::KeywordHashInfinity => TokenKind::KeywordHashInfinity,
            LineTokenKind::KeywordHashNan => TokenKind::KeywordHashNan,
            LineTokenKind::KeywordHashSections => TokenKind::KeywordHashSections,
            LineTokenKind::KeywordHashShared => TokenKind::KeywordHashShared,
            LineTokenKind::KeywordHashTable => TokenKind::KeywordHashTable,
            LineTokenKind::KeywordHashTime => TokenKind::KeywordHashTime,
            LineTokenKind::TextLiteral => TokenKind::TextLiteral,
            LineTokenKind::LeftParenthesis => TokenKind::LeftParenthesis,
            LineTokenKind::RightParenthesis => TokenKind::RightParenthesis,
            LineTokenKind::LeftBracket => TokenKind::LeftBracket,
            LineTokenKind::RightBracket => TokenKind::RightBracket,
            LineTokenKind::LeftBrace => TokenKind::LeftBrace,
            LineTokenKind::RightBrace => TokenKind::RightBrace,
            LineTokenKind::Semicolon => TokenKind::Semicolon,
            LineTokenKind::Comma => TokenKind::Comma,
            LineTokenKind::AtSign => TokenKind::AtSign,
            LineTokenKind::QuestionMark => TokenKind::QuestionMark,
            LineTokenKind::FatArrow => TokenKind::FatArrow,
            LineTokenKind::Equal => TokenKind::Equal,
            LineTokenKind::LessThan => TokenKind::LessThan,
            LineTokenKind::LessThanEqualTo => TokenKind::LessThanEqualTo,
            LineTokenKind::NotEqual => TokenKind::NotEqual,
            LineTokenKind::GreaterThan => TokenKind::GreaterThan,
            LineTokenKind::GreaterThanEqualTo => TokenKind::GreaterThanEqualTo,
            LineTokenKind::Plus => TokenKind::Plus,
            LineTokenKind::Minus => TokenKind::Minus,
            LineTokenKind::Asterisk => TokenKind::Asterisk,
            LineTokenKind::Division => TokenKind::Division,
            LineTokenKind::Ampersand => TokenKind::Ampersand,
            LineTokenKind::DotDot => TokenKind::DotDot,
            LineTokenKind::Ellipsis => TokenKind::Ellipsis,

            // Handled explicitly by the stitcher, never through this table.
            LineTokenKind::LineComment
            | LineTokenKind::MultilineComment
            | LineTokenKind::TextLiteralStart
            | LineTokenKind::TextLiteralContent
            | LineTokenKind::TextLiteralEnd
            | LineTokenKind::QuotedIdentifierStart
            | LineTokenKind::QuotedIdentifierContent
            | LineTokenKind::QuotedIdentifierEnd
            | LineTokenKind::MultilineCommentStart
            | LineTokenKind::MultilineCommentContent
            | LineTokenKind::MultilineCommentEnd => return None,
        })
    }
}

/// A token confined to one physical line: either a complete token or an
/// unterminated fragment of one that continues onto the next line.
/// Positions are relative to the start of the line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineToken {
    pub kind: LineTokenKind,
    pub data: String,
    pub position_start: u32,
    pub position_end: u32,
}

/// The whole-token kinds a [`crate::snapshot::LexerSnapshot`] exposes to a
/// downstream parser. Fragment kinds and the two comment kinds from
/// [`LineTokenKind`] do not appear here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    NumericLiteral,
    HexLiteral,

    KeywordAnd,
    KeywordAs,
    KeywordEach,
    KeywordElse,
    KeywordError,
    KeywordFalse,
    KeywordIf,
    KeywordIn,
    KeywordIs,
    KeywordLet,
    KeywordMeta,
    KeywordNot,
    KeywordNull,
    KeywordOr,
    KeywordOtherwise,
    KeywordSection,
    KeywordShared,
    KeywordThen,
    KeywordTrue,
    KeywordTry,
    KeywordType,
    KeywordHashBinary,
    KeywordHashDate,
    KeywordHashDateTime,
    KeywordHashDateTimeZone,
    KeywordHashDuration,
    KeywordHashInfinity,
    KeywordHashNan,
    KeywordHashSections,
    KeywordHashShared,
    KeywordHashTable,
    KeywordHashTime,

    TextLiteral,

    LeftParenthesis,
    RightParenthesis,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Semicolon,
    Comma,
    AtSign,
    QuestionMark,
    FatArrow,
    Equal,
    LessThan,
    LessThanEqualTo,
    NotEqual,
    GreaterThan,
    GreaterThanEqualTo,
    Plus,
    Minus,
    Asterisk,
    Division,
    Ampersand,
    DotDot,
    Ellipsis,
}

/// A whole token, possibly stitched together from fragments spanning
/// several lines. `data` is the full raw text of the token, including any
/// delimiters (`"..."`, `#"..."`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub data: String,
    pub position_start: Position,
    pub position_end: Position,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommentKind {
    Line,
    Multiline,
}

/// A comment, reported out-of-band from the token stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    pub kind: CommentKind,
    pub data: String,
    pub contains_newline: bool,
    pub position_start: Position,
    pub position_end: Position,
}

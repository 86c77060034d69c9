//! The keyword table: identifier-shaped lexemes that classify as one of the
//! 32 reserved words instead of [`LineTokenKind::Identifier`].
//!
//! `#sections` and `#shared` are kept as their own keyword variants rather
//! than folded into a generic "hash keyword" bucket — see the Open Question
//! resolution in `DESIGN.md`.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::token::LineTokenKind;

fn table() -> &'static FxHashMap<&'static str, LineTokenKind> {
    static TABLE: OnceLock<FxHashMap<&'static str, LineTokenKind>> = OnceLock::new();
    TABLE.get_or_init(|| {
        use LineTokenKind::*;
        FxHashMap::from_iter([
            ("and", KeywordAnd),
            ("as", KeywordAs),
            ("each", KeywordEach),
            ("else", KeywordElse),
            ("error", KeywordError),
            ("false", KeywordFalse),
            ("if", KeywordIf),
            ("in", KeywordIn),
            ("is", KeywordIs),
            ("let", KeywordLet),
            ("meta", KeywordMeta),
            ("not", KeywordNot),
            ("null", KeywordNull),
            ("or", KeywordOr),
            ("otherwise", KeywordOtherwise),
            ("section", KeywordSection),
            ("shared", KeywordShared),
            ("then", KeywordThen),
            ("true", KeywordTrue),
            ("try", KeywordTry),
            ("type", KeywordType),
            ("#binary", KeywordHashBinary),
            ("#date", KeywordHashDate),
            ("#datetime", KeywordHashDateTime),
            ("#datetimezone", KeywordHashDateTimeZone),
            ("#duration", KeywordHashDuration),
            ("#infinity", KeywordHashInfinity),
            ("#nan", KeywordHashNan),
            ("#sections", KeywordHashSections),
            ("#shared", KeywordHashShared),
            ("#table", KeywordHashTable),
            ("#time", KeywordHashTime),
        ])
    })
}

/// Classifies `text` as a keyword, if it is one. Lookup is case-sensitive —
/// M keywords are lowercase by grammar, and a quoted identifier spelled the
/// same as a keyword (`#"and"`) never reaches this function since it is
/// lexed on the `QuotedIdentifier` path instead.
pub fn lookup(text: &str) -> Option<LineTokenKind> {
    table().get(text).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_plain_keywords() {
        assert_eq!(lookup("let"), Some(LineTokenKind::KeywordLet));
        assert_eq!(lookup("otherwise"), Some(LineTokenKind::KeywordOtherwise));
    }

    #[test]
    fn recognizes_hash_keywords() {
        assert_eq!(lookup("#table"), Some(LineTokenKind::KeywordHashTable));
        assert_eq!(lookup("#sections"), Some(LineTokenKind::KeywordHashSections));
        assert_eq!(lookup("#shared"), Some(LineTokenKind::KeywordHashShared));
    }

    #[test]
    fn non_keyword_is_none() {
        assert_eq!(lookup("Table"), None);
        assert_eq!(lookup("lets"), None);
        assert_eq!(lookup("#unknown"), None);
    }

    #[test]
    fn case_sensitive() {
        assert_eq!(lookup("Let"), None);
        assert_eq!(lookup("AND"), None);
    }
}

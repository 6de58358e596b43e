//! Kana script detection and katakana folding
//!
//! Katakana and hiragana encode the same syllables, so comparison happens on
//! hiragana only. Folding is a fixed code point shift.

/// Distance between a katakana code point and its hiragana counterpart
const KATAKANA_OFFSET: u32 = 0x60;

/// First hiragana code point (ぁ)
const HIRAGANA_FIRST: char = '\u{3041}';
/// Last hiragana code point (ゖ)
const HIRAGANA_LAST: char = '\u{3096}';
/// First katakana code point with a hiragana counterpart (ァ)
const KATAKANA_FIRST: char = '\u{30A1}';
/// Last katakana code point with a hiragana counterpart (ヶ)
const KATAKANA_LAST: char = '\u{30F6}';

/// Prolonged sound mark used by both syllabaries
pub const LONG_VOWEL_MARK: char = 'ー';

/// Full-width ASCII block (！ through ～)
const FULLWIDTH_FIRST: char = '\u{FF01}';
const FULLWIDTH_LAST: char = '\u{FF5E}';
/// Distance between a full-width form and its ASCII counterpart
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Script of a single character, as far as collation cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    /// ぁ through ゖ
    Hiragana,
    /// ァ through ヶ
    Katakana,
    /// ASCII letters, including their full-width forms (`Ａ`, `ｓ`)
    Latin,
    /// Kanji, digits, punctuation and everything else
    Other,
}

/// Classify a character
#[inline]
pub fn script_of(ch: char) -> Script {
    if is_hiragana(ch) {
        Script::Hiragana
    } else if is_katakana(ch) {
        Script::Katakana
    } else if to_ascii_width(ch).is_ascii_alphabetic() {
        Script::Latin
    } else {
        Script::Other
    }
}

#[inline]
pub fn is_hiragana(ch: char) -> bool {
    (HIRAGANA_FIRST..=HIRAGANA_LAST).contains(&ch)
}

#[inline]
pub fn is_katakana(ch: char) -> bool {
    (KATAKANA_FIRST..=KATAKANA_LAST).contains(&ch)
}

/// Fold one katakana character to hiragana; other characters pass through
#[inline]
pub fn to_hiragana(ch: char) -> char {
    if is_katakana(ch) {
        char::from_u32(ch as u32 - KATAKANA_OFFSET).unwrap_or(ch)
    } else {
        ch
    }
}

/// Fold a full-width ASCII form to plain ASCII; other characters pass through
#[inline]
pub fn to_ascii_width(ch: char) -> char {
    if (FULLWIDTH_FIRST..=FULLWIDTH_LAST).contains(&ch) {
        char::from_u32(ch as u32 - FULLWIDTH_OFFSET).unwrap_or(ch)
    } else {
        ch
    }
}

/// Fold every katakana character in `text` to hiragana
///
/// Total and idempotent: the output never contains foldable katakana.
pub fn normalize(text: &str) -> String {
    text.chars().map(to_hiragana).collect()
}

/// True when `text` is non-empty and made only of hiragana, katakana and `ー`
///
/// Any kanji, Latin letter, digit or whitespace makes the whole string
/// non-kana.
pub fn is_kana(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|ch| is_hiragana(ch) || is_katakana(ch) || ch == LONG_VOWEL_MARK)
}

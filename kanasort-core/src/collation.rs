//! Gojūon weights and key comparison
//!
//! Keys are compared character by character on their syllable weight. A
//! position past the end of a key sorts before any character, so a prefix
//! always precedes its extensions.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::kana::{to_hiragana, Script};

/// Hiragana in dictionary order; the index is the weight
///
/// Voiced rows follow their unvoiced row (か行 then が行).
pub const SYLLABLE_ORDER: [char; 73] = [
    'あ', 'い', 'う', 'え', 'お',
    'か', 'き', 'く', 'け', 'こ', 'が', 'ぎ', 'ぐ', 'げ', 'ご',
    'さ', 'し', 'す', 'せ', 'そ', 'ざ', 'じ', 'ず', 'ぜ', 'ぞ',
    'た', 'ち', 'つ', 'て', 'と', 'だ', 'ぢ', 'づ', 'で', 'ど',
    'な', 'に', 'ぬ', 'ね', 'の',
    'は', 'ひ', 'ふ', 'へ', 'ほ', 'ば', 'び', 'ぶ', 'べ', 'ぼ', 'ぱ', 'ぴ', 'ぷ', 'ぺ', 'ぽ',
    'ま', 'み', 'む', 'め', 'も',
    'や', 'ゆ', 'よ',
    'ら', 'り', 'る', 'れ', 'ろ',
    'わ', 'ゐ', 'ゑ', 'を', 'ん',
];

/// Weight of every character outside [`SYLLABLE_ORDER`]
pub const UNKNOWN_WEIGHT: u32 = 9999;

static WEIGHTS: OnceLock<HashMap<char, u32>> = OnceLock::new();

fn weight_table() -> &'static HashMap<char, u32> {
    WEIGHTS.get_or_init(|| {
        SYLLABLE_ORDER
            .iter()
            .enumerate()
            .map(|(i, &ch)| (ch, i as u32))
            .collect()
    })
}

/// Syllable weight of `ch`; katakana weighs the same as its hiragana
#[inline]
pub fn weight(ch: char) -> u32 {
    weight_table()
        .get(&to_hiragana(ch))
        .copied()
        .unwrap_or(UNKNOWN_WEIGHT)
}

/// Order between two characters that have no syllable weight
///
/// Latin letters go after every other unweighted character, so romaji keys
/// land at the very end. Within a tier, code points decide after full-width
/// forms are folded to ASCII.
#[inline]
fn unweighted_rank(ch: char) -> (u8, char) {
    let tier = match crate::kana::script_of(ch) {
        Script::Latin => 1,
        _ => 0,
    };
    (tier, crate::kana::to_ascii_width(ch))
}

/// Three-way comparison of two canonical keys
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    let mut left = a.chars();
    let mut right = b.chars();

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let (x, y) = (to_hiragana(x), to_hiragana(y));
                if x == y {
                    continue;
                }

                let (wx, wy) = (weight(x), weight(y));
                let ordering = if wx == UNKNOWN_WEIGHT && wy == UNKNOWN_WEIGHT {
                    unweighted_rank(x).cmp(&unweighted_rank(y))
                } else {
                    wx.cmp(&wy)
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

/// A canonical key ordered by [`compare_keys`]
///
/// Used as a cached sort key so each record is resolved once per sort.
#[derive(Debug, Clone)]
pub struct CollationKey(String);

impl CollationKey {
    pub fn new(key: String) -> Self {
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl PartialEq for CollationKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CollationKey {}

impl PartialOrd for CollationKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CollationKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_keys(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights() {
        assert_eq!(weight('あ'), 0);
        assert_eq!(weight('か'), 5);
        assert_eq!(weight('が'), 10);
        assert_eq!(weight('ん'), 72);
        assert_eq!(weight('カ'), 5);
        assert_eq!(weight('a'), UNKNOWN_WEIGHT);
        assert_eq!(weight('田'), UNKNOWN_WEIGHT);
        assert_eq!(weight('っ'), UNKNOWN_WEIGHT);
        assert_eq!(weight('ー'), UNKNOWN_WEIGHT);
    }

    #[test]
    fn test_table_has_unique_entries() {
        assert_eq!(weight_table().len(), SYLLABLE_ORDER.len());
    }

    #[test]
    fn test_gojuon_order() {
        assert_eq!(compare_keys("あ", "い"), Ordering::Less);
        assert_eq!(compare_keys("さとう", "すずき"), Ordering::Less);
        assert_eq!(compare_keys("わたなべ", "やまだ"), Ordering::Greater);
        // Voiced rows come after the whole unvoiced row
        assert_eq!(compare_keys("こ", "が"), Ordering::Less);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare_keys("たなか", "たなかや"), Ordering::Less);
        assert_eq!(compare_keys("たなかや", "たなか"), Ordering::Greater);
        assert_eq!(compare_keys("", "あ"), Ordering::Less);
        assert_eq!(compare_keys("", ""), Ordering::Equal);
    }

    #[test]
    fn test_katakana_equals_hiragana() {
        assert_eq!(compare_keys("タナカ", "たなか"), Ordering::Equal);
        assert_eq!(
            CollationKey::new("タナカ".into()),
            CollationKey::new("たなか".into())
        );
    }

    #[test]
    fn test_kana_before_unweighted() {
        assert_eq!(compare_keys("ん", "王"), Ordering::Less);
        assert_eq!(compare_keys("わ", "smith"), Ordering::Less);
    }

    #[test]
    fn test_latin_after_other_unweighted() {
        assert_eq!(compare_keys("王", "smith"), Ordering::Less);
        assert_eq!(compare_keys("3m", "abc"), Ordering::Less);
    }

    #[test]
    fn test_latin_by_code_point() {
        assert_eq!(compare_keys("jones", "smith"), Ordering::Less);
        assert_eq!(compare_keys("smith", "smyth"), Ordering::Less);
    }

    #[test]
    fn test_fullwidth_latin_sorts_with_ascii() {
        assert_eq!(compare_keys("王", "Ａcme"), Ordering::Less);
        assert_eq!(compare_keys("123", "Ａcme"), Ordering::Less);
        assert_eq!(compare_keys("Ａcme", "Smith"), Ordering::Less);
        assert_eq!(compare_keys("Ｓmith", "Smith"), Ordering::Equal);
    }

    #[test]
    fn test_space_in_full_name() {
        // "たなか たろう" extends "たなか"
        assert_eq!(compare_keys("たなか", "たなか たろう"), Ordering::Less);
        assert_eq!(compare_keys("たなか たろう", "たなか はなこ"), Ordering::Less);
    }
}

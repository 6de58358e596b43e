//! Syllable section labels
//!
//! Every key falls into one section: the base syllable of its first
//! character (voiced and small kana fold onto it), an uppercase Latin
//! letter, or `#`.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::OnceLock;

use crate::kana::{is_katakana, to_ascii_width, to_hiragana};

/// Kana section labels in display order
pub const KANA_LABELS: [char; 48] = [
    'あ', 'い', 'う', 'え', 'お',
    'か', 'き', 'く', 'け', 'こ',
    'さ', 'し', 'す', 'せ', 'そ',
    'た', 'ち', 'つ', 'て', 'と',
    'な', 'に', 'ぬ', 'ね', 'の',
    'は', 'ひ', 'ふ', 'へ', 'ほ',
    'ま', 'み', 'む', 'め', 'も',
    'や', 'ゆ', 'よ',
    'ら', 'り', 'る', 'れ', 'ろ',
    'わ', 'ゐ', 'ゑ', 'を', 'ん',
];

/// Variant → base syllable
///
/// ゔ has no collation weight, so it sorts after ん in a flat list yet is
/// still sectioned under う.
const VARIANTS: [(char, char); 38] = [
    ('が', 'か'), ('ぎ', 'き'), ('ぐ', 'く'), ('げ', 'け'), ('ご', 'こ'),
    ('ざ', 'さ'), ('じ', 'し'), ('ず', 'す'), ('ぜ', 'せ'), ('ぞ', 'そ'),
    ('だ', 'た'), ('ぢ', 'ち'), ('づ', 'つ'), ('で', 'て'), ('ど', 'と'),
    ('ば', 'は'), ('び', 'ひ'), ('ぶ', 'ふ'), ('べ', 'へ'), ('ぼ', 'ほ'),
    ('ぱ', 'は'), ('ぴ', 'ひ'), ('ぷ', 'ふ'), ('ぺ', 'へ'), ('ぽ', 'ほ'),
    ('ゔ', 'う'),
    ('ぁ', 'あ'), ('ぃ', 'い'), ('ぅ', 'う'), ('ぇ', 'え'), ('ぉ', 'お'),
    ('っ', 'つ'), ('ゃ', 'や'), ('ゅ', 'ゆ'), ('ょ', 'よ'), ('ゎ', 'わ'),
    ('ゕ', 'か'), ('ゖ', 'け'),
];

/// Label character used for everything unclassifiable
pub const OTHER_LABEL: char = '#';

static BASE_SYLLABLES: OnceLock<HashMap<char, char>> = OnceLock::new();

fn base_table() -> &'static HashMap<char, char> {
    BASE_SYLLABLES.get_or_init(|| {
        KANA_LABELS
            .iter()
            .map(|&ch| (ch, ch))
            .chain(VARIANTS.iter().copied())
            .collect()
    })
}

/// Section a record is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupLabel {
    /// One of [`KANA_LABELS`]
    Kana(char),
    /// Uppercase ASCII letter
    Latin(char),
    /// `#`
    Other,
}

impl GroupLabel {
    /// Label of a canonical key, decided by its first character
    pub fn for_key(key: &str) -> Self {
        key.chars().next().map_or(GroupLabel::Other, Self::for_char)
    }

    /// Label of a single leading character
    pub fn for_char(ch: char) -> Self {
        if is_katakana(ch) {
            return Self::for_char(to_hiragana(ch));
        }
        if let Some(&base) = base_table().get(&ch) {
            return GroupLabel::Kana(base);
        }
        let ascii = to_ascii_width(ch);
        if ascii.is_ascii_alphabetic() {
            return GroupLabel::Latin(ascii.to_ascii_uppercase());
        }
        GroupLabel::Other
    }

    pub fn as_char(&self) -> char {
        match *self {
            GroupLabel::Kana(ch) | GroupLabel::Latin(ch) => ch,
            GroupLabel::Other => OTHER_LABEL,
        }
    }

    pub fn is_kana(&self) -> bool {
        matches!(self, GroupLabel::Kana(_))
    }

    /// Position in [`KANA_LABELS`]
    fn kana_position(&self) -> Option<usize> {
        match *self {
            GroupLabel::Kana(ch) => KANA_LABELS.iter().position(|&label| label == ch),
            _ => None,
        }
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for GroupLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Kana labels in table order, then everything else by plain string order
impl Ord for GroupLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.kana_position(), other.kana_position()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.as_char().cmp(&other.as_char()),
        }
    }
}

impl PartialOrd for GroupLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A labeled section of records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group<T> {
    pub label: GroupLabel,
    pub records: Vec<T>,
}

/// Bucket `records` by `label_of`, keeping input order inside each bucket
pub fn partition<T, I, F>(records: I, mut label_of: F) -> Vec<Group<T>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> GroupLabel,
{
    let mut buckets: BTreeMap<GroupLabel, Vec<T>> = BTreeMap::new();
    for record in records {
        buckets.entry(label_of(&record)).or_default().push(record);
    }

    buckets
        .into_iter()
        .map(|(label, records)| Group { label, records })
        .collect()
}

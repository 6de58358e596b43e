//! Record-level sorting and grouping
//!
//! The [`Collator`] resolves each record's canonical key once per call and
//! never keeps it afterwards.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::collation::{compare_keys, CollationKey};
use crate::dictionary::ReadingDictionary;
use crate::grouping::{partition, Group, GroupLabel};
use crate::record::{Field, SortText, SortableRecord};
use crate::resolver::{non_blank, MatchStrategy, ReadingResolver};

/// Sorts and groups records in gojūon order
#[derive(Debug, Clone, Default)]
pub struct Collator {
    resolver: ReadingResolver,
}

impl Collator {
    pub fn new(resolver: ReadingResolver) -> Self {
        Self { resolver }
    }

    /// Collator over `dictionary` with the given substring strategy
    pub fn with_dictionary(dictionary: Arc<ReadingDictionary>, strategy: MatchStrategy) -> Self {
        Self::new(ReadingResolver::new(dictionary).with_strategy(strategy))
    }

    pub fn resolver(&self) -> &ReadingResolver {
        &self.resolver
    }

    /// Canonical sort key of `text`
    pub fn canonical_key(&self, text: SortText<'_>) -> String {
        self.resolver.resolve(text.display, text.reading)
    }

    /// Three-way comparison, usable directly as a sort comparator
    pub fn compare(&self, a: SortText<'_>, b: SortText<'_>) -> Ordering {
        compare_keys(&self.canonical_key(a), &self.canonical_key(b))
    }

    /// Section label of `text`
    ///
    /// People are grouped by family name: without an explicit reading, a
    /// "surname given-name" pair with a known surname is labeled by the
    /// surname reading alone.
    pub fn group_label(&self, text: SortText<'_>) -> GroupLabel {
        if non_blank(text.reading).is_none() {
            if let Some(surname) = self.resolver.surname_reading(text.display) {
                return GroupLabel::for_key(surname);
            }
        }
        GroupLabel::for_key(&self.canonical_key(text))
    }

    /// Stable in-place sort on `field`
    pub fn sort<T: SortableRecord>(&self, records: &mut [T], field: Field) {
        records.sort_by_cached_key(|record| {
            CollationKey::new(self.canonical_key(record.sort_text(field)))
        });
    }

    /// Sorted copy of `records`
    pub fn sorted<T: SortableRecord + Clone>(&self, records: &[T], field: Field) -> Vec<T> {
        let mut sorted = records.to_vec();
        self.sort(&mut sorted, field);
        sorted
    }

    /// Partition into labeled sections without reordering inside a section
    ///
    /// Sections come out in label order; callers wanting sorted sections
    /// sort first or use [`Collator::sort_and_group`].
    pub fn group<T: SortableRecord>(&self, records: Vec<T>, field: Field) -> Vec<Group<T>> {
        partition(records, |record| self.group_label(record.sort_text(field)))
    }

    /// Sort on `field`, then group
    pub fn sort_and_group<T: SortableRecord>(
        &self,
        mut records: Vec<T>,
        field: Field,
    ) -> Vec<Group<T>> {
        self.sort(&mut records, field);
        self.group(records, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_explicit_reading() {
        let collator = Collator::default();
        let ordering = collator.compare(
            SortText::with_reading("王", Some("あおき")),
            SortText::new("田中"),
        );
        assert_eq!(ordering, Ordering::Less);
    }

    #[test]
    fn test_group_label_uses_surname() {
        let collator = Collator::default();
        // Full key would be "たなか たろう"; surname decides
        assert_eq!(
            collator.group_label(SortText::new("田中 太郎")),
            GroupLabel::Kana('た')
        );
        // Unknown surname falls back to the full key, here the given name
        assert_eq!(
            collator.group_label(SortText::new("王 太郎")),
            GroupLabel::Kana('た')
        );
        assert_eq!(
            collator.group_label(SortText::new("王 健")),
            GroupLabel::Other
        );
    }

    #[test]
    fn test_group_label_prefers_explicit_reading() {
        let collator = Collator::default();
        assert_eq!(
            collator.group_label(SortText::with_reading("田中 太郎", Some("でんなか たろう"))),
            GroupLabel::Kana('て')
        );
        assert_eq!(
            collator.group_label(SortText::with_reading("王 太郎", Some("おう たろう"))),
            GroupLabel::Kana('お')
        );
    }

    #[test]
    fn test_sort_is_stable() {
        let collator = Collator::default();
        let mut names = vec!["Smith", "タナカ", "たなか", "Smith"];
        collator.sort(&mut names, Field::Name);
        assert_eq!(names, vec!["タナカ", "たなか", "Smith", "Smith"]);
    }

    #[test]
    fn test_sort_and_group() {
        let collator = Collator::default();
        let groups = collator.sort_and_group(
            vec!["後藤", "Apple", "加藤", "王", "あい"],
            Field::Company,
        );

        let labels: Vec<String> = groups.iter().map(|g| g.label.to_string()).collect();
        assert_eq!(labels, vec!["あ", "か", "こ", "#", "A"]);
        assert_eq!(groups[1].records, vec!["加藤"]);
        assert_eq!(groups[2].records, vec!["後藤"]);
    }

    #[test]
    fn test_custom_dictionary() {
        let dictionary =
            ReadingDictionary::from_entries("custom", [("王", "おう")]).unwrap();
        let collator = Collator::with_dictionary(Arc::new(dictionary), MatchStrategy::Longest);

        assert_eq!(collator.canonical_key(SortText::new("王")), "おう");
        assert_eq!(collator.resolver().strategy(), MatchStrategy::Longest);
        assert_eq!(
            collator.group_label(SortText::new("王 太郎")),
            GroupLabel::Kana('お')
        );
    }
}

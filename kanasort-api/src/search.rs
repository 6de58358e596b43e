//! Free-text card search

use crate::dto::BusinessCard;

/// Cards whose name, company, department, position or email contains
/// `query`, ignoring case
///
/// Surrounding whitespace in `query` is ignored, and a blank query matches
/// every card. Input order is kept.
pub fn search<'a>(cards: &'a [BusinessCard], query: &str) -> Vec<&'a BusinessCard> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return cards.iter().collect();
    }

    cards
        .iter()
        .filter(|card| {
            searchable_fields(card).any(|value| value.to_lowercase().contains(&needle))
        })
        .collect()
}

fn searchable_fields(card: &BusinessCard) -> impl Iterator<Item = &str> {
    [
        Some(card.name.as_str()),
        Some(card.company.as_str()),
        card.department.as_deref(),
        card.position.as_deref(),
        card.email.as_deref(),
    ]
    .into_iter()
    .flatten()
}

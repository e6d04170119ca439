//! Cursor movement over the deck, optionally confined to a set of subjects.
//!
//! With a filter active, positions are computed inside the visible
//! subsequence and mapped back to deck indices through question text, so no
//! filtered copy of the deck is ever stored.

use std::collections::BTreeSet;

use crate::model::Card;

/// Index of the card after `current`, wrapping to the start.
///
/// Returns `None` only when there is nothing to land on.
#[must_use]
pub fn next_index(cards: &[Card], current: Option<usize>, show: &BTreeSet<String>) -> Option<usize> {
    step(cards, current, show, forward)
}

/// Index of the card before `current`, clamped at the start.
///
/// Returns `None` only when there is nothing to land on.
#[must_use]
pub fn previous_index(
    cards: &[Card],
    current: Option<usize>,
    show: &BTreeSet<String>,
) -> Option<usize> {
    step(cards, current, show, backward)
}

/// Whether the back button has nowhere to go.
///
/// Unfiltered, that is the first deck index. Filtered, it is the first visible
/// card of the current card's subject.
#[must_use]
pub fn is_back_disabled(cards: &[Card], current: Option<usize>, show: &BTreeSet<String>) -> bool {
    if show.is_empty() {
        return current == Some(0);
    }

    let Some(card) = current.and_then(|index| cards.get(index)) else {
        return false;
    };

    visible(cards, show)
        .find(|candidate| candidate.subject() == card.subject())
        .is_some_and(|first| first.question() == card.question())
}

fn visible<'a>(cards: &'a [Card], show: &'a BTreeSet<String>) -> impl Iterator<Item = &'a Card> {
    cards.iter().filter(move |card| show.contains(card.subject()))
}

fn step(
    cards: &[Card],
    current: Option<usize>,
    show: &BTreeSet<String>,
    rule: fn(Option<usize>, usize) -> Option<usize>,
) -> Option<usize> {
    if show.is_empty() {
        return rule(current, cards.len());
    }

    let shown: Vec<&Card> = visible(cards, show).collect();
    // Not-visible cursor maps to no position; the rules then land on the first visible card.
    let position = current
        .and_then(|index| cards.get(index))
        .and_then(|card| shown.iter().position(|c| c.question() == card.question()));

    let target = shown.get(rule(position, shown.len())?)?;
    cards
        .iter()
        .position(|card| card.question() == target.question())
}

fn forward(position: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let next = position.map_or(0, |p| p + 1);
    Some(if next < len { next } else { 0 })
}

fn backward(position: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let previous = position.and_then(|p| p.checked_sub(1)).unwrap_or(0);
    Some(previous.min(len - 1))
}

use std::collections::BTreeSet;

use crate::model::card::{Card, seed_cards};
use crate::navigation;

/// Snapshot of the deck, the cursor, and the subject filter.
///
/// Values are never edited in place; the card reducer builds a fresh store for
/// every action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardStore {
    cards: Vec<Card>,
    current: Option<usize>,
    show: BTreeSet<String>,
}

impl CardStore {
    /// A store positioned on the first card with no subject filter.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            current: Some(0),
            show: BTreeSet::new(),
        }
    }

    /// The store used when nothing was persisted.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_cards())
    }

    #[must_use]
    pub fn from_parts(cards: Vec<Card>, current: Option<usize>, show: BTreeSet<String>) -> Self {
        Self {
            cards,
            current,
            show,
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// `None` means a new blank card is being written.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Subjects allowed by the filter; empty means every subject.
    #[must_use]
    pub fn show(&self) -> &BTreeSet<String> {
        &self.show
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.current.and_then(|index| self.cards.get(index))
    }

    /// Index of the first card carrying `question`.
    #[must_use]
    pub fn position_of(&self, question: &str) -> Option<usize> {
        self.cards.iter().position(|card| card.question() == question)
    }

    /// Index of the first card filed under `subject`.
    #[must_use]
    pub fn first_of_subject(&self, subject: &str) -> Option<usize> {
        self.cards.iter().position(|card| card.subject() == subject)
    }

    /// Distinct subjects in the order they first appear in the deck.
    #[must_use]
    pub fn subjects(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.cards
            .iter()
            .map(Card::subject)
            .filter(|subject| seen.insert(*subject))
            .collect()
    }

    /// Questions of one subject, sorted case-insensitively.
    #[must_use]
    pub fn subject_questions(&self, subject: &str) -> Vec<&str> {
        let mut questions: Vec<&str> = self
            .cards
            .iter()
            .filter(|card| card.subject() == subject)
            .map(Card::question)
            .collect();
        questions.sort_by_key(|question| question.to_lowercase());
        questions
    }

    #[must_use]
    pub fn is_shown(&self, subject: &str) -> bool {
        self.show.contains(subject)
    }

    #[must_use]
    pub fn is_back_disabled(&self) -> bool {
        navigation::is_back_disabled(&self.cards, self.current, &self.show)
    }

    #[must_use]
    pub(crate) fn with_current(&self, current: Option<usize>) -> Self {
        Self {
            cards: self.cards.clone(),
            current,
            show: self.show.clone(),
        }
    }

    #[must_use]
    pub(crate) fn with_cards(&self, cards: Vec<Card>, current: Option<usize>) -> Self {
        Self {
            cards,
            current,
            show: self.show.clone(),
        }
    }

    #[must_use]
    pub(crate) fn with_show(&self, show: BTreeSet<String>) -> Self {
        Self {
            cards: self.cards.clone(),
            current: self.current,
            show,
        }
    }
}

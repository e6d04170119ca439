use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("question cannot be empty")]
    EmptyQuestion,

    #[error("answer cannot be empty")]
    EmptyAnswer,

    #[error("subject cannot be empty")]
    EmptySubject,
}

//
// ─── CARD ──────────────────────────────────────────────────────────────────────
//

/// A question/answer pair filed under a subject.
///
/// The question text doubles as the card's identity inside a deck.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    question: String,
    answer: String,
    subject: String,
}

impl Card {
    /// Builds a card without validation.
    ///
    /// Loaded decks may contain blank cards; use `CardDraft::validate` for user input.
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            subject: subject.into(),
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// A card without a question cannot be addressed and is dropped on save.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.question.is_empty()
    }

    /// Answer text split into display lines.
    pub fn answer_lines(&self) -> impl Iterator<Item = &str> {
        self.answer.split('\n')
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated card fields as typed into the writing form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDraft {
    pub question: String,
    pub answer: String,
    pub subject: String,
}

impl CardDraft {
    #[must_use]
    pub fn from_card(card: &Card) -> Self {
        Self {
            question: card.question.clone(),
            answer: card.answer.clone(),
            subject: card.subject.clone(),
        }
    }

    /// Checks that every field carries text.
    ///
    /// # Errors
    ///
    /// Returns the first blank field as a `CardError`.
    pub fn validate(self) -> Result<Card, CardError> {
        if self.question.trim().is_empty() {
            return Err(CardError::EmptyQuestion);
        }
        if self.answer.trim().is_empty() {
            return Err(CardError::EmptyAnswer);
        }
        if self.subject.trim().is_empty() {
            return Err(CardError::EmptySubject);
        }
        Ok(Card::new(self.question, self.answer, self.subject.trim()))
    }
}

//
// ─── SEED DECK ─────────────────────────────────────────────────────────────────
//

/// The deck used when nothing has been stored yet.
#[must_use]
pub fn seed_cards() -> Vec<Card> {
    vec![
        Card::new(
            "What is a linked list?",
            "A linked list is a sequential list of nodes.\n\
             The nodes hold data.\n\
             The nodes hold pointers that point to other nodes containing data.",
            "Linked List",
        ),
        Card::new(
            "What is a stack?",
            "A stack is a one ended linear data structure.\n\
             The stack models real world situations by having two primary operations: push and pop.\n\
             Push adds an element to the stack.\n\
             Pop pulls the top element off the stack.",
            "Stack",
        ),
    ]
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

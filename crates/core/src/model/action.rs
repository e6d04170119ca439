use serde::{Deserialize, Serialize};

use crate::model::card::Card;
use crate::model::stats::StatsKind;

//
// ─── CARD ACTIONS ──────────────────────────────────────────────────────────────
//

/// Everything the UI may ask the card reducer to do.
///
/// Tagged by `type` on the wire; unknown tags decode as `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CardAction {
    Next,
    Back,
    /// Jump to a question, or to the first card of a subject when no question is given.
    Select {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        question: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subject: Option<String>,
    },
    Save {
        question: String,
        answer: String,
        subject: String,
    },
    Delete {
        question: String,
    },
    New,
    ShowAdd {
        subject: String,
    },
    ShowRemove {
        subject: String,
    },
    ShowAll,
    #[serde(other)]
    Unknown,
}

impl CardAction {
    #[must_use]
    pub fn select_question(question: impl Into<String>) -> Self {
        Self::Select {
            question: Some(question.into()),
            subject: None,
        }
    }

    #[must_use]
    pub fn select_subject(subject: impl Into<String>) -> Self {
        Self::Select {
            question: None,
            subject: Some(subject.into()),
        }
    }

    #[must_use]
    pub fn save(card: Card) -> Self {
        Self::Save {
            question: card.question().to_owned(),
            answer: card.answer().to_owned(),
            subject: card.subject().to_owned(),
        }
    }

    #[must_use]
    pub fn delete(question: impl Into<String>) -> Self {
        Self::Delete {
            question: question.into(),
        }
    }

    #[must_use]
    pub fn show_add(subject: impl Into<String>) -> Self {
        Self::ShowAdd {
            subject: subject.into(),
        }
    }

    #[must_use]
    pub fn show_remove(subject: impl Into<String>) -> Self {
        Self::ShowRemove {
            subject: subject.into(),
        }
    }

    /// Short name used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Back => "back",
            Self::Select { .. } => "select",
            Self::Save { .. } => "save",
            Self::Delete { .. } => "delete",
            Self::New => "new",
            Self::ShowAdd { .. } => "showAdd",
            Self::ShowRemove { .. } => "showRemove",
            Self::ShowAll => "showAll",
            Self::Unknown => "unknown",
        }
    }
}

//
// ─── STATS ACTIONS ─────────────────────────────────────────────────────────────
//

/// Counter increments for a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StatsAction {
    Right { question: String },
    Wrong { question: String },
    Skip { question: String },
    #[serde(other)]
    Unknown,
}

impl StatsAction {
    #[must_use]
    pub fn new(kind: StatsKind, question: impl Into<String>) -> Self {
        let question = question.into();
        match kind {
            StatsKind::Right => Self::Right { question },
            StatsKind::Wrong => Self::Wrong { question },
            StatsKind::Skip => Self::Skip { question },
        }
    }

    /// The counter and question this action targets, if it is recognized.
    #[must_use]
    pub fn target(&self) -> Option<(StatsKind, &str)> {
        match self {
            Self::Right { question } => Some((StatsKind::Right, question.as_str())),
            Self::Wrong { question } => Some((StatsKind::Wrong, question.as_str())),
            Self::Skip { question } => Some((StatsKind::Skip, question.as_str())),
            Self::Unknown => None,
        }
    }
}

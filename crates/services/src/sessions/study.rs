use std::sync::Arc;

use flash_core::model::{CardAction, CardStore, StatsAction, StatsKind, StatsStore};
use tokio::sync::Mutex;

use crate::error::SessionError;

use super::{CardSession, StatsSession};

/// Result of answering or skipping the current card.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOutcome {
    question: String,
    kind: StatsKind,
    cards: CardStore,
    stats: StatsStore,
}

impl AnswerOutcome {
    /// The question that was graded.
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn kind(&self) -> StatsKind {
        self.kind
    }

    /// Card store after advancing to the next card.
    #[must_use]
    pub fn cards(&self) -> &CardStore {
        &self.cards
    }

    #[must_use]
    pub fn stats(&self) -> &StatsStore {
        &self.stats
    }
}

/// Drives the answering flow: grade the current card, record it, move on.
///
/// Clones share one turn lock, so a submit or skip runs from snapshot to
/// `Next` before the next one reads the current card.
#[derive(Clone)]
pub struct StudyService {
    cards: Arc<CardSession>,
    stats: Arc<StatsSession>,
    turn: Arc<Mutex<()>>,
}

impl StudyService {
    #[must_use]
    pub fn new(cards: Arc<CardSession>, stats: Arc<StatsSession>) -> Self {
        Self {
            cards,
            stats,
            turn: Arc::new(Mutex::new(())),
        }
    }

    /// Grade `input` against the current card's answer and advance.
    ///
    /// Returns `Ok(None)` when no card is selected.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if either store could not be persisted. The
    /// cursor still advances when only the stats write failed.
    pub async fn submit(&self, input: &str) -> Result<Option<AnswerOutcome>, SessionError> {
        let _turn = self.turn.lock().await;
        let snapshot = self.cards.snapshot().await;
        let Some(card) = snapshot.current_card() else {
            return Ok(None);
        };

        let kind = StatsKind::grade(input, card.answer());
        self.record(card.question().to_owned(), kind).await.map(Some)
    }

    /// Record a skip for the current card and advance.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if either store could not be persisted.
    pub async fn skip(&self) -> Result<Option<AnswerOutcome>, SessionError> {
        let _turn = self.turn.lock().await;
        let snapshot = self.cards.snapshot().await;
        let Some(card) = snapshot.current_card() else {
            return Ok(None);
        };

        self.record(card.question().to_owned(), StatsKind::Skip)
            .await
            .map(Some)
    }

    // Caller holds the turn lock. Both dispatches always run; the stats error
    // wins when both fail.
    async fn record(
        &self,
        question: String,
        kind: StatsKind,
    ) -> Result<AnswerOutcome, SessionError> {
        let stats = self
            .stats
            .dispatch(StatsAction::new(kind, question.clone()))
            .await;
        let cards = self.cards.dispatch(CardAction::Next).await;
        let (stats, cards) = (stats?, cards?);
        tracing::debug!(?kind, question = %question, "answer recorded");

        Ok(AnswerOutcome {
            question,
            kind,
            cards,
            stats,
        })
    }
}

use flash_core::model::{CardDraft, CardError, CardStore};

/// Form contents for the writing scene.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WritingVm {
    pub draft: CardDraft,
    /// Question of the stored card being edited, `None` for a new card.
    pub editing: Option<String>,
    pub form_key: String,
}

#[must_use]
pub fn map_writing(cards: &CardStore) -> WritingVm {
    match cards.current_card() {
        Some(card) => WritingVm {
            draft: CardDraft::from_card(card),
            editing: Some(card.question().to_string()),
            form_key: format!("edit:{}", card.question()),
        },
        None => WritingVm {
            draft: CardDraft::default(),
            editing: None,
            form_key: "new".to_string(),
        },
    }
}

#[must_use]
pub fn draft_error_message(err: &CardError) -> String {
    match err {
        CardError::EmptyQuestion => "Please enter a question.".to_string(),
        CardError::EmptyAnswer => "Please enter an answer.".to_string(),
        CardError::EmptySubject => "Please enter a subject.".to_string(),
        other => other.to_string(),
    }
}

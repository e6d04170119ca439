use flash_core::model::{CardStore, Stats, StatsStore};

/// What the answering scene shows for the current card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnsweringVm {
    pub question: String,
    pub subject: String,
    pub answer_lines: Vec<String>,
    pub stats_lines: Vec<String>,
    pub back_disabled: bool,
    /// Changes whenever a different card comes up, so per-card inputs reset.
    pub card_key: String,
}

/// Map the current card, or `None` when no card is selected.
#[must_use]
pub fn map_answering(cards: &CardStore, stats: &StatsStore) -> Option<AnsweringVm> {
    let card = cards.current_card()?;
    let current = cards.current().unwrap_or_default();

    Some(AnsweringVm {
        question: card.question().to_string(),
        subject: card.subject().to_string(),
        answer_lines: card.answer_lines().map(str::to_string).collect(),
        stats_lines: stats_popup_lines(stats.get(card.question())),
        back_disabled: cards.is_back_disabled(),
        card_key: format!("{current}:{}", card.question()),
    })
}

/// Text for the per-question stats popup.
#[must_use]
pub fn stats_popup_lines(stats: Option<&Stats>) -> Vec<String> {
    let Some(stats) = stats else {
        return vec!["You haven't seen this question before".to_string()];
    };

    let total = stats.total();
    let plural = if total == 1 { "" } else { "s" };
    vec![
        format!("You have seen this question {total} time{plural}."),
        format!("You got it right {}", stats.right),
        format!("Wrong {}", stats.wrong),
        format!("You skipped it {}", stats.skip),
    ]
}

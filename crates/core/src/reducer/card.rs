use crate::model::{Card, CardAction, CardStore};
use crate::navigation::{next_index, previous_index};
use crate::producer::ProducerRegistry;

use super::Reducer;

/// Applies `CardAction`s to a `CardStore`.
///
/// Subjects with a registered producer get a freshly generated card on `Next`
/// instead of moving through the stored deck.
#[derive(Debug, Clone, Default)]
pub struct CardReducer {
    producers: ProducerRegistry,
}

impl CardReducer {
    #[must_use]
    pub fn new(producers: ProducerRegistry) -> Self {
        Self { producers }
    }

    #[must_use]
    pub fn producers(&self) -> &ProducerRegistry {
        &self.producers
    }

    fn next(&self, state: &CardStore) -> CardStore {
        let producer = state
            .current_card()
            .and_then(|card| self.producers.for_subject(card.subject()));

        if let (Some(producer), Some(current)) = (producer, state.current()) {
            let mut cards = state.cards().to_vec();
            cards.push(producer.produce());
            // Always advances by one, even when the cursor was not on the last card.
            return state.with_cards(cards, Some(current + 1));
        }

        match next_index(state.cards(), state.current(), state.show()) {
            Some(next) => state.with_current(Some(next)),
            None => state.clone(),
        }
    }

    fn back(state: &CardStore) -> CardStore {
        match previous_index(state.cards(), state.current(), state.show()) {
            Some(previous) => state.with_current(Some(previous)),
            None => state.clone(),
        }
    }

    fn select(state: &CardStore, question: Option<&str>, subject: Option<&str>) -> CardStore {
        let target = match (question, subject) {
            (Some(question), _) => state.position_of(question),
            (None, Some(subject)) => state.first_of_subject(subject),
            (None, None) => None,
        };

        match target {
            Some(index) => state.with_current(Some(index)),
            None => state.clone(),
        }
    }

    fn save(state: &CardStore, card: Card) -> CardStore {
        let mut cards: Vec<Card> = state
            .cards()
            .iter()
            .filter(|existing| !existing.is_placeholder())
            .cloned()
            .collect();

        match cards
            .iter()
            .position(|existing| existing.question() == card.question())
        {
            Some(index) => cards[index] = card,
            None => cards.push(card),
        }

        state.with_cards(cards, state.current())
    }

    fn delete(state: &CardStore, question: &str) -> CardStore {
        let Some(index) = state.position_of(question) else {
            return state.clone();
        };

        let mut cards = state.cards().to_vec();
        cards.remove(index);
        let current = state.current().map_or(0, |current| current.saturating_sub(1));

        state.with_cards(cards, Some(current))
    }
}

impl Reducer for CardReducer {
    type State = CardStore;
    type Action = CardAction;

    fn reduce(&self, state: &CardStore, action: CardAction) -> CardStore {
        match action {
            CardAction::Next => self.next(state),
            CardAction::Back => Self::back(state),
            CardAction::Select { question, subject } => {
                Self::select(state, question.as_deref(), subject.as_deref())
            }
            CardAction::Save {
                question,
                answer,
                subject,
            } => Self::save(state, Card::new(question, answer, subject)),
            CardAction::Delete { question } => Self::delete(state, &question),
            CardAction::New => state.with_current(None),
            CardAction::ShowAdd { subject } => {
                let mut show = state.show().clone();
                show.insert(subject);
                state.with_show(show)
            }
            CardAction::ShowRemove { subject } => {
                let mut show = state.show().clone();
                show.remove(&subject);
                state.with_show(show)
            }
            CardAction::ShowAll => state.with_show(Default::default()),
            CardAction::Unknown => state.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use super::*;
    use crate::producer::CardProducer;

    struct FixedMath;

    impl CardProducer for FixedMath {
        fn subject(&self) -> &str {
            "Math"
        }

        fn produce(&self) -> Card {
            Card::new("3 + 4 = ?", "7", "Math")
        }
    }

    fn math_reducer() -> CardReducer {
        CardReducer::new(ProducerRegistry::new().with(Arc::new(FixedMath)))
    }

    fn deck() -> Vec<Card> {
        vec![
            Card::new("Q0", "A0", "Stack"),
            Card::new("Q1", "A1", "Queue"),
            Card::new("Q2", "A2", "Stack"),
        ]
    }

    fn store_at(cards: Vec<Card>, current: Option<usize>, show: &[&str]) -> CardStore {
        let show: BTreeSet<String> = show.iter().map(|s| (*s).to_owned()).collect();
        CardStore::from_parts(cards, current, show)
    }

    #[test]
    fn next_on_generated_subject_appends_and_advances() {
        let state = store_at(
            vec![
                Card::new("1+1", "2", "Math"),
                Card::new("What is a stack?", "...", "Stack"),
            ],
            Some(0),
            &[],
        );

        let next = math_reducer().reduce(&state, CardAction::Next);

        assert_eq!(next.cards().len(), 3);
        assert_eq!(next.current(), Some(1));
        assert_eq!(next.cards()[2].question(), "3 + 4 = ?");
        // The input store is untouched.
        assert_eq!(state.cards().len(), 2);
    }

    #[test]
    fn next_on_generated_last_card_moves_to_new_card() {
        let state = store_at(vec![Card::new("1+1", "2", "Math")], Some(0), &[]);
        let next = math_reducer().reduce(&state, CardAction::Next);
        assert_eq!(next.current(), Some(1));
        assert_eq!(next.current_card().unwrap().answer(), "7");
    }

    #[test]
    fn next_without_producer_navigates() {
        let state = store_at(vec![Card::new("1+1", "2", "Math"), deck()[0].clone()], Some(0), &[]);
        let next = CardReducer::default().reduce(&state, CardAction::Next);
        assert_eq!(next.cards().len(), 2);
        assert_eq!(next.current(), Some(1));
    }

    #[test]
    fn next_respects_filter() {
        let state = store_at(deck(), Some(0), &["Stack"]);
        let next = CardReducer::default().reduce(&state, CardAction::Next);
        assert_eq!(next.current(), Some(2));
        let wrapped = CardReducer::default().reduce(&next, CardAction::Next);
        assert_eq!(wrapped.current(), Some(0));
    }

    #[test]
    fn next_on_empty_deck_keeps_state() {
        let state = store_at(Vec::new(), Some(0), &[]);
        assert_eq!(CardReducer::default().reduce(&state, CardAction::Next), state);
    }

    #[test]
    fn back_clamps_at_start() {
        let state = store_at(deck(), Some(1), &[]);
        let reducer = CardReducer::default();
        let back = reducer.reduce(&state, CardAction::Back);
        assert_eq!(back.current(), Some(0));
        assert_eq!(reducer.reduce(&back, CardAction::Back).current(), Some(0));
    }

    #[test]
    fn select_by_question_and_subject() {
        let state = store_at(deck(), Some(0), &[]);
        let reducer = CardReducer::default();

        let by_question = reducer.reduce(&state, CardAction::select_question("Q2"));
        assert_eq!(by_question.current(), Some(2));

        let by_subject = reducer.reduce(&by_question, CardAction::select_subject("Queue"));
        assert_eq!(by_subject.current(), Some(1));

        let first_stack = reducer.reduce(&by_question, CardAction::select_subject("Stack"));
        assert_eq!(first_stack.current(), Some(0));
    }

    #[test]
    fn select_unknown_target_is_a_no_op() {
        let state = store_at(deck(), Some(1), &[]);
        let reducer = CardReducer::default();
        assert_eq!(reducer.reduce(&state, CardAction::select_question("nope")), state);
        assert_eq!(reducer.reduce(&state, CardAction::select_subject("nope")), state);
    }

    #[test]
    fn save_twice_keeps_one_card_with_latest_values() {
        let state = store_at(deck(), Some(0), &[]);
        let reducer = CardReducer::default();

        let once = reducer.reduce(&state, CardAction::save(Card::new("New", "first", "Heap")));
        let twice = reducer.reduce(&once, CardAction::save(Card::new("New", "second", "Tree")));

        let matching: Vec<&Card> = twice
            .cards()
            .iter()
            .filter(|card| card.question() == "New")
            .collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].answer(), "second");
        assert_eq!(matching[0].subject(), "Tree");
        assert_eq!(twice.cards().len(), 4);
    }

    #[test]
    fn save_existing_question_keeps_position() {
        let state = store_at(deck(), Some(0), &[]);
        let saved = CardReducer::default()
            .reduce(&state, CardAction::save(Card::new("Q1", "changed", "Queue")));
        assert_eq!(saved.cards()[1].answer(), "changed");
        assert_eq!(saved.cards().len(), 3);
    }

    #[test]
    fn save_drops_placeholder_cards() {
        let mut cards = deck();
        cards.insert(1, Card::new("", "", ""));
        let state = store_at(cards, Some(0), &[]);

        let saved = CardReducer::default()
            .reduce(&state, CardAction::save(Card::new("Q2", "updated", "Stack")));

        assert_eq!(saved.cards().len(), 3);
        assert!(saved.cards().iter().all(|card| !card.is_placeholder()));
        assert_eq!(saved.cards()[2].answer(), "updated");
    }

    #[test]
    fn delete_removes_exactly_one_and_clamps_cursor() {
        let reducer = CardReducer::default();
        for current in [Some(0), Some(1), Some(2), None] {
            let state = store_at(deck(), current, &[]);
            let deleted = reducer.reduce(&state, CardAction::delete("Q1"));
            assert_eq!(deleted.cards().len(), 2);
            assert!(deleted.position_of("Q1").is_none());
            let expected = current.map_or(0, |c| c.saturating_sub(1));
            assert_eq!(deleted.current(), Some(expected));
        }
    }

    #[test]
    fn delete_unknown_question_is_a_no_op() {
        let state = store_at(deck(), Some(2), &[]);
        assert_eq!(
            CardReducer::default().reduce(&state, CardAction::delete("missing")),
            state
        );
    }

    #[test]
    fn new_clears_cursor() {
        let state = store_at(deck(), Some(2), &[]);
        let blank = CardReducer::default().reduce(&state, CardAction::New);
        assert_eq!(blank.current(), None);
        assert!(blank.current_card().is_none());
    }

    #[test]
    fn show_actions_edit_filter() {
        let reducer = CardReducer::default();
        let state = store_at(deck(), Some(0), &[]);

        let added = reducer.reduce(&state, CardAction::show_add("Stack"));
        let again = reducer.reduce(&added, CardAction::show_add("Stack"));
        assert_eq!(again.show().len(), 1);

        let both = reducer.reduce(&again, CardAction::show_add("Queue"));
        let removed = reducer.reduce(&both, CardAction::show_remove("Stack"));
        assert!(removed.is_shown("Queue"));
        assert!(!removed.is_shown("Stack"));

        let missing = reducer.reduce(&removed, CardAction::show_remove("Heap"));
        assert_eq!(missing, removed);

        let all = reducer.reduce(&both, CardAction::ShowAll);
        assert!(all.show().is_empty());
        assert_eq!(all.cards(), state.cards());
    }

    #[test]
    fn unknown_action_returns_same_state() {
        let state = store_at(deck(), Some(1), &["Stack"]);
        assert_eq!(CardReducer::default().reduce(&state, CardAction::Unknown), state);
    }
}

use crate::model::{StatsAction, StatsStore};

use super::Reducer;

/// Applies `StatsAction`s to a `StatsStore`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsReducer;

impl Reducer for StatsReducer {
    type State = StatsStore;
    type Action = StatsAction;

    fn reduce(&self, state: &StatsStore, action: StatsAction) -> StatsStore {
        let Some((kind, question)) = action.target() else {
            return state.clone();
        };

        let previous = state.get(question).copied().unwrap_or_default();
        state.with_entry(question, previous.incremented(kind))
    }
}

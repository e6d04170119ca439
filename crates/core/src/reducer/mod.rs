mod card;
mod stats;

pub use card::CardReducer;
pub use stats::StatsReducer;

/// A pure transition function from `(state, action)` to the next state.
///
/// Implementations never fail: lookups that miss degrade to returning an
/// unchanged copy of the state.
pub trait Reducer: Send + Sync {
    type State: Clone + PartialEq + Send + Sync;
    type Action: Send;

    fn reduce(&self, state: &Self::State, action: Self::Action) -> Self::State;
}

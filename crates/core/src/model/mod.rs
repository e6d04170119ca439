mod action;
mod card;
mod stats;
mod store;

pub use action::{CardAction, StatsAction};
pub use card::{Card, CardDraft, CardError, seed_cards};
pub use stats::{Stats, StatsKind, StatsStore, StatsTotals};
pub use store::CardStore;

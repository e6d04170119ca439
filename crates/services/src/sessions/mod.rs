mod card;
mod stats;
mod study;

pub use card::CardSession;
pub use stats::StatsSession;
pub use study::{AnswerOutcome, StudyService};

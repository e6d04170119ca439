mod answering;
mod state;
mod subjects;
mod writing;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use answering::AnsweringView;
pub use state::{StoreProvider, StoreSignals, ViewError, ViewState, view_state_from_resource};
pub use subjects::SubjectMenu;
pub use writing::WritingView;

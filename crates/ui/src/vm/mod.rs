mod answering_vm;
mod stats_vm;
mod subject_vm;
mod writing_vm;

pub use answering_vm::{AnsweringVm, map_answering, stats_popup_lines};
pub use stats_vm::map_totals;
pub use subject_vm::{QuestionEntryVm, SubjectEntryVm, SubjectMenuVm, map_subject_menu};
pub use writing_vm::{WritingVm, draft_error_message, map_writing};

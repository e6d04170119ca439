use flash_core::ProducerRegistry;
use flash_core::model::CardStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionEntryVm {
    pub question: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectEntryVm {
    pub name: String,
    pub active: bool,
    pub expanded: bool,
    pub generated: bool,
    /// Only filled for expanded subjects.
    pub questions: Vec<QuestionEntryVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectMenuVm {
    pub subjects: Vec<SubjectEntryVm>,
    pub filtered: bool,
}

#[must_use]
pub fn map_subject_menu(cards: &CardStore, producers: &ProducerRegistry) -> SubjectMenuVm {
    let current = cards.current_card();

    let subjects = cards
        .subjects()
        .into_iter()
        .map(|subject| {
            let expanded = cards.is_shown(subject);
            let questions = if expanded {
                cards
                    .subject_questions(subject)
                    .into_iter()
                    .map(|question| QuestionEntryVm {
                        question: question.to_string(),
                        active: current.is_some_and(|card| card.question() == question),
                    })
                    .collect()
            } else {
                Vec::new()
            };

            SubjectEntryVm {
                name: subject.to_string(),
                active: current.is_some_and(|card| card.subject() == subject),
                expanded,
                generated: producers.is_generated(subject),
                questions,
            }
        })
        .collect();

    SubjectMenuVm {
        subjects,
        filtered: !cards.show().is_empty(),
    }
}

use dioxus::prelude::*;
use flash_core::model::CardAction;

use crate::context::AppContext;
use crate::views::StoreSignals;
use crate::vm::{SubjectEntryVm, map_subject_menu};

/// Sidebar listing subjects; expanded subjects also list their questions.
#[component]
pub fn SubjectMenu() -> Element {
    let ctx = use_context::<AppContext>();
    let signals = use_context::<StoreSignals>();

    let vm = signals
        .cards
        .read()
        .as_ref()
        .map(|cards| map_subject_menu(cards, ctx.cards().producers()));
    let Some(vm) = vm else {
        return rsx! {};
    };

    let show_all_ctx = ctx.clone();
    let all_class = if vm.filtered { "subject-all" } else { "subject-all active" };
    rsx! {
        nav { class: "subject-menu",
            h3 { "Subjects" }
            button {
                class: "{all_class}",
                r#type: "button",
                onclick: move |_| signals.dispatch_card(&show_all_ctx, CardAction::ShowAll),
                "All subjects"
            }
            ul {
                for subject in vm.subjects {
                    SubjectItem { key: "{subject.name}", subject: subject.clone() }
                }
            }
        }
    }
}

#[component]
fn SubjectItem(subject: SubjectEntryVm) -> Element {
    let ctx = use_context::<AppContext>();
    let signals = use_context::<StoreSignals>();

    let select_ctx = ctx.clone();
    let select_name = subject.name.clone();
    let toggle_ctx = ctx.clone();
    let toggle_name = subject.name.clone();
    let expanded = subject.expanded;
    let item_class = if subject.active { "subject active" } else { "subject" };
    let toggle_title = if expanded {
        "Hide questions"
    } else {
        "Show only this subject"
    };
    let toggle_label = if expanded { "-" } else { "+" };

    rsx! {
        li { class: "{item_class}",
            div { class: "subject-row",
                button {
                    class: "subject-name",
                    r#type: "button",
                    onclick: move |_| {
                        signals.dispatch_card(&select_ctx, CardAction::select_subject(select_name.clone()));
                    },
                    "{subject.name}"
                    if subject.generated {
                        span { class: "subject-generated", " (generated)" }
                    }
                }
                button {
                    class: "subject-toggle",
                    r#type: "button",
                    title: "{toggle_title}",
                    onclick: move |_| {
                        let action = if expanded {
                            CardAction::show_remove(toggle_name.clone())
                        } else {
                            CardAction::show_add(toggle_name.clone())
                        };
                        signals.dispatch_card(&toggle_ctx, action);
                    },
                    "{toggle_label}"
                }
            }
            if expanded {
                ul { class: "subject-questions",
                    for entry in subject.questions.iter().cloned() {
                        QuestionItem {
                            key: "{entry.question}",
                            question: entry.question,
                            active: entry.active,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionItem(question: String, active: bool) -> Element {
    let ctx = use_context::<AppContext>();
    let signals = use_context::<StoreSignals>();
    let target = question.clone();
    let item_class = if active { "question-item active" } else { "question-item" };

    rsx! {
        li { class: "{item_class}",
            button {
                r#type: "button",
                onclick: move |_| {
                    signals.dispatch_card(&ctx, CardAction::select_question(target.clone()));
                },
                "{question}"
            }
        }
    }
}

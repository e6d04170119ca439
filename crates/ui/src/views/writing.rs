use dioxus::prelude::*;
use flash_core::model::{CardAction, CardDraft};

use crate::context::AppContext;
use crate::views::StoreSignals;
use crate::vm::{WritingVm, draft_error_message, map_writing};

#[component]
pub fn WritingView() -> Element {
    let signals = use_context::<StoreSignals>();
    let vm = signals.cards.read().as_ref().map(map_writing);

    rsx! {
        div { class: "page writing",
            h2 { "Write Cards" }
            if let Some(err) = *signals.error.read() {
                p { class: "error", "{err.message()}" }
            }
            if let Some(vm) = vm {
                WritingForm { key: "{vm.form_key}", vm: vm.clone() }
            }
        }
    }
}

#[component]
fn WritingForm(vm: WritingVm) -> Element {
    let ctx = use_context::<AppContext>();
    let signals = use_context::<StoreSignals>();

    let mut question = use_signal(|| vm.draft.question.clone());
    let mut answer = use_signal(|| vm.draft.answer.clone());
    let mut subject = use_signal(|| vm.draft.subject.clone());
    let mut form_error = use_signal(|| None::<String>);

    let new_ctx = ctx.clone();
    let save_ctx = ctx.clone();
    let delete_ctx = ctx;
    let editing = vm.editing.clone();

    rsx! {
        form {
            class: "card-form",
            onsubmit: move |evt| evt.prevent_default(),
            if let Some(message) = form_error() {
                p { class: "form-error", "{message}" }
            }
            label { r#for: "card-question", "Question" }
            input {
                id: "card-question",
                r#type: "text",
                value: "{question}",
                oninput: move |evt| question.set(evt.value()),
            }
            label { r#for: "card-answer", "Answer" }
            textarea {
                id: "card-answer",
                value: "{answer}",
                oninput: move |evt| answer.set(evt.value()),
            }
            label { r#for: "card-subject", "Subject" }
            input {
                id: "card-subject",
                r#type: "text",
                value: "{subject}",
                oninput: move |evt| subject.set(evt.value()),
            }
            div { class: "form-actions",
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| signals.dispatch_card(&new_ctx, CardAction::New),
                    "New Card"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        let draft = CardDraft {
                            question: question(),
                            answer: answer(),
                            subject: subject(),
                        };
                        match draft.validate() {
                            Ok(card) => {
                                form_error.set(None);
                                signals.dispatch_card(&save_ctx, CardAction::save(card));
                            }
                            Err(err) => form_error.set(Some(draft_error_message(&err))),
                        }
                    },
                    "Save"
                }
                if let Some(stored) = editing {
                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: move |_| {
                            signals.dispatch_card(&delete_ctx, CardAction::delete(stored.clone()));
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}

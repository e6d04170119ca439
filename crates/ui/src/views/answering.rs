use dioxus::prelude::*;
use flash_core::model::{CardAction, StatsStore};

use crate::context::AppContext;
use crate::views::{StoreSignals, ViewError};
use crate::vm::{AnsweringVm, map_answering, map_totals};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AnswerIntent {
    Submit,
    Skip,
}

#[component]
pub fn AnsweringView() -> Element {
    let ctx = use_context::<AppContext>();
    let signals = use_context::<StoreSignals>();

    let cards = signals.cards.read().clone();
    let stats = signals.stats.read().clone().unwrap_or_default();
    let vm = cards.as_ref().and_then(|cards| map_answering(cards, &stats));

    rsx! {
        div { class: "page answering",
            if let Some(err) = *signals.error.read() {
                p { class: "error", "{err.message()}" }
            }
            match vm {
                Some(vm) => rsx! {
                    AnswerCard { key: "{vm.card_key}", vm: vm.clone() }
                },
                None => rsx! {
                    div { class: "empty",
                        p { "No card selected." }
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| signals.dispatch_card(&ctx, CardAction::Next),
                            "Start"
                        }
                    }
                },
            }
            TotalsPanel { stats }
        }
    }
}

#[component]
fn AnswerCard(vm: AnsweringVm) -> Element {
    let ctx = use_context::<AppContext>();
    let signals = use_context::<StoreSignals>();
    let mut input = use_signal(String::new);
    let mut show_answer = use_signal(|| false);
    let mut show_stats = use_signal(|| false);

    let answer_intent = {
        let ctx = ctx.clone();
        use_callback(move |intent: AnswerIntent| {
            let study = ctx.study();
            let ctx = ctx.clone();
            let typed = input.read().clone();
            spawn(async move {
                let result = match intent {
                    AnswerIntent::Submit => study.submit(&typed).await,
                    AnswerIntent::Skip => study.skip().await,
                };
                match result {
                    Ok(Some(outcome)) => signals.apply_outcome(&outcome),
                    Ok(None) => {}
                    Err(err) => {
                        tracing::warn!(error = %err, "answer not persisted");
                        signals.refresh(&ctx).await;
                        let mut error = signals.error;
                        error.set(Some(ViewError::Persist));
                    }
                }
            });
        })
    };

    let back_ctx = ctx.clone();
    let toggle_label = if show_answer() { "Hide Answer" } else { "Show Answer" };

    rsx! {
        div { class: "question-card",
            header { class: "question-header",
                button {
                    class: "stats-icon",
                    r#type: "button",
                    title: "Question stats",
                    onclick: move |_| {
                        let open = show_stats();
                        show_stats.set(!open);
                    },
                    "?"
                }
                h2 { class: "question", "{vm.question}" }
                span { class: "subject-tag", "{vm.subject}" }
            }
            if show_stats() {
                div { class: "stats-popup",
                    for line in vm.stats_lines.iter() {
                        div { "{line}" }
                    }
                }
            }
            div { class: "answer-controls",
                button {
                    class: "btn",
                    r#type: "button",
                    disabled: vm.back_disabled,
                    onclick: move |_| signals.dispatch_card(&back_ctx, CardAction::Back),
                    "Back"
                }
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| answer_intent.call(AnswerIntent::Skip),
                    "Next or Skip"
                }
            }
            textarea {
                class: "answer-input",
                value: "{input}",
                oninput: move |evt| input.set(evt.value()),
            }
            div { class: "answer-controls",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| answer_intent.call(AnswerIntent::Submit),
                    "Submit"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let open = show_answer();
                        show_answer.set(!open);
                    },
                    "{toggle_label}"
                }
            }
            if show_answer() {
                div { class: "answer",
                    h3 { "Answer" }
                    for line in vm.answer_lines.iter() {
                        div { "{line}" }
                    }
                }
            }
        }
    }
}

#[component]
fn TotalsPanel(stats: StatsStore) -> Element {
    let lines = map_totals(&stats);
    rsx! {
        div { class: "totals",
            for line in lines {
                div { "{line}" }
            }
        }
    }
}

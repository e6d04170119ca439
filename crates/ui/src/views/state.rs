use dioxus::prelude::*;
use flash_core::model::{CardAction, CardStore, StatsStore};
use services::AnswerOutcome;

use crate::context::AppContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    Persist,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Unknown => "Something went wrong. Please try again.",
            Self::Persist => "Your changes could not be saved.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

/// Latest card and stats snapshots shared by every view.
#[derive(Clone, Copy, PartialEq)]
pub struct StoreSignals {
    pub cards: Signal<Option<CardStore>>,
    pub stats: Signal<Option<StatsStore>>,
    pub error: Signal<Option<ViewError>>,
}

impl StoreSignals {
    /// Create signals in the current scope. Call from a hook closure.
    #[must_use]
    pub fn new(cards: Option<CardStore>, stats: Option<StatsStore>) -> Self {
        Self {
            cards: Signal::new(cards),
            stats: Signal::new(stats),
            error: Signal::new(None),
        }
    }

    /// Dispatch a card action and publish the resulting store.
    pub fn dispatch_card(self, ctx: &AppContext, action: CardAction) {
        let session = ctx.cards();
        let Self {
            mut cards,
            mut error,
            ..
        } = self;

        spawn(async move {
            match session.dispatch(action).await {
                Ok(state) => {
                    cards.set(Some(state));
                    error.set(None);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "card action not persisted");
                    cards.set(Some(session.snapshot().await));
                    error.set(Some(ViewError::Persist));
                }
            }
        });
    }

    /// Publish the stores returned by a submit or skip.
    pub fn apply_outcome(self, outcome: &AnswerOutcome) {
        let Self {
            mut cards,
            mut stats,
            mut error,
        } = self;
        cards.set(Some(outcome.cards().clone()));
        stats.set(Some(outcome.stats().clone()));
        error.set(None);
    }

    /// Re-read both stores after a failed operation.
    pub async fn refresh(self, ctx: &AppContext) {
        let Self {
            mut cards,
            mut stats,
            ..
        } = self;
        cards.set(Some(ctx.cards().snapshot().await));
        stats.set(Some(ctx.stats().snapshot().await));
    }
}

/// Loads both stores once and shares them with its children.
#[component]
pub fn StoreProvider(children: Element) -> Element {
    let ctx = use_context::<AppContext>();
    let signals = use_context_provider(|| StoreSignals::new(None, None));

    let resource = use_resource(move || {
        let ctx = ctx.clone();
        let StoreSignals {
            mut cards,
            mut stats,
            ..
        } = signals;
        async move {
            cards.set(Some(ctx.cards().snapshot().await));
            stats.set(Some(ctx.stats().snapshot().await));
            Ok::<_, ViewError>(())
        }
    });

    match view_state_from_resource(&resource) {
        ViewState::Ready(()) => children,
        ViewState::Error(err) => rsx! {
            p { "{err.message()}" }
        },
        ViewState::Idle | ViewState::Loading => rsx! {
            p { "Loading..." }
        },
    }
}

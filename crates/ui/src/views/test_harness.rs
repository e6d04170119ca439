use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use flash_core::ProducerRegistry;
use flash_core::model::{CardAction, CardStore, StatsStore};
use services::{AppServices, default_producers};
use storage::repository::{InMemoryRepository, Storage};

use crate::context::{AppContext, build_app_context};
use crate::views::{AnsweringView, StoreProvider, StoreSignals, SubjectMenu, WritingView};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Answering,
    Subjects,
    Writing,
    /// Answering view behind the loading provider.
    Provided,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    context: AppContext,
    snapshot: Option<(CardStore, StatsStore)>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let context = props.context.clone();
    use_context_provider(|| context);
    let snapshot = props.snapshot.clone();
    use_context_provider(|| {
        let (cards, stats) = snapshot.unzip();
        StoreSignals::new(cards, stats)
    });

    match props.view {
        ViewKind::Answering => rsx! { AnsweringView {} },
        ViewKind::Subjects => rsx! { SubjectMenu {} },
        ViewKind::Writing => rsx! { WritingView {} },
        ViewKind::Provided => rsx! {
            StoreProvider { AnsweringView {} }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..4 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let storage = Storage::from_key_value(InMemoryRepository::new());
    setup_view_harness_with_storage(view, storage, default_producers(), Vec::new()).await
}

/// Build a harness over `storage`, which tests may pre-populate, and apply
/// `actions` before the first render.
pub async fn setup_view_harness_with_storage(
    view: ViewKind,
    storage: Storage,
    producers: ProducerRegistry,
    actions: Vec<CardAction>,
) -> ViewHarness {
    let services = AppServices::from_storage(&storage, producers)
        .await
        .expect("services");
    for action in actions {
        services.cards().dispatch(action).await.expect("dispatch");
    }

    let snapshot = match view {
        ViewKind::Provided => None,
        _ => Some((
            services.cards().snapshot().await,
            services.stats().snapshot().await,
        )),
    };

    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            context: build_app_context(&services),
            snapshot,
            view,
        },
    );

    ViewHarness {
        dom,
        storage,
        services,
    }
}

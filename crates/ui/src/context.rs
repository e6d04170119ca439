use std::sync::Arc;

use services::{AppServices, CardSession, StatsSession, StudyService};

/// What the UI needs from the application composition root.
pub trait UiApp: Send + Sync {
    fn card_session(&self) -> Arc<CardSession>;
    fn stats_session(&self) -> Arc<StatsSession>;
    fn study(&self) -> StudyService;
}

impl UiApp for AppServices {
    fn card_session(&self) -> Arc<CardSession> {
        self.cards()
    }

    fn stats_session(&self) -> Arc<StatsSession> {
        self.stats()
    }

    fn study(&self) -> StudyService {
        AppServices::study(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    cards: Arc<CardSession>,
    stats: Arc<StatsSession>,
    study: StudyService,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &dyn UiApp) -> Self {
        Self {
            cards: app.card_session(),
            stats: app.stats_session(),
            study: app.study(),
        }
    }

    #[must_use]
    pub fn cards(&self) -> Arc<CardSession> {
        Arc::clone(&self.cards)
    }

    #[must_use]
    pub fn stats(&self) -> Arc<StatsSession> {
        Arc::clone(&self.stats)
    }

    #[must_use]
    pub fn study(&self) -> StudyService {
        self.study.clone()
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
///
/// Called by the binary once services are ready.
#[must_use]
pub fn build_app_context(app: &dyn UiApp) -> AppContext {
    AppContext::new(app)
}

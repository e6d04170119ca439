#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod persistence;
pub mod producers;
pub mod sessions;
pub mod store;

pub use app_services::{AppServices, seed_storage};
pub use error::{AppServicesError, SessionError};
pub use persistence::{CardPersister, StatsPersister};
pub use producers::{AdditionCardProducer, MATH_SUBJECT, default_producers};
pub use sessions::{AnswerOutcome, CardSession, StatsSession, StudyService};
pub use store::{Change, StateObserver, Store};

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::model::Card;

/// Synthesizes cards for a subject whose questions are generated on demand.
pub trait CardProducer: Send + Sync {
    /// Subject this producer generates cards for.
    fn subject(&self) -> &str;

    /// Build one fresh card. Implementations may be random.
    fn produce(&self) -> Card;
}

/// Card producers keyed by subject.
#[derive(Clone, Default)]
pub struct ProducerRegistry {
    producers: HashMap<String, Arc<dyn CardProducer>>,
}

impl ProducerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `producer`, replacing any producer for the same subject.
    #[must_use]
    pub fn with(mut self, producer: Arc<dyn CardProducer>) -> Self {
        self.register(producer);
        self
    }

    pub fn register(&mut self, producer: Arc<dyn CardProducer>) {
        self.producers
            .insert(producer.subject().to_owned(), producer);
    }

    #[must_use]
    pub fn for_subject(&self, subject: &str) -> Option<&dyn CardProducer> {
        self.producers.get(subject).map(|producer| &**producer)
    }

    #[must_use]
    pub fn is_generated(&self, subject: &str) -> bool {
        self.producers.contains_key(subject)
    }
}

impl fmt::Debug for ProducerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut subjects: Vec<&str> = self.producers.keys().map(String::as_str).collect();
        subjects.sort_unstable();
        f.debug_struct("ProducerRegistry")
            .field("subjects", &subjects)
            .finish()
    }
}

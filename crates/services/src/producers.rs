use std::sync::Arc;

use flash_core::model::Card;
use flash_core::{CardProducer, ProducerRegistry};
use rand::Rng;

/// Subject served by [`AdditionCardProducer`].
pub const MATH_SUBJECT: &str = "Math";

/// Generates single-digit addition problems.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdditionCardProducer;

impl AdditionCardProducer {
    /// Build the card for `left + right`.
    #[must_use]
    pub fn card_for(left: u32, right: u32) -> Card {
        Card::new(
            format!("{left} + {right} = ?"),
            (left + right).to_string(),
            MATH_SUBJECT,
        )
    }
}

impl CardProducer for AdditionCardProducer {
    fn subject(&self) -> &str {
        MATH_SUBJECT
    }

    fn produce(&self) -> Card {
        let mut rng = rand::rng();
        let left = rng.random_range(0..10);
        let right = rng.random_range(0..10);
        Self::card_for(left, right)
    }
}

/// Registry with every built-in producer.
#[must_use]
pub fn default_producers() -> ProducerRegistry {
    ProducerRegistry::new().with(Arc::new(AdditionCardProducer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_for_formats_question_and_sum() {
        let card = AdditionCardProducer::card_for(3, 9);
        assert_eq!(card.question(), "3 + 9 = ?");
        assert_eq!(card.answer(), "12");
        assert_eq!(card.subject(), "Math");
    }

    #[test]
    fn produced_cards_stay_in_range() {
        for _ in 0..200 {
            let card = AdditionCardProducer.produce();
            let (left, right) = card
                .question()
                .strip_suffix(" = ?")
                .and_then(|sum| sum.split_once(" + "))
                .unwrap();
            let left: u32 = left.parse().unwrap();
            let right: u32 = right.parse().unwrap();
            assert!(left < 10 && right < 10);
            assert_eq!(card.answer(), (left + right).to_string());
        }
    }

    #[test]
    fn default_registry_serves_math() {
        let registry = default_producers();
        assert!(registry.is_generated(MATH_SUBJECT));
        assert!(!registry.is_generated("Stack"));
    }
}

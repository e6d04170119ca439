#![forbid(unsafe_code)]

pub mod model;
pub mod navigation;
pub mod producer;
pub mod reducer;

pub use producer::{CardProducer, ProducerRegistry};
pub use reducer::{CardReducer, Reducer, StatsReducer};

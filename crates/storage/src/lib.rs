#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    CardRepository, InMemoryRepository, KeyValueRepository, StatsRepository, Storage,
    StorageError,
};

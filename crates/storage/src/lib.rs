#![forbid(unsafe_code)]

pub mod progress_codec;
pub mod repository;
pub mod sqlite;

pub use repository::{InMemoryRepository, ProgressRepository, Storage, StorageError};

#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod judge;
pub mod model;
pub mod progression;

pub use catalog::{Catalog, CatalogError};
pub use error::Error;
pub use judge::{judge, normalize_whitespace};
pub use progression::{AwardOutcome, award, is_unlocked, level_for, next_challenge};

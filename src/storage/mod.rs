//! Persistence for supplier records.
//!
//! A single backend: a CSV export with a fixed 13-column schema. An
//! empty result set produces no file at all.

mod export;

pub use export::{SaveOutcome, save_csv};

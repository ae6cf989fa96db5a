//! Pipeline entry points for supplier scout operations.
//!
//! - `run`: fetch, classify, display, and save in one pass
//! - `run_validate`: configuration sanity check

pub mod run;
pub mod validate;

pub use run::{RunStats, run};
pub use validate::run_validate;

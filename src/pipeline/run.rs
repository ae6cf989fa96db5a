// src/pipeline/run.rs

//! Full fetch → classify → display → save pipeline.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{Config, OverpassResponse};
use crate::report;
use crate::services::{OverpassClient, SupplierFilter};
use crate::storage::{SaveOutcome, save_csv};

/// Timing and volume summary for one run.
#[derive(Debug, Clone)]
pub struct RunStats {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub fetched: usize,
    pub relevant: usize,
}

/// Run the full pipeline.
///
/// A fetch failure is downgraded to an empty result set so the run
/// still finishes cleanly; only local I/O failures are fatal.
pub fn run(config: &Config) -> Result<RunStats> {
    let start_time = Utc::now();

    if config.output.console_enabled {
        report::print_banner();
    }

    let client = OverpassClient::new(&config.http)?;

    log::info!("Querying OpenStreetMap for suppliers in Bucharest...");
    let response = match client.fetch() {
        Ok(response) => response,
        Err(error) => {
            log::warn!("Error fetching data: {error}");
            OverpassResponse::default()
        }
    };
    let fetched = response.elements.len();
    log::info!("Fetched {fetched} raw element(s)");

    let filter = SupplierFilter::new(&config.filter);
    let suppliers = filter.filter_elements(&response.elements);
    log::info!(
        "{} of {} element(s) classified as potential suppliers",
        suppliers.len(),
        fetched
    );

    if config.output.console_enabled {
        report::print_results(&suppliers);
    }

    let outcome = save_csv(&suppliers, &config.output.csv_path)?;
    match &outcome {
        SaveOutcome::Written { path, record_count } => {
            log::info!("Saved {} record(s) to {}", record_count, path.display());
        }
        SaveOutcome::Skipped => {
            log::info!("No records to save; skipping CSV export");
        }
    }

    if config.output.console_enabled {
        report::print_save_outcome(&outcome);
        if matches!(outcome, SaveOutcome::Written { .. }) {
            report::print_tips();
        }
    }

    let end_time = Utc::now();
    let stats = RunStats {
        start_time,
        end_time,
        fetched,
        relevant: suppliers.len(),
    };
    log::info!(
        "Run finished in {} ms ({} fetched, {} relevant)",
        (stats.end_time - stats.start_time).num_milliseconds(),
        stats.fetched,
        stats.relevant
    );

    Ok(stats)
}

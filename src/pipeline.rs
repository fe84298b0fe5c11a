//! Sales computation pipeline
//!
//! Wires the stages together in a strictly linear order:
//!
//! 1. Load the price catalogue and the sales record (`io::json_reader`)
//! 2. Build the price index (`core::price_index`)
//! 3. Aggregate the sales against it (`core::aggregator`)
//! 4. Render, print and persist the summary (`io::report`)
//!
//! Elapsed time covers steps 1 to 3. Loading failures stop the run before the
//! index is built; both documents are still attempted so every failure is
//! reported. A failed results write is reported and does not fail the run.

use crate::core::{compute_total, PriceIndex, Reporter};
use crate::io::{load_sequence, print_summary, render_summary, write_results, DEFAULT_RESULTS_FILE};
use crate::types::{RunResult, SalesError};
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Everything one run needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Price catalogue document
    pub price_catalogue: PathBuf,

    /// Sales record document
    pub sales_record: PathBuf,

    /// Results file, overwritten on success
    pub results_path: PathBuf,
}

impl RunConfig {
    /// Configuration writing to `SalesResults.txt` in the working directory
    pub fn new(price_catalogue: impl Into<PathBuf>, sales_record: impl Into<PathBuf>) -> Self {
        RunConfig {
            price_catalogue: price_catalogue.into(),
            sales_record: sales_record.into(),
            results_path: PathBuf::from(DEFAULT_RESULTS_FILE),
        }
    }

    pub fn with_results_path(mut self, results_path: impl Into<PathBuf>) -> Self {
        self.results_path = results_path.into();
        self
    }
}

/// Load both documents, build the index and compute the total
///
/// # Errors
///
/// Returns [`SalesError::InputUnavailable`] if either document failed to load.
/// The individual causes have already been passed to `reporter`.
pub fn compute(config: &RunConfig, reporter: &mut dyn Reporter) -> Result<RunResult, SalesError> {
    let start = Instant::now();

    let prices = load_reported(&config.price_catalogue, reporter);
    let sales = load_reported(&config.sales_record, reporter);

    let (prices, sales) = match (prices, sales) {
        (Some(prices), Some(sales)) => (prices, sales),
        (prices, sales) => {
            let failed = usize::from(prices.is_none()) + usize::from(sales.is_none());
            return Err(SalesError::InputUnavailable { failed });
        }
    };

    let index = PriceIndex::build(&prices, reporter);
    let total_sales = compute_total(&sales, &index, reporter);
    let elapsed_seconds = start.elapsed().as_secs_f64();

    Ok(RunResult {
        total_sales,
        elapsed_seconds,
    })
}

/// Run the whole pipeline: compute, print the summary to `console`, persist it
pub fn run(
    config: &RunConfig,
    reporter: &mut dyn Reporter,
    console: &mut dyn Write,
) -> Result<RunResult, SalesError> {
    let result = compute(config, reporter)?;
    let rendered = render_summary(&result);

    if let Err(e) = print_summary(&rendered, console) {
        debug!(error = %e, "failed to print summary");
    }

    match write_results(&config.results_path, &rendered) {
        Ok(()) => debug!(path = %config.results_path.display(), "results written"),
        Err(e) => reporter.error(&e),
    }

    info!(
        total = result.total_sales,
        elapsed = result.elapsed_seconds,
        "run complete"
    );
    Ok(result)
}

fn load_reported(path: &Path, reporter: &mut dyn Reporter) -> Option<Vec<Value>> {
    match load_sequence(path) {
        Ok(records) => Some(records),
        Err(e) => {
            reporter.error(&e);
            None
        }
    }
}

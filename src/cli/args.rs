use crate::io::DEFAULT_RESULTS_FILE;
use crate::pipeline::RunConfig;
use clap::Parser;
use std::path::PathBuf;

/// Compute total sales from a price catalogue and a sales record
#[derive(Parser, Debug)]
#[command(name = "compute-sales", version)]
#[command(about = "Compute total sales from a price catalogue and a sales record", long_about = None)]
pub struct CliArgs {
    /// JSON array of {"product", "price"} records
    #[arg(value_name = "PRICE_CATALOGUE", help = "Path to the price catalogue JSON file")]
    pub price_catalogue: PathBuf,

    /// JSON array of {"items": [{"product", "quantity"}, ...]} records
    #[arg(value_name = "SALES_RECORD", help = "Path to the sales record JSON file")]
    pub sales_record: PathBuf,

    /// Where to write the summary
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = DEFAULT_RESULTS_FILE,
        help = "Results file, overwritten on every run"
    )]
    pub output: PathBuf,

    /// Emit debug logs on stderr
    #[arg(short = 'v', long = "verbose", help = "Enable debug logging on stderr")]
    pub verbose: bool,
}

impl CliArgs {
    /// Build the pipeline configuration from parsed arguments
    pub fn to_run_config(&self) -> RunConfig {
        RunConfig {
            price_catalogue: self.price_catalogue.clone(),
            sales_record: self.sales_record.clone(),
            results_path: self.output.clone(),
        }
    }
}

//! Sales Calculator CLI
//!
//! Computes total sales from a JSON price catalogue and a JSON sales record.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- priceCatalogue.json salesRecord.json
//! cargo run -- --output results.txt priceCatalogue.json salesRecord.json
//! RUST_LOG=compute_sales=debug cargo run -- priceCatalogue.json salesRecord.json
//! ```
//!
//! Diagnostics and the summary go to stdout; the summary is also written to
//! `SalesResults.txt` (or `--output`).
//!
//! # Exit Codes
//!
//! - 0: Success, even if every entry was skipped
//! - 1: Wrong arguments, or an input file could not be loaded

use compute_sales::cli;
use compute_sales::core::ConsoleReporter;
use compute_sales::logging;
use compute_sales::pipeline;
use std::process;

fn main() {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) if cli::is_informational(&e) => e.exit(),
        Err(_) => {
            println!("{}", cli::USAGE);
            process::exit(1);
        }
    };

    logging::init_cli_logger(args.verbose);

    let config = args.to_run_config();
    let mut reporter = ConsoleReporter::stdout();
    let mut console = std::io::stdout();

    // Load failures were already reported as ERROR lines
    if pipeline::run(&config, &mut reporter, &mut console).is_err() {
        process::exit(1);
    }
}

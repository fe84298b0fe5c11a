// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::CliArgs;

use clap::error::ErrorKind;
use clap::Parser;

/// Printed to stdout when the invocation is malformed
pub const USAGE: &str = "Usage: compute-sales priceCatalogue.json salesRecord.json";

/// Parse command-line arguments using clap
///
/// Unlike `CliArgs::parse`, this does not exit on failure: the entry point
/// decides how a malformed invocation is reported.
pub fn parse_args() -> Result<CliArgs, clap::Error> {
    CliArgs::try_parse()
}

/// Whether a parse "error" is really a `--help` / `--version` request
pub fn is_informational(error: &clap::Error) -> bool {
    matches!(
        error.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_is_informational() {
        let error = CliArgs::try_parse_from(["program", "--help"]).unwrap_err();
        assert!(is_informational(&error));
    }

    #[test]
    fn test_missing_argument_is_not_informational() {
        let error = CliArgs::try_parse_from(["program", "only.json"]).unwrap_err();
        assert!(!is_informational(&error));
    }
}

//! Summary rendering and persistence
//!
//! All rendering functions are pure (no I/O) for easy testing; only
//! [`write_results`] touches the filesystem.

use crate::types::{RunResult, SalesError};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Default results file, relative to the current working directory
pub const DEFAULT_RESULTS_FILE: &str = "SalesResults.txt";

/// Format an amount with thousands separators and two decimals
///
/// The `$` sign is not included. Negative amounts keep their sign in front of
/// the digits (`-1,234.50`). Non-finite values render as `inf`, `-inf` and
/// `nan`.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "nan".to_string();
    }
    if amount.is_infinite() {
        return amount.to_string();
    }

    let fixed = format!("{:.2}", amount);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    format!("{}{}.{}", sign, group_thousands(whole), fraction)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Render the summary block
pub fn render_summary(result: &RunResult) -> String {
    format!(
        "\n===== SALES SUMMARY =====\n\
         Total Sales: ${}\n\
         Execution Time: {:.6} seconds\n\
         =========================\n",
        format_currency(result.total_sales),
        result.elapsed_seconds
    )
}

/// Print the rendered summary to the console
///
/// A line terminator follows the block, so the console shows a trailing blank
/// line after the closing rule.
pub fn print_summary(rendered: &str, output: &mut dyn Write) -> std::io::Result<()> {
    writeln!(output, "{}", rendered)?;
    output.flush()
}

/// Write the rendered summary to `path`, replacing any existing content
pub fn write_results(path: &Path, rendered: &str) -> Result<(), SalesError> {
    fs::write(path, rendered).map_err(|e| SalesError::results_write(&e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0.0, "0.00")]
    #[case::small(20.0, "20.00")]
    #[case::rounding(2.345_6, "2.35")]
    #[case::hundreds(999.99, "999.99")]
    #[case::thousand(1_000.0, "1,000.00")]
    #[case::example(1_234.56, "1,234.56")]
    #[case::millions(12_345_678.9, "12,345,678.90")]
    #[case::exact_million(1_000_000.0, "1,000,000.00")]
    #[case::negative(-1_234.5, "-1,234.50")]
    #[case::negative_small(-5.0, "-5.00")]
    fn test_format_currency(#[case] amount: f64, #[case] expected: &str) {
        assert_eq!(format_currency(amount), expected);
    }

    #[test]
    fn test_format_currency_non_finite() {
        assert_eq!(format_currency(f64::INFINITY), "inf");
        assert_eq!(format_currency(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_currency(f64::NAN), "nan");
        assert_eq!(format_currency(-f64::NAN), "nan");
    }

    #[test]
    fn test_render_summary_template() {
        let result = RunResult {
            total_sales: 2_481.86,
            elapsed_seconds: 0.001_234_567,
        };

        assert_eq!(
            render_summary(&result),
            "\n===== SALES SUMMARY =====\n\
             Total Sales: $2,481.86\n\
             Execution Time: 0.001235 seconds\n\
             =========================\n"
        );
    }

    #[test]
    fn test_print_summary_adds_line_terminator() {
        let mut output = Vec::new();
        print_summary("block\n", &mut output).unwrap();
        assert_eq!(output, b"block\n\n");
    }

    #[test]
    fn test_write_results_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_RESULTS_FILE);
        fs::write(&path, "previous run with a much longer body").unwrap();

        write_results(&path, "new body").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new body");
    }

    #[test]
    fn test_write_results_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join(DEFAULT_RESULTS_FILE);

        let result = write_results(&path, "body");
        assert!(matches!(result, Err(SalesError::ResultsWrite { .. })));
    }
}

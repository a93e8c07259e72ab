//! Avg-rating CLI - print grouped averages from CSV files
//!
//! ```bash
//! avg-rating --files products1.csv products2.csv --report average-rating
//! ```
//!
//! File names are resolved under `data/` in the current directory.
//! Set `RUST_LOG` (or pass `--verbose`) to see pipeline progress on stderr.

use clap::Parser;
use avg_rating::{build_report, ReportKind, ReportResult};

#[derive(Parser)]
#[command(name = "avg-rating")]
#[command(about = "Reports", long_about = None)]
struct Cli {
    /// CSV files to read from data/
    #[arg(long = "files", value_name = "NAME", num_args = 1.., required = true)]
    files: Vec<String>,

    /// Report name (available: average-rating)
    #[arg(long = "report", value_name = "NAME")]
    report: String,

    /// Log pipeline progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> ReportResult<()> {
    match ReportKind::from_name(&cli.report) {
        Some(kind) => {
            log::debug!("Report '{}' over {:?}", kind.name(), kind.columns());
            let table = build_report(&cli.files, kind.columns())?;
            println!("{}", table);
        }
        None => println!("No such report"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_multiple_files() {
        let cli = Cli::try_parse_from([
            "avg-rating",
            "--files",
            "a.csv",
            "b.csv",
            "--report",
            "average-rating",
        ])
        .unwrap();

        assert_eq!(cli.files, vec!["a.csv", "b.csv"]);
        assert_eq!(cli.report, "average-rating");
        assert!(!cli.verbose);
    }

    #[test]
    fn test_files_required() {
        assert!(Cli::try_parse_from(["avg-rating", "--report", "average-rating"]).is_err());
        assert!(Cli::try_parse_from(["avg-rating", "--files", "--report", "x"]).is_err());
    }

    #[test]
    fn test_report_required() {
        assert!(Cli::try_parse_from(["avg-rating", "--files", "a.csv"]).is_err());
    }

    #[test]
    fn test_unknown_report_is_not_an_error() {
        let cli = Cli::try_parse_from([
            "avg-rating",
            "--files",
            "missing.csv",
            "--report",
            "average-price",
        ])
        .unwrap();

        assert!(run(&cli).is_ok());
    }
}

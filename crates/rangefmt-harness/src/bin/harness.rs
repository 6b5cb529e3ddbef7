//! CLI entrypoint for the rangefmt conformance harness.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use rangefmt_harness::{
    ConformanceReport, FixtureSet, HarnessError, TestRunner, VerificationSummary,
};

/// Conformance tooling for rangefmt.
#[derive(Debug, Parser)]
#[command(name = "rangefmt-harness")]
#[command(about = "Conformance testing harness for rangefmt")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify the formatting engine against a fixture file.
    Verify {
        /// Fixture JSON file.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Output report path (JSON).
        #[arg(long)]
        report_json: Option<PathBuf>,
    },
    /// Format a single string with inline JSON arguments.
    Check {
        /// Format string.
        format: String,
        /// Arguments as a JSON array, e.g. '[{"int": 42}]'.
        #[arg(long, default_value = "[]")]
        args: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("harness error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, HarnessError> {
    match cli.command {
        Command::Verify {
            fixture,
            report,
            report_json,
        } => {
            let set = FixtureSet::load(&fixture)?;
            let results = TestRunner::new(set.campaign.clone()).run(&set);
            let summary = VerificationSummary::from_results(results);
            let all_passed = summary.all_passed();

            for r in summary.results.iter().filter(|r| !r.passed()) {
                eprintln!("FAIL {} ({})", r.case_name, r.spec_section);
                if let Some(diff) = &r.diff {
                    eprintln!("{diff}");
                }
            }
            println!(
                "{}: {} passed, {} failed of {}",
                set.campaign, summary.passed, summary.failed, summary.total
            );

            let conformance = ConformanceReport {
                title: format!("rangefmt conformance: {}", set.campaign),
                timestamp: format!("{:?}", std::time::SystemTime::now()),
                summary,
            };
            if let Some(path) = report {
                write_out(&path, &conformance.to_markdown())?;
            }
            if let Some(path) = report_json {
                write_out(&path, &conformance.to_json())?;
            }

            Ok(if all_passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Check { format, args } => {
            let args: Vec<rangefmt_harness::ArgValue> = serde_json::from_str(&args)?;
            let values: Vec<_> = args.iter().map(rangefmt_core::ToValue::to_value).collect();
            match rangefmt_core::vformat(&format, &values) {
                Ok(text) => {
                    println!("{text}");
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    eprintln!("{e}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

fn write_out(path: &PathBuf, contents: &str) -> Result<(), HarnessError> {
    fs::write(path, contents).map_err(|source| HarnessError::Io {
        path: path.display().to_string(),
        source,
    })
}

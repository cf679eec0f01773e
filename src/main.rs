//! Command line interface for the monthly payslip tool.

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use payslip_engine::error::PayslipError;
use payslip_engine::models::PayslipRequest;
use payslip_engine::processor::PayslipProcessor;
use payslip_engine::tax::load_tax_table;

/// Employee monthly payslip tool.
///
/// Computes gross monthly income, income tax, net income and
/// superannuation for each payslip request argument. With no request
/// arguments the tool starts an interactive prompt.
#[derive(Debug, Parser)]
#[command(name = "payslip")]
struct Cli {
    /// YAML file with a custom tax bracket table.
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Payslip requests in
    /// "<first_name>,<last_name>,<annual_salary>,<super_rate>%,<month>" form.
    requests: Vec<String>,
}

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let processor = match &cli.rules {
        Some(path) => {
            debug!("loading tax rules from {}", path.display());
            PayslipProcessor::with_table(load_tax_table(path)?)
        }
        None => PayslipProcessor::new(),
    };

    if cli.requests.is_empty() {
        run_interactive(&processor)?;
    } else {
        run_once(&processor, &cli.requests);
    }

    Ok(())
}

/// Processes each request argument in order. A failing argument is
/// reported with its index and never stops the remaining ones.
fn run_once(processor: &PayslipProcessor, requests: &[String]) {
    for (index, line) in requests.iter().enumerate() {
        match run_line(processor, line) {
            Ok(output) => println!("{output}"),
            Err(error) => {
                debug!(%error, argument = index, "request rejected");
                println!("(argument: {index}): {error}");
            }
        }
    }
}

/// Reads request lines from stdin until `exit` or end of input. Empty
/// lines are skipped; a rejected request prints its bare error message
/// and the loop continues.
fn run_interactive(processor: &PayslipProcessor) -> anyhow::Result<()> {
    println!("Employee Monthly Payslip Tool - Interactive Mode");
    println!("Request format: <first_name>,<last_name>,<annual_salary>,<super_rate>%,<month>");
    println!("For example: David,Rudd,60050,9%,March");
    println!();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" {
            break;
        }
        match run_line(processor, line) {
            Ok(output) => println!("{output}"),
            Err(error) => {
                debug!(%error, "request rejected");
                println!("{error}");
            }
        }
    }

    Ok(())
}

/// Parses and processes one request line into its display string.
fn run_line(processor: &PayslipProcessor, line: &str) -> Result<String, PayslipError> {
    let request: PayslipRequest = line.parse()?;
    let result = processor.process(&request)?;
    Ok(result.to_string())
}

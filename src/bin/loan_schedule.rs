//! Build repayment schedules for a CSV of loans, or for a single loan
//!
//! Outputs JSON schedules (default) or one CSV row per installment.
//! In batch mode loans that fail validation are skipped with a warning; a
//! single loan given on the command line must be valid or the run fails.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use log::{info, warn};
use rust_decimal::Decimal;
use serde::Serialize;

use loan_schedule::schedule::load_loans;
use loan_schedule::{build_schedules, LoanSchedule, LoanScheduleInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
}

#[derive(Debug, Parser)]
#[command(name = "loan_schedule", about = "Build loan repayment schedules and agreement dates")]
struct Args {
    /// CSV of loans (loan_id,principal,rate_pct,term_periods,disbursement_date)
    #[arg(short, long, conflicts_with_all = ["principal", "term", "disbursed"])]
    input: Option<PathBuf>,

    /// Principal of a single loan
    #[arg(long, requires_all = ["term", "disbursed"])]
    principal: Option<Decimal>,

    /// Interest in percent per monthly period
    #[arg(long, default_value = "0")]
    rate: Decimal,

    /// Number of monthly installments
    #[arg(long)]
    term: Option<u32>,

    /// Disbursement date (YYYY-MM-DD)
    #[arg(long)]
    disbursed: Option<NaiveDate>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Where the loans come from
#[derive(Debug, PartialEq)]
enum InputSource {
    Batch(PathBuf),
    Single(LoanScheduleInput),
}

/// One installment row in CSV output
#[derive(Debug, Serialize)]
struct InstallmentRow<'a> {
    loan_id: &'a str,
    period: u32,
    due_date: NaiveDate,
    amount: Decimal,
}

fn input_source(args: &Args) -> Result<InputSource> {
    if let Some(path) = &args.input {
        return Ok(InputSource::Batch(path.clone()));
    }
    match (args.principal, args.term, args.disbursed) {
        (Some(principal), Some(term), Some(disbursed)) => Ok(InputSource::Single(
            LoanScheduleInput::new(principal, args.rate, term, disbursed),
        )),
        _ => bail!("either --input or --principal/--term/--disbursed is required"),
    }
}

/// Build every schedule
///
/// With `skip_invalid`, failing loans are logged and left out. Otherwise the
/// first failure is returned.
fn collect_schedules(
    inputs: &[LoanScheduleInput],
    skip_invalid: bool,
) -> Result<Vec<LoanSchedule>> {
    let mut schedules = Vec::with_capacity(inputs.len());
    for (input, result) in inputs.iter().zip(build_schedules(inputs)) {
        let loan_id = input.loan_id.as_deref().unwrap_or("-");
        match result {
            Ok(schedule) => schedules.push(schedule),
            Err(e) if skip_invalid => warn!("Skipping loan {}: {}", loan_id, e),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("cannot build schedule for loan {}", loan_id));
            }
        }
    }
    Ok(schedules)
}

fn write_csv<W: Write>(writer: W, schedules: &[LoanSchedule]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for schedule in schedules {
        let loan_id = schedule.loan_id.as_deref().unwrap_or("");
        for entry in &schedule.entries {
            wtr.serialize(InstallmentRow {
                loan_id,
                period: entry.period_index,
                due_date: entry.due_date,
                amount: entry.period_amount,
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}

fn write_output<W: Write>(
    mut writer: W,
    format: OutputFormat,
    schedules: &[LoanSchedule],
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, schedules)?;
            writeln!(writer)?;
            writer.flush()?;
        }
        OutputFormat::Csv => write_csv(writer, schedules)?,
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let (inputs, skip_invalid) = match input_source(&args)? {
        InputSource::Batch(path) => {
            let loans = load_loans(&path)
                .with_context(|| format!("failed to load loans from {}", path.display()))?;
            (loans, true)
        }
        InputSource::Single(input) => (vec![input], false),
    };

    let schedules = collect_schedules(&inputs, skip_invalid)?;
    info!(
        "Built {} of {} schedules in {:?}",
        schedules.len(),
        inputs.len(),
        start.elapsed()
    );

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_output(BufWriter::new(file), args.format, &schedules)?;
            info!("Output written to {}", path.display());
        }
        None => write_output(io::stdout().lock(), args.format, &schedules)?,
    }
    Ok(())
}

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use staffpay::application::engine::{EngineConfig, SalaryEngine};
use staffpay::domain::ports::{RosterHandle, RosterSourceBox};
use staffpay::domain::staff::StaffId;
use staffpay::infrastructure::csv_file::CsvRosterSource;
use staffpay::infrastructure::in_memory::InMemoryRoster;
use staffpay::infrastructure::seed::SeedRosterSource;
use staffpay::interfaces::report::{SalaryReport, TotalSalaryReport};
use staffpay::logging::init_tracing;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Roster CSV file (optional). Without it the built-in sample roster is used.
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    /// Deepest supervisor chain a query may walk before it is rejected.
    #[arg(long, global = true, default_value_t = EngineConfig::default().max_depth)]
    max_depth: usize,

    /// Recompute subordinates on every visit instead of reusing them within a query.
    #[arg(long, global = true)]
    no_memo: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Salary of one staff member at a date
    Salary {
        id: StaffId,
        /// Reference date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Sum of all salaries at a date
    Total {
        /// Reference date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let source: RosterSourceBox = match cli.roster {
        Some(path) => Box::new(CsvRosterSource::new(path)),
        None => Box::new(SeedRosterSource::new()),
    };
    let records = source.load().await.into_diagnostic()?;
    let roster: RosterHandle = Arc::new(InMemoryRoster::from_records(records).into_diagnostic()?);

    let engine = SalaryEngine::with_config(
        roster,
        EngineConfig {
            memoize: !cli.no_memo,
            max_depth: cli.max_depth,
        },
    );

    match cli.command {
        Command::Salary { id, date } => {
            let date = date.unwrap_or_else(today);
            let salary = engine.compute_salary(id, date).into_diagnostic()?;
            print_json(&SalaryReport { id, salary, date })
        }
        Command::Total { date } => {
            let date = date.unwrap_or_else(today);
            let total = engine.compute_total_salary(date).into_diagnostic()?;
            print_json(&TotalSalaryReport { total, date })
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn print_json<T: Serialize>(report: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer(&mut out, report).into_diagnostic()?;
    writeln!(out).into_diagnostic()?;
    Ok(())
}

use std::fs::File;
use std::io::{stderr, stdout, BufReader, BufWriter, Write};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use clap::Parser;

use vat_transaction_importer::config::{Config, RatesFormat};
use vat_transaction_importer::engine::{ImportOutcome, ImportRequest, TransactionEngine};
use vat_transaction_importer::models::Transaction;
use vat_transaction_importer::rates::{ecb, ExchangeRateSnapshot};
use vat_transaction_importer::storage::TransactionStorage;

const EXIT_USAGE: i32 = 1;
const EXIT_IMPORT_REJECTED: i32 = 2;

#[derive(Serialize)]
struct Report {
    import: ImportOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    transactions: Option<Vec<Transaction>>
}

fn main() -> Result<()> {
    //NOTE: clap exits with 2 on usage errors, which is reserved for a rejected import
    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(error) if error.use_stderr() => {
            let _ = error.print();
            exit(EXIT_USAGE);
        }
        Err(error) => error.exit()
    };

    setup_logging(config.log_level);

    let rates = Arc::new(load_rates(&config)?);
    info!("Loaded [{}] exchange rate(s) from {}", rates.len(), config.rates_path);

    let storage = Arc::new(TransactionStorage::new());
    let engine = TransactionEngine::new(storage, rates);

    let request = ImportRequest {
        transaction_data: read_rows(&config.transactions_path)?,
        ignore_first_row: config.ignore_first_row,
        ignore_errors: config.ignore_errors
    };

    let timer = Instant::now();
    let outcome = engine.import(&request)?;
    info!("Imported transactions in: {:?}", timer.elapsed());

    //NOTE: An invalid query is reported on stderr but does not hide the import report
    let transactions = match config.query() {
        Some(query) => match engine.query(&query) {
            Ok(transactions) => Some(transactions),
            Err(error) => {
                eprintln!("{error}");
                None
            }
        },
        None => None
    };

    let rejected = !outcome.success;

    write_report_to_stdout(&Report { import: outcome, transactions })?;

    if rejected {
        exit(EXIT_IMPORT_REJECTED);
    }

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the JSON report, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn load_rates(config: &Config) -> Result<ExchangeRateSnapshot> {
    let file = File::open(&config.rates_path)
        .with_context(|| format!("Error opening exchange rates at path: {}", config.rates_path))?;
    let reader = BufReader::new(file);

    let snapshot = match config.rates_format() {
        RatesFormat::Snapshot => ExchangeRateSnapshot::from_json_reader(reader)?,
        RatesFormat::Ecb => ecb::from_reader(reader)?
    };

    Ok(snapshot)
}

/// Reads every CSV record as a raw row. Header handling is left to the import itself.
fn read_rows(path: &str) -> Result<Vec<Vec<String>>> {
    let file = File::open(path).with_context(|| format!("Error opening CSV at path: {path}"))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result.with_context(|| format!("CSV read error in {path}"))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(rows)
}

fn write_report_to_stdout(report: &Report) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    serde_json::to_writer_pretty(&mut output, report)?;
    writeln!(output)?;

    output.flush()?;

    Ok(())
}

use clap::Parser;
use dummy3ds::application::engine::{CheckoutEngine, EngineConfig};
use dummy3ds::domain::ports::PaymentStoreBox;
use dummy3ds::infrastructure::in_memory::InMemoryPaymentStore;
use dummy3ds::interfaces::csv::report_writer::{ReportFormat, ReportWriter};
use dummy3ds::interfaces::csv::step_reader::StepReader;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use url::Url;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input checkout steps CSV file
    input: PathBuf,

    /// Shop URL the process, success and failure URLs are built from
    #[arg(long, default_value = "http://localhost:8000/")]
    base_url: Url,

    /// Currency of payments created on first use
    #[arg(long, default_value = "USD")]
    currency: String,

    /// Total of payments created on first use
    #[arg(long, default_value = "100")]
    total: Decimal,

    /// Output format for step reports
    #[arg(long, value_enum, default_value_t = ReportFormat::Csv)]
    format: ReportFormat,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let config = EngineConfig {
        base_url: cli.base_url,
        currency: cli.currency,
        total: cli.total,
    };
    info!(base_url = %config.base_url, "Starting checkout run");

    let store: PaymentStoreBox = Box::new(InMemoryPaymentStore::new());
    let engine = CheckoutEngine::new(store, config);

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = StepReader::new(file);
    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock(), cli.format);

    for (row, step_result) in reader.steps().enumerate() {
        match step_result {
            Ok(step) => match engine.process_step(step).await {
                Ok(report) => writer.write_report(&report).into_diagnostic()?,
                Err(e) => warn!(row = row + 1, "Error processing step: {}", e),
            },
            Err(e) => warn!(row = row + 1, "Error reading step: {}", e),
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}

//! Scan command implementation

use crate::batch::BatchAnalyzer;
use crate::config::Config;
use crate::data::{load_dataset, SignalsDatabase};
use crate::telemetry::{record_outcome, ScanOutcome};
use anyhow::Context;
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Organized dataset to read (overrides config)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Signals database to update (overrides config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Analyze without writing the signals database
    #[arg(long)]
    pub dry_run: bool,
}

impl ScanArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let input = self.input.as_ref().unwrap_or(&config.data.input_path);
        let output = self.output.as_ref().unwrap_or(&config.data.signals_path);

        let data = load_dataset(input)
            .with_context(|| format!("Failed to load stock data from {}", input.display()))?;
        if data.is_empty() {
            anyhow::bail!("No stock data available in {}", input.display());
        }
        for rejected in &data.rejected {
            tracing::error!(symbol = %rejected.symbol, error = %rejected.error, "Error loading instrument");
            record_outcome(ScanOutcome::Failed);
        }

        let now = Utc::now();
        let analyzer = BatchAnalyzer::new(config.engine, config.data.max_concurrent);
        let mut report = analyzer.run(data.instruments, now.date_naive()).await;
        report
            .failed
            .extend(data.rejected.into_iter().map(|r| r.symbol));
        report.log_summary();

        if self.dry_run {
            tracing::info!("Dry run, signals database not written");
            return Ok(());
        }

        let mut database = SignalsDatabase::load(output);
        database.apply_report(&report, now, config.data.history_limit);
        database
            .save(output)
            .with_context(|| format!("Failed to save signals database to {}", output.display()))?;

        Ok(())
    }
}

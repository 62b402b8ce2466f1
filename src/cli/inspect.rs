//! Inspect command implementation

use crate::config::Config;
use crate::data::{group_by_symbol, read_records};
use crate::signal::{analyze, diagnose};
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Instrument symbol
    #[arg(short, long)]
    pub symbol: String,

    /// Organized dataset to read (overrides config)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

impl InspectArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let input = self.input.as_ref().unwrap_or(&config.data.input_path);
        let records = read_records(input)
            .with_context(|| format!("Failed to load stock data from {}", input.display()))?;

        let symbol = self.symbol.trim();
        let mut data = group_by_symbol(
            records
                .into_iter()
                .filter(|r| r.symbol.as_deref().map(str::trim) == Some(symbol))
                .collect(),
        );
        if let Some(rejected) = data.rejected.pop() {
            return Err(rejected.error).context(format!("Malformed history for {}", symbol));
        }
        let bars = data
            .instruments
            .remove(symbol)
            .with_context(|| format!("No history for {}", symbol))?;

        let verdict = analyze(&bars, &config.engine);
        let diagnostics = diagnose(&bars, &config.engine);

        let output = serde_json::json!({
            "symbol": symbol,
            "verdict": verdict,
            "diagnostics": diagnostics,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}

//! Status command implementation

use crate::config::Config;
use crate::data::SignalsDatabase;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Signals database to read (overrides config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl StatusArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let path = self.output.as_ref().unwrap_or(&config.data.signals_path);
        let database = SignalsDatabase::try_load(path)
            .with_context(|| format!("Failed to read signals database {}", path.display()))?;

        println!("pivot-signals status");
        match database.last_updated {
            Some(ts) => println!("  Last updated: {}", ts.to_rfc3339()),
            None => println!("  Last updated: never"),
        }
        println!("  BUY signals: {}", database.current_buy_signals.len());
        for record in &database.current_buy_signals {
            println!(
                "    - {}: {} (RSI: {}/{})",
                record.symbol,
                record.price,
                record.details.rsi_fast(),
                record.details.rsi_slow()
            );
        }
        println!("  SELL signals: {}", database.current_sell_signals.len());
        for record in &database.current_sell_signals {
            println!(
                "    - {}: {} (RSI: {}/{})",
                record.symbol,
                record.price,
                record.details.rsi_fast(),
                record.details.rsi_slow()
            );
        }
        println!("  History entries: {}", database.signal_history.len());
        for entry in database.signal_history.iter().rev().take(5) {
            println!(
                "    {}: {} buy, {} sell",
                entry.date, entry.buy_count, entry.sell_count
            );
        }
        Ok(())
    }
}

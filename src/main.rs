use clap::Parser;
use pivot_signals::cli::{Cli, Commands};
use pivot_signals::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    let telemetry = pivot_signals::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Scan(args) => {
            tracing::info!("Starting signal scan");
            args.execute(&config).await?;
            telemetry.flush()?;
        }
        Commands::Inspect(args) => {
            args.execute(&config).await?;
        }
        Commands::Status(args) => {
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Engine: RSI fast={} slow={}, pivot lookback={}, min distance={}",
                config.engine.rsi_fast_period,
                config.engine.rsi_slow_period,
                config.engine.pivot_lookback,
                config.engine.min_pivot_distance
            );
            println!("  Minimum bars: {}", config.engine.minimum_bars());
            println!("  Input: {}", config.data.input_path.display());
            println!(
                "  Signals: {} (history {})",
                config.data.signals_path.display(),
                config.data.history_limit
            );
            println!("  Concurrency: {}", config.data.max_concurrent);
            println!(
                "  Logging: {} {:?}",
                config.telemetry.log_level, config.telemetry.log_format
            );
        }
    }

    Ok(())
}

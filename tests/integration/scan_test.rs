//! End-to-end scan against files on disk

use crate::fixtures::{breakdown, breakout, day, rising, to_records};
use pivot_signals::batch::BatchAnalyzer;
use pivot_signals::cli::ScanArgs;
use pivot_signals::config::{Config, EngineConfig};
use pivot_signals::data::{load_dataset, SignalsDatabase};
use pivot_signals::signal::SignalKind;
use std::path::Path;

fn write_dataset(path: &Path) {
    let mut records = Vec::new();
    records.extend(to_records("NABIL", &breakout()));
    records.extend(to_records("UPPER", &breakdown()));
    // Newest first, the engine sorts
    let mut newest_first = to_records("HIDCL", &rising(90));
    newest_first.reverse();
    records.extend(newest_first);
    // One malformed row rejects the whole symbol
    let mut broken = to_records("BROKEN", &breakout());
    broken[3]["close"] = serde_json::json!("n/a");
    records.extend(broken);

    std::fs::write(path, serde_json::to_string(&records).unwrap()).unwrap();
}

#[tokio::test]
async fn test_loaded_dataset_through_batch() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("organized.json");
    write_dataset(&input);

    let data = load_dataset(&input).unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data.rejected.len(), 1);
    assert_eq!(data.rejected[0].symbol, "BROKEN");

    let report = BatchAnalyzer::new(EngineConfig::default(), 4)
        .run(data.instruments, day(70))
        .await;

    assert_eq!(report.buy_signals.len(), 1);
    assert_eq!(report.buy_signals[0].symbol, "NABIL");
    assert_eq!(report.sell_signals.len(), 1);
    assert_eq!(report.sell_signals[0].signal, SignalKind::Sell);
    assert_eq!(report.neutral, vec!["HIDCL".to_string()]);
}

#[tokio::test]
async fn test_scan_command_writes_database() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("organized.json");
    let output = dir.path().join("public").join("signals-database.json");
    write_dataset(&input);

    let mut config = Config::default();
    config.data.input_path = input.clone();
    config.data.signals_path = output.clone();
    config.data.history_limit = 2;

    let args = ScanArgs {
        input: None,
        output: None,
        dry_run: false,
    };
    for _ in 0..3 {
        args.execute(&config).await.unwrap();
    }

    let database = SignalsDatabase::try_load(&output).unwrap();
    assert!(database.last_updated.is_some());
    assert_eq!(database.current_buy_signals.len(), 1);
    assert_eq!(database.current_buy_signals[0].symbol, "NABIL");
    assert_eq!(database.current_sell_signals[0].symbol, "UPPER");
    assert_eq!(database.signal_history.len(), 2);
    assert_eq!(database.signal_history[1].buy_count, 1);
}

#[tokio::test]
async fn test_scan_dry_run_leaves_database_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("organized.json");
    let output = dir.path().join("signals-database.json");
    write_dataset(&input);

    let args = ScanArgs {
        input: Some(input),
        output: Some(output.clone()),
        dry_run: true,
    };
    args.execute(&Config::default()).await.unwrap();

    assert!(!output.exists());
}

#[tokio::test]
async fn test_scan_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let args = ScanArgs {
        input: Some(dir.path().join("absent.json")),
        output: Some(dir.path().join("signals.json")),
        dry_run: false,
    };
    assert!(args.execute(&Config::default()).await.is_err());
}

//! Engine behaviour through the public API

use crate::fixtures::{breakdown, breakout, rising};
use pivot_signals::config::EngineConfig;
use pivot_signals::pivot::{detect_highs, detect_lows, filter_by_distance};
use pivot_signals::signal::{analyze, SignalDetails, SignalKind};
use pivot_signals::trendline::project;
use rust_decimal_macros::dec;

#[test]
fn test_buy_on_descending_trendline_break() {
    let verdict = analyze(&breakout(), &EngineConfig::default());

    assert_eq!(verdict.signal, SignalKind::Buy);
    assert_eq!(verdict.price, Some(dec!(95)));

    let json = serde_json::to_value(&verdict).unwrap();
    assert_eq!(json["signal"], "BUY");
    assert_eq!(json["date"], "2024-03-10");
    assert_eq!(json["details"]["downtrendPrice"], "90.20");
    assert_eq!(json["details"]["breakoutStrength"], "5.32");
}

#[test]
fn test_sell_on_ascending_trendline_break() {
    let verdict = analyze(&breakdown(), &EngineConfig::default());

    assert_eq!(verdict.signal, SignalKind::Sell);
    match verdict.details {
        Some(SignalDetails::Breakdown {
            breakdown_strength, ..
        }) => assert!(breakdown_strength.unwrap() > dec!(0)),
        other => panic!("expected breakdown details, got {:?}", other),
    }
}

#[test]
fn test_short_history_has_no_opinion() {
    let config = EngineConfig::default();
    for len in [0, 1, 30, config.minimum_bars() - 1] {
        let verdict = analyze(&rising(len), &config);
        assert_eq!(verdict.signal, SignalKind::InsufficientData, "len {}", len);
    }
}

#[test]
fn test_rising_history_never_sells() {
    let verdict = analyze(&rising(120), &EngineConfig::default());
    assert_eq!(verdict.signal, SignalKind::Neutral);
}

#[test]
fn test_custom_config_changes_window() {
    // With a slow period of 80 the 70-bar breakout history is too short
    let config = EngineConfig {
        rsi_slow_period: 80,
        ..EngineConfig::default()
    };
    assert_eq!(analyze(&breakout(), &config).signal, SignalKind::InsufficientData);
}

#[test]
fn test_pivot_pipeline_on_fixture() {
    let bars = breakout();
    let highs = filter_by_distance(&detect_highs(&bars, 5), 10);
    assert_eq!(highs.iter().map(|p| p.index).collect::<Vec<_>>(), vec![20, 40]);
    assert!(detect_lows(&bars, 5).is_empty());

    let projected = project(highs[0].index, highs[0].price, highs[1].index, highs[1].price, 69);
    assert_eq!(projected, dec!(90.2));
}

//! Concurrent analysis of every tracked instrument

use super::types::BatchReport;
use crate::config::EngineConfig;
use crate::data::Bar;
use crate::signal::{analyze, SignalVerdict};
use crate::telemetry::{record_analysis, record_outcome, record_scan, ScanOutcome};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

const PROGRESS_EVERY: usize = 50;

/// Runs the signal engine over many instruments
///
/// Instruments are independent, so each one is analyzed on the blocking pool
/// with at most `max_concurrent` in flight. A panicking analysis is logged
/// and counted as failed without affecting the others.
pub struct BatchAnalyzer {
    config: EngineConfig,
    max_concurrent: usize,
}

impl BatchAnalyzer {
    /// Create a new batch analyzer
    pub fn new(config: EngineConfig, max_concurrent: usize) -> Self {
        Self {
            config,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Analyze every instrument and collect the verdicts
    pub async fn run(
        &self,
        instruments: BTreeMap<String, Vec<Bar>>,
        generated_on: NaiveDate,
    ) -> BatchReport {
        let started = Instant::now();
        let total = instruments.len();
        tracing::info!(instruments = total, "Starting signal analysis");

        let permits = Arc::new(Semaphore::new(self.max_concurrent));
        let mut tasks: JoinSet<SignalVerdict> = JoinSet::new();
        let mut symbols = HashMap::with_capacity(total);

        for (symbol, bars) in instruments {
            let Ok(permit) = permits.clone().acquire_owned().await else {
                break;
            };
            let config = self.config;
            let handle = tasks.spawn_blocking(move || {
                let _permit = permit;
                let started = Instant::now();
                let verdict = analyze(&bars, &config);
                record_analysis(started.elapsed());
                verdict
            });
            symbols.insert(handle.id(), symbol);
        }

        let mut report = BatchReport::default();
        let mut completed = 0;
        while let Some(joined) = tasks.join_next_with_id().await {
            match joined {
                Ok((id, verdict)) => {
                    let symbol = symbols.remove(&id).unwrap_or_default();
                    tracing::debug!(%symbol, signal = %verdict.signal, "Analyzed");
                    record_outcome(ScanOutcome::Signal(verdict.signal));
                    report.record(symbol, verdict, generated_on);
                }
                Err(e) => {
                    let symbol = symbols.remove(&e.id()).unwrap_or_default();
                    tracing::error!(%symbol, error = %e, "Error analyzing instrument");
                    record_outcome(ScanOutcome::Failed);
                    report.failed.push(symbol);
                }
            }

            completed += 1;
            if completed % PROGRESS_EVERY == 0 {
                tracing::info!(completed, total, "Processed {}/{} instruments", completed, total);
            }
        }

        report.sort();
        report.elapsed = started.elapsed();
        record_scan(report.elapsed);
        report
    }
}

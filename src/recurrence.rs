//! ═══════════════════════════════════════════════════════════════════════════════
//! RECURRENCE — Windowed Recurrence Quantification
//! ═══════════════════════════════════════════════════════════════════════════════
//!
//! Per window, every delay-offset sample pair `(w[m], w[m+delay])` is scanned
//! along diagonals of the (never materialized) recurrence matrix: row `j`
//! walks `k` over the remaining pairs, closing a diagonal run whenever the
//! pair distance climbs above the threshold and at the end of the row.
//!
//! - recurrence rate: sub-threshold pairs over `(window − delay)²`
//! - determinism: total run length over the recurrence count
//! - entropy: `−Σ p·log₂ p` over the raw run lengths (`p = len / Σ lengths`);
//!   repeated lengths contribute one term each, deliberately not bucketed
//!   into a histogram
//!
//! O(window²) per window; deterministic, no randomness anywhere.
//! ═══════════════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};

use crate::config::StabilityConfig;
use crate::error::StabilityResult;
use crate::series::SignalSeries;

/// Recurrence metrics for one window. One per window, independent of noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurrenceRecord {
    /// Start time of the window
    pub time: f64,
    /// Sub-threshold pair fraction, in [0, 1]
    pub recurrence_rate: f64,
    /// Total diagonal-run length per recurrence, ≥ 0
    pub determinism: f64,
    /// Diagonal-run length entropy in bits, ≥ 0; 0 when no runs exist
    pub entropy: f64,
}

/// Run the recurrence sweep over the series
pub fn analyze_recurrence(
    series: &SignalSeries,
    config: &StabilityConfig,
) -> StabilityResult<Vec<RecurrenceRecord>> {
    config.validate()?;
    series.ensure_window(config.window_size)?;

    let times = series.times();
    let values = series.values();
    let window = config.window_size;
    let delay = config.embedding_delay;
    let n = window - delay;

    let mut records = Vec::new();
    for i in series.window_starts(window, config.stride()) {
        let w = &values[i..i + window];

        let mut recurrences = 0usize;
        let mut run_lengths: Vec<usize> = Vec::new();
        for j in 0..n {
            let mut run = 0usize;
            for k in 0..n - j {
                let dist = (w[j + k] - w[j + k + delay]).abs();
                if dist < config.recurrence_threshold {
                    recurrences += 1;
                    run += 1;
                } else if run > 0 {
                    run_lengths.push(run);
                    run = 0;
                }
            }
            if run > 0 {
                run_lengths.push(run);
            }
        }

        records.push(RecurrenceRecord {
            time: times[i],
            recurrence_rate: recurrences as f64 / (n * n) as f64,
            determinism: run_lengths.iter().sum::<usize>() as f64 / recurrences.max(1) as f64,
            entropy: run_entropy(&run_lengths),
        });
    }

    Ok(records)
}

/// Shannon entropy (bits) of the raw run-length distribution
fn run_entropy(run_lengths: &[usize]) -> f64 {
    if run_lengths.is_empty() {
        return 0.0;
    }
    let total: usize = run_lengths.iter().sum();
    -run_lengths
        .iter()
        .map(|&len| {
            let p = len as f64 / total as f64;
            p * p.log2()
        })
        .sum::<f64>()
}

//! ═══════════════════════════════════════════════════════════════════════════════
//! PERTURBATION — Noise-Injection Robustness Sweep
//! ═══════════════════════════════════════════════════════════════════════════════
//!
//! For each noise amplitude the whole series is perturbed once, then scanned
//! in overlapping windows. Per window:
//!
//! - phase coherence `exp(−Σ|Δφ| / window)` between original and perturbed
//!   local slope phases (1 = perturbation left the local dynamics untouched)
//! - amplitude stability `1 − Σ||pert| − |orig|| / window`
//!
//! Stability transitions are tracked with hysteresis at the coherence cutoff:
//! a stable window dropping below it flips the level to unstable and records
//! the flip time; an unstable window climbing back records a recovery time.
//! The breakdown threshold and recovery list are shared across the whole
//! sweep, folded level by level in configured order.
//! ═══════════════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};

use crate::config::StabilityConfig;
use crate::error::StabilityResult;
use crate::noise::NoiseSource;
use crate::phase::slope_phase;
use crate::series::SignalSeries;

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDS
// ═══════════════════════════════════════════════════════════════════════════════

/// One window of one noise level. Immutable once emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerturbationRecord {
    /// Start time of the window
    pub time: f64,
    /// Noise amplitude of this sweep pass
    pub noise_level: f64,
    /// `exp(−Σ|Δφ| / window)`, strictly in (0, 1]
    pub phase_coherence: f64,
    /// `1 − (accumulated amplitude deviation) / window`
    pub amplitude_stability: f64,
    /// Stability state after processing this window
    pub is_stable: bool,
}

// ═══════════════════════════════════════════════════════════════════════════════
// SWEEP ACCUMULATOR — State Shared Across Noise Levels
// ═══════════════════════════════════════════════════════════════════════════════

/// Breakdown/recovery bookkeeping threaded through every noise-level pass.
/// Explicitly sequential: the breakdown threshold is a running minimum whose
/// observed value depends on the configured level order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepAccumulator {
    /// Lowest noise amplitude observed to break stability, if any did
    pub breakdown_threshold: Option<f64>,
    /// Elapsed time of every unstable→stable recovery, across all levels
    pub recovery_times: Vec<f64>,
}

impl SweepAccumulator {
    fn note_breakdown(&mut self, noise_level: f64) {
        if self.breakdown_threshold.map_or(true, |cur| noise_level < cur) {
            self.breakdown_threshold = Some(noise_level);
        }
    }

    fn note_recovery(&mut self, elapsed: f64) {
        self.recovery_times.push(elapsed);
    }

    /// Average recovery time, `None` if nothing ever recovered
    pub fn mean_recovery_time(&self) -> Option<f64> {
        if self.recovery_times.is_empty() {
            return None;
        }
        Some(self.recovery_times.iter().sum::<f64>() / self.recovery_times.len() as f64)
    }
}

/// Per-level transition state. Fresh for every noise level; starts stable.
#[derive(Debug, Clone)]
struct LevelState {
    is_stable: bool,
    last_stable_time: f64,
}

impl LevelState {
    fn new() -> Self {
        Self {
            is_stable: true,
            last_stable_time: 0.0,
        }
    }

    /// Fold one window's coherence into the transition state.
    /// Ties at the threshold count as stable (hysteresis favors stability).
    fn track(
        &mut self,
        acc: &mut SweepAccumulator,
        coherence: f64,
        threshold: f64,
        noise_level: f64,
        time: f64,
    ) -> bool {
        if coherence < threshold && self.is_stable {
            self.is_stable = false;
            self.last_stable_time = time;
            acc.note_breakdown(noise_level);
        } else if coherence >= threshold && !self.is_stable {
            self.is_stable = true;
            acc.note_recovery(time - self.last_stable_time);
        }
        self.is_stable
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SWEEP
// ═══════════════════════════════════════════════════════════════════════════════

/// Full output of the perturbation analyzer: records grouped by noise level
/// in configured order, windows ascending within each level, plus the shared
/// breakdown/recovery accumulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerturbationSweep {
    pub records: Vec<PerturbationRecord>,
    pub accumulator: SweepAccumulator,
}

/// Run the noise sweep over the series.
///
/// Stochastic: two runs agree only if `noise` is a seeded source.
pub fn analyze_perturbation(
    series: &SignalSeries,
    config: &StabilityConfig,
    noise: &mut dyn NoiseSource,
) -> StabilityResult<PerturbationSweep> {
    config.validate()?;
    series.ensure_window(config.window_size)?;

    let mut records = Vec::new();
    let mut accumulator = SweepAccumulator::default();
    for &level in &config.noise_levels {
        noise_level_pass(series, config, level, noise, &mut accumulator, &mut records);
    }

    Ok(PerturbationSweep {
        records,
        accumulator,
    })
}

/// One pass of the sweep: perturb the whole series at `level`, scan windows,
/// fold transitions into the shared accumulator
fn noise_level_pass(
    series: &SignalSeries,
    config: &StabilityConfig,
    level: f64,
    noise: &mut dyn NoiseSource,
    acc: &mut SweepAccumulator,
    records: &mut Vec<PerturbationRecord>,
) {
    let times = series.times();
    let values = series.values();
    let window = config.window_size;

    // One independent draw per sample, over the full series: overlapping
    // windows must see the same perturbed values.
    let perturbed: Vec<f64> = values.iter().map(|&v| v + noise.symmetric(level)).collect();

    let mut state = LevelState::new();
    for i in series.window_starts(window, config.stride()) {
        let mut phase_diff = 0.0;
        let mut amplitude_deviation = 0.0;
        for j in i + 1..i + window {
            let orig_phase = slope_phase(values[j - 1], values[j]);
            let pert_phase = slope_phase(perturbed[j - 1], perturbed[j]);
            phase_diff += (orig_phase - pert_phase).abs();
            amplitude_deviation += (perturbed[j].abs() - values[j].abs()).abs();
        }

        let coherence = (-phase_diff / window as f64).exp();
        let amplitude_stability = 1.0 - amplitude_deviation / window as f64;
        let is_stable = state.track(acc, coherence, config.coherence_threshold, level, times[i]);

        records.push(PerturbationRecord {
            time: times[i],
            noise_level: level,
            phase_coherence: coherence,
            amplitude_stability,
            is_stable,
        });
    }
}

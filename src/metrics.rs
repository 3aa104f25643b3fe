//! ═══════════════════════════════════════════════════════════════════════════════
//! METRICS — Summary Reduction Over the Three Sweeps
//! ═══════════════════════════════════════════════════════════════════════════════
//! Pure reduction, recomputed fully on every run. Fields derived from an
//! analyzer that did not run are simply omitted (None / NaN).
//! ═══════════════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};

use crate::coupling::CouplingRecord;
use crate::perturbation::SweepAccumulator;

/// One summary record per analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityMetrics {
    /// Lowest noise amplitude (in configured sweep order) that ever broke
    /// phase coherence; None if the signal never destabilized or the
    /// perturbation sweep did not run
    pub breakdown_threshold: Option<f64>,
    /// Mean unstable→stable recovery time; None if nothing ever recovered
    pub mean_recovery_time: Option<f64>,
    /// Mean phase-locking ratio over all coupling windows; NaN if no
    /// coupling records exist
    pub mean_phase_locking: f64,
}

/// Reduce sweep outputs into the summary record
pub fn aggregate(sweep: Option<&SweepAccumulator>, coupling: &[CouplingRecord]) -> StabilityMetrics {
    let (breakdown_threshold, mean_recovery_time) = match sweep {
        Some(acc) => (acc.breakdown_threshold, acc.mean_recovery_time()),
        None => (None, None),
    };

    let mean_phase_locking = if coupling.is_empty() {
        f64::NAN
    } else {
        coupling.iter().map(|r| r.phase_locking_ratio).sum::<f64>() / coupling.len() as f64
    };

    StabilityMetrics {
        breakdown_threshold,
        mean_recovery_time,
        mean_phase_locking,
    }
}

//! ═══════════════════════════════════════════════════════════════════════════════
//! RESONANT STABILITY — Signal-Stability Analysis Engine
//! ═══════════════════════════════════════════════════════════════════════════════
//!
//! Takes a single sampled time series and produces three independent
//! diagnostic sweeps plus a summary record:
//!
//! 1. **Perturbation** — robustness to injected noise: windowed phase
//!    coherence and amplitude stability across a noise-amplitude sweep, with
//!    stable → unstable → recovered transition tracking.
//! 2. **Recurrence** — structural determinism of the dynamics: windowed
//!    recurrence rate, determinism, and diagonal-run entropy via time-delay
//!    embedding.
//! 3. **Coupling** — response to a growing external forcing: phase locking
//!    and energy ratio per window.
//!
//! Loading the series (CSV or otherwise) and rendering the results are the
//! callers' concern: the engine takes a validated [`SignalSeries`] and hands
//! back plain data.
//! ═══════════════════════════════════════════════════════════════════════════════

// Intentional style choices for scientific code:
#![allow(clippy::needless_range_loop)] // Indexed loops clearer for window math

// ═══════════════════════════════════════════════════════════════════════════════
// FOUNDATION MODULES — input contract, configuration, shared primitives
// ═══════════════════════════════════════════════════════════════════════════════

pub mod config;
pub mod error;
pub mod noise;
pub mod phase;
pub mod series;

// ═══════════════════════════════════════════════════════════════════════════════
// ANALYZERS — the three independent sweeps
// ═══════════════════════════════════════════════════════════════════════════════

pub mod coupling;
pub mod perturbation;
pub mod recurrence;

// ═══════════════════════════════════════════════════════════════════════════════
// AGGREGATION & ORCHESTRATION
// ═══════════════════════════════════════════════════════════════════════════════

pub mod engine;
pub mod metrics;
pub mod report;

// Re-export common error types
pub use error::{ConfigError, MalformedInput, StabilityError, StabilityResult};

// Re-export core types
pub use config::{ForcingConfig, StabilityConfig};
pub use coupling::{analyze_coupling, CouplingRecord};
pub use engine::{StabilityEngine, StabilityReport};
pub use metrics::{aggregate, StabilityMetrics};
pub use noise::{NoiseSource, UniformNoise};
pub use perturbation::{
    analyze_perturbation, PerturbationRecord, PerturbationSweep, SweepAccumulator,
};
pub use phase::slope_phase;
pub use recurrence::{analyze_recurrence, RecurrenceRecord};
pub use report::print_report;
pub use series::SignalSeries;

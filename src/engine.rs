//! ═══════════════════════════════════════════════════════════════════════════════
//! ENGINE — Orchestrates the Three Diagnostic Sweeps
//! ═══════════════════════════════════════════════════════════════════════════════
//!
//! Validates the input once (fatal, no partial results), then runs the
//! perturbation, recurrence, and coupling analyzers as independent failure
//! domains over the same immutable series, and reduces whatever succeeded
//! into summary metrics. The only per-analyzer failure mode is a missing
//! noise source, which disables the perturbation sweep alone.
//! ═══════════════════════════════════════════════════════════════════════════════

use crate::config::StabilityConfig;
use crate::coupling::{analyze_coupling, CouplingRecord};
use crate::error::{StabilityError, StabilityResult};
use crate::metrics::{aggregate, StabilityMetrics};
use crate::noise::NoiseSource;
use crate::perturbation::{analyze_perturbation, PerturbationSweep};
use crate::recurrence::{analyze_recurrence, RecurrenceRecord};
use crate::series::SignalSeries;

/// Everything one analysis run produces, handed to the presentation layer
/// as plain data
#[derive(Debug, Clone)]
pub struct StabilityReport {
    /// Noise sweep, or the error that kept it from running
    pub perturbation: Result<PerturbationSweep, StabilityError>,
    pub recurrence: Vec<RecurrenceRecord>,
    pub coupling: Vec<CouplingRecord>,
    pub metrics: StabilityMetrics,
}

/// The orchestrator: one validated configuration, any number of runs
#[derive(Debug, Clone)]
pub struct StabilityEngine {
    config: StabilityConfig,
}

impl StabilityEngine {
    /// Build an engine, rejecting an inconsistent configuration up front
    pub fn new(config: StabilityConfig) -> StabilityResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Engine with the reference defaults
    pub fn with_defaults() -> Self {
        Self {
            config: StabilityConfig::default(),
        }
    }

    pub fn config(&self) -> &StabilityConfig {
        &self.config
    }

    /// Run all three sweeps over the series.
    ///
    /// Fails fast with `MalformedInput` before emitting anything. With
    /// `noise: None` the perturbation sweep is reported as
    /// `Err(RandomSourceUnavailable)` while recurrence and coupling still run
    /// and the metrics omit the perturbation-derived fields.
    pub fn analyze(
        &self,
        series: &SignalSeries,
        noise: Option<&mut dyn NoiseSource>,
    ) -> StabilityResult<StabilityReport> {
        series.ensure_window(self.config.window_size)?;

        let perturbation = match noise {
            Some(source) => analyze_perturbation(series, &self.config, source),
            None => Err(StabilityError::RandomSourceUnavailable),
        };
        let recurrence = analyze_recurrence(series, &self.config)?;
        let coupling = analyze_coupling(series, &self.config)?;

        let metrics = aggregate(
            perturbation.as_ref().ok().map(|sweep| &sweep.accumulator),
            &coupling,
        );

        Ok(StabilityReport {
            perturbation,
            recurrence,
            coupling,
            metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StabilityConfig;
    use crate::noise::UniformNoise;

    fn sine_series(n: usize) -> SignalSeries {
        SignalSeries::from_samples((0..n).map(|i| {
            let t = i as f64;
            (t, (t * 0.3).sin())
        }))
        .unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = StabilityConfig {
            window_size: 1,
            ..StabilityConfig::default()
        };
        assert!(StabilityEngine::new(config).is_err());
    }

    #[test]
    fn test_short_series_yields_no_records_at_all() {
        let engine = StabilityEngine::with_defaults();
        let series = sine_series(40);
        let mut noise = UniformNoise::seeded(1);
        let err = engine.analyze(&series, Some(&mut noise)).unwrap_err();
        assert!(matches!(err, StabilityError::MalformedInput(_)));
    }

    #[test]
    fn test_missing_noise_source_is_isolated() {
        let engine = StabilityEngine::with_defaults();
        let series = sine_series(200);

        let report = engine.analyze(&series, None).unwrap();
        assert_eq!(
            report.perturbation.unwrap_err(),
            StabilityError::RandomSourceUnavailable
        );
        assert_eq!(report.recurrence.len(), 13);
        assert_eq!(report.coupling.len(), 13);
        assert_eq!(report.metrics.breakdown_threshold, None);
        assert_eq!(report.metrics.mean_recovery_time, None);
        assert!(report.metrics.mean_phase_locking.is_finite());
    }

    #[test]
    fn test_full_run_counts() {
        let engine = StabilityEngine::with_defaults();
        let series = sine_series(200);
        let mut noise = UniformNoise::seeded(5);

        let report = engine.analyze(&series, Some(&mut noise)).unwrap();
        let sweep = report.perturbation.unwrap();
        assert_eq!(sweep.records.len(), 5 * 13);
        assert_eq!(report.recurrence.len(), 13);
        assert_eq!(report.coupling.len(), 13);
    }
}

//! ═══════════════════════════════════════════════════════════════════════════════
//! CONFIG — Tunable Parameters for the Three Analysis Sweeps
//! ═══════════════════════════════════════════════════════════════════════════════
//!
//! Every knob of the engine is externally injectable here. Defaults reproduce
//! the reference model: window 50, noise sweep [0.05..0.7], coherence cutoff
//! 0.7, recurrence threshold 0.1, embedding delay 5, coupling ceiling 0.5.
//! ═══════════════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ═══════════════════════════════════════════════════════════════════════════════
// FORCING — Mixed Regular/Quasi-Chaotic Coupling Waveform
// ═══════════════════════════════════════════════════════════════════════════════

/// The externally injected forcing waveform used by the coupling analyzer:
/// one regular oscillation plus a product of two oscillations (a beat pattern
/// that never settles into a single period).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForcingConfig {
    /// Period of the regular component, in signal time units
    pub regular_period: f64,
    /// First period of the beat (product) component
    pub beat_period_a: f64,
    /// Second period of the beat component
    pub beat_period_b: f64,
    /// Weight of the regular component
    pub regular_weight: f64,
    /// Weight of the beat component
    pub chaotic_weight: f64,
}

impl Default for ForcingConfig {
    fn default() -> Self {
        Self {
            regular_period: 30.0,
            beat_period_a: 20.0,
            beat_period_b: 15.0,
            regular_weight: 0.7,
            chaotic_weight: 0.3,
        }
    }
}

impl ForcingConfig {
    /// Forcing amplitude at time `t` (before scaling by coupling strength)
    pub fn sample(&self, t: f64) -> f64 {
        use std::f64::consts::TAU;
        let regular = (TAU * t / self.regular_period).sin();
        let chaotic = (TAU * t / self.beat_period_a).sin() * (TAU * t / self.beat_period_b).sin();
        self.regular_weight * regular + self.chaotic_weight * chaotic
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("forcing.regular_period", self.regular_period),
            ("forcing.beat_period_a", self.beat_period_a),
            ("forcing.beat_period_b", self.beat_period_b),
        ] {
            if !value.is_finite() || value == 0.0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    message: "period must be finite and non-zero".to_string(),
                });
            }
        }
        for (field, value) in [
            ("forcing.regular_weight", self.regular_weight),
            ("forcing.chaotic_weight", self.chaotic_weight),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidValue {
                    field,
                    message: "weight must be finite".to_string(),
                });
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// STABILITY CONFIG
// ═══════════════════════════════════════════════════════════════════════════════

/// Configuration shared by all three analyzers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityConfig {
    /// Samples per analysis window
    pub window_size: usize,
    /// Noise amplitudes for the perturbation sweep, iterated in this exact
    /// order. The breakdown threshold is a running minimum updated on each
    /// stable→unstable flip, so reordering this list changes which level is
    /// observed to break first.
    pub noise_levels: Vec<f64>,
    /// Phase-coherence cutoff for the stable/unstable transition
    pub coherence_threshold: f64,
    /// Distance below which a delay-offset sample pair counts as recurrent
    pub recurrence_threshold: f64,
    /// Time-delay embedding offset for the recurrence scan
    pub embedding_delay: usize,
    /// Coupling strength reached at the end of the series
    pub max_coupling_strength: f64,
    /// Forcing waveform injected by the coupling analyzer
    pub forcing: ForcingConfig,
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self {
            window_size: 50,
            noise_levels: vec![0.05, 0.15, 0.3, 0.5, 0.7],
            coherence_threshold: 0.7,
            recurrence_threshold: 0.1,
            embedding_delay: 5,
            max_coupling_strength: 0.5,
            forcing: ForcingConfig::default(),
        }
    }
}

impl StabilityConfig {
    /// Window stride: windows overlap by 3/4, i.e. stride = window/4
    /// (integer, never below 1)
    pub fn stride(&self) -> usize {
        (self.window_size / 4).max(1)
    }

    /// Check internal consistency before running any analyzer
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size < 2 {
            return Err(ConfigError::InvalidValue {
                field: "window_size",
                message: "must be at least 2".to_string(),
            });
        }
        if self.embedding_delay == 0 || self.embedding_delay >= self.window_size {
            return Err(ConfigError::InvalidValue {
                field: "embedding_delay",
                message: format!("must be in 1..window_size ({})", self.window_size),
            });
        }
        for (i, &level) in self.noise_levels.iter().enumerate() {
            if !level.is_finite() || level < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: "noise_levels",
                    message: format!("level {} must be finite and non-negative", i),
                });
            }
        }
        if !self.coherence_threshold.is_finite()
            || self.coherence_threshold <= 0.0
            || self.coherence_threshold > 1.0
        {
            return Err(ConfigError::InvalidValue {
                field: "coherence_threshold",
                message: "must be in (0, 1]".to_string(),
            });
        }
        if !self.recurrence_threshold.is_finite() || self.recurrence_threshold <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "recurrence_threshold",
                message: "must be finite and positive".to_string(),
            });
        }
        if !self.max_coupling_strength.is_finite() || self.max_coupling_strength < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "max_coupling_strength",
                message: "must be finite and non-negative".to_string(),
            });
        }
        self.forcing.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = StabilityConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.window_size, 50);
        assert_eq!(config.stride(), 12);
        assert_eq!(config.noise_levels, vec![0.05, 0.15, 0.3, 0.5, 0.7]);
    }

    #[test]
    fn test_stride_never_zero() {
        let config = StabilityConfig {
            window_size: 3,
            embedding_delay: 1,
            ..StabilityConfig::default()
        };
        assert_eq!(config.stride(), 1);
    }

    #[test]
    fn test_rejects_bad_delay() {
        let config = StabilityConfig {
            embedding_delay: 50,
            ..StabilityConfig::default()
        };
        assert!(config.validate().is_err());

        let config = StabilityConfig {
            embedding_delay: 0,
            ..StabilityConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_noise() {
        let config = StabilityConfig {
            noise_levels: vec![0.05, -0.1],
            ..StabilityConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_period_forcing() {
        let config = StabilityConfig {
            forcing: ForcingConfig {
                regular_period: 0.0,
                ..ForcingConfig::default()
            },
            ..StabilityConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_forcing_is_bounded_by_weights() {
        let forcing = ForcingConfig::default();
        for i in 0..1000 {
            let t = i as f64 * 0.37;
            assert!(forcing.sample(t).abs() <= 0.7 + 0.3 + 1e-12);
        }
    }
}

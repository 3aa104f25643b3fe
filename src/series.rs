//! ═══════════════════════════════════════════════════════════════════════════════
//! SERIES — Validated Input Contract for a Sampled Signal
//! ═══════════════════════════════════════════════════════════════════════════════
//!
//! The loader upstream (CSV or otherwise) hands over two columns; everything
//! it could get wrong is rejected here, once, before any analyzer runs:
//! length mismatch, empty input, non-numeric samples, non-monotonic time.
//! ═══════════════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};

use crate::error::{MalformedInput, StabilityResult};

/// A single scalar channel sampled at strictly increasing times.
/// Immutable once constructed; all analyzers share it read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalSeries {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl SignalSeries {
    /// Build a series from parallel time/value columns, rejecting anything
    /// a malformed upstream row could produce
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> StabilityResult<Self> {
        if times.len() != values.len() {
            return Err(MalformedInput::LengthMismatch {
                times: times.len(),
                values: values.len(),
            }
            .into());
        }
        if times.is_empty() {
            return Err(MalformedInput::EmptySeries.into());
        }
        for (index, (&t, &v)) in times.iter().zip(values.iter()).enumerate() {
            if !t.is_finite() || !v.is_finite() {
                return Err(MalformedInput::NonFiniteSample { index }.into());
            }
        }
        for index in 1..times.len() {
            if times[index] <= times[index - 1] {
                return Err(MalformedInput::NonMonotonicTime { index }.into());
            }
        }
        Ok(Self { times, values })
    }

    /// Build from a stream of `(time, value)` samples (the loader handoff shape)
    pub fn from_samples<I>(samples: I) -> StabilityResult<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (times, values) = samples.into_iter().unzip();
        Self::new(times, values)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Construction rejects empty input, so this only exists for callers that
    /// hold a series behind a generic bound
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Fail fast if the series cannot hold a single analysis window
    pub fn ensure_window(&self, window_size: usize) -> StabilityResult<()> {
        if self.len() < window_size {
            return Err(MalformedInput::ShorterThanWindow {
                len: self.len(),
                window_size,
            }
            .into());
        }
        Ok(())
    }

    /// Window start offsets: 0, stride, 2·stride, … up to and including
    /// `len − window_size`. Count is `floor((len − window) / stride) + 1`.
    /// Caller must have run [`ensure_window`](Self::ensure_window) first.
    pub fn window_starts(&self, window_size: usize, stride: usize) -> impl Iterator<Item = usize> {
        debug_assert!(window_size <= self.len());
        debug_assert!(stride >= 1);
        (0..=self.len() - window_size).step_by(stride)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StabilityError;

    #[test]
    fn test_rejects_length_mismatch() {
        let err = SignalSeries::new(vec![0.0, 1.0], vec![5.0]).unwrap_err();
        assert_eq!(
            err,
            StabilityError::MalformedInput(MalformedInput::LengthMismatch { times: 2, values: 1 })
        );
    }

    #[test]
    fn test_rejects_empty() {
        let err = SignalSeries::new(vec![], vec![]).unwrap_err();
        assert_eq!(err, StabilityError::MalformedInput(MalformedInput::EmptySeries));
    }

    #[test]
    fn test_rejects_non_monotonic_time() {
        let err = SignalSeries::new(vec![0.0, 2.0, 2.0], vec![1.0, 1.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            StabilityError::MalformedInput(MalformedInput::NonMonotonicTime { index: 2 })
        );
    }

    #[test]
    fn test_rejects_nan_sample() {
        let err = SignalSeries::new(vec![0.0, 1.0], vec![5.0, f64::NAN]).unwrap_err();
        assert_eq!(
            err,
            StabilityError::MalformedInput(MalformedInput::NonFiniteSample { index: 1 })
        );
    }

    #[test]
    fn test_from_samples() {
        let series = SignalSeries::from_samples((0..10).map(|i| (i as f64, 0.5))).unwrap();
        assert_eq!(series.len(), 10);
        assert_eq!(series.times()[3], 3.0);
    }

    #[test]
    fn test_window_starts_count_law() {
        // 200 samples, window 50, stride 12: floor(150/12) + 1 = 13 windows
        let series = SignalSeries::from_samples((0..200).map(|i| (i as f64, 1.0))).unwrap();
        let starts: Vec<usize> = series.window_starts(50, 12).collect();
        assert_eq!(starts.len(), 13);
        assert_eq!(starts[0], 0);
        assert_eq!(*starts.last().unwrap(), 144);
    }

    #[test]
    fn test_window_starts_include_exact_fit() {
        // len − window divisible by stride: final window ends at the last sample
        let series = SignalSeries::from_samples((0..98).map(|i| (i as f64, 1.0))).unwrap();
        let starts: Vec<usize> = series.window_starts(50, 12).collect();
        assert_eq!(starts, vec![0, 12, 24, 36, 48]);
    }

    #[test]
    fn test_ensure_window() {
        let series = SignalSeries::from_samples((0..30).map(|i| (i as f64, 1.0))).unwrap();
        assert!(series.ensure_window(30).is_ok());
        assert!(matches!(
            series.ensure_window(50),
            Err(StabilityError::MalformedInput(MalformedInput::ShorterThanWindow {
                len: 30,
                window_size: 50
            }))
        ));
    }
}

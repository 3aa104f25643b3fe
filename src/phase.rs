//! ═══════════════════════════════════════════════════════════════════════════════
//! PHASE — Local Slope Phase
//! ═══════════════════════════════════════════════════════════════════════════════
//!
//! Both the perturbation and coupling analyzers compare signals through the
//! same instantaneous phase: the arctangent of the local slope over one
//! sample step, `atan2(Δvalue, 1)`. This is deliberately not an
//! analytic-signal (Hilbert) phase — it measures agreement of local dynamics,
//! not oscillator angle, and is bounded in (−π/2, π/2).
//! ═══════════════════════════════════════════════════════════════════════════════

/// Phase of the step from `prev` to `cur`
#[inline]
pub fn slope_phase(prev: f64, cur: f64) -> f64 {
    (cur - prev).atan2(1.0)
}

// Trend synthesizer - plausible history ramping from zero to a criterion's current value
use crate::domain::criterion::{Criterion, TrendPoint};
use crate::domain::error::{SynthError, SynthResult};
use crate::domain::seed::derive_seed;
use std::f64::consts::{FRAC_PI_2, TAU};

const NOISE_MAGNITUDE: f64 = 0.15;

/// Monotonic-ish easing curve chosen from a criterion's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EasingCurve {
    Linear,
    EaseOutSine,
    EaseInQuad,
    EaseInOutCubic,
    LinearOscillating,
}

impl EasingCurve {
    pub fn for_seed(seed: u64) -> Self {
        match seed % 5 {
            0 => EasingCurve::Linear,
            1 => EasingCurve::EaseOutSine,
            2 => EasingCurve::EaseInQuad,
            3 => EasingCurve::EaseInOutCubic,
            _ => EasingCurve::LinearOscillating,
        }
    }

    /// Progress factor at normalized time `t` in `[0, 1]`.
    pub fn factor(self, t: f64) -> f64 {
        match self {
            EasingCurve::Linear => t,
            EasingCurve::EaseOutSine => (t * FRAC_PI_2).sin(),
            EasingCurve::EaseInQuad => t * t,
            EasingCurve::EaseInOutCubic => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            EasingCurve::LinearOscillating => t + 0.2 * (t * TAU).sin(),
        }
    }
}

/// Noise in `[-0.075, 0.075)`, fixed per `(seed, index)`.
fn noise(seed: u64, index: usize) -> f64 {
    let raw = (seed as f64 * (index + 1) as f64).sin();
    let fraction = raw - raw.floor();
    (fraction - 0.5) * NOISE_MAGNITUDE
}

/// Synthesize `period_length` points from 0 up to `criterion.target_value`.
///
/// The first point is always 0 and the last is the target rounded to the
/// nearest integer; neither endpoint is clamped. Intermediate points follow
/// the criterion's easing curve plus bounded noise, floored at 0 and rounded.
pub fn synthesize(criterion: &Criterion, period_length: usize) -> SynthResult<Vec<TrendPoint>> {
    if period_length < 2 {
        return Err(SynthError::InvalidPeriodLength(period_length));
    }

    let seed = derive_seed(&criterion.name);
    let curve = EasingCurve::for_seed(seed);
    let last = period_length - 1;

    tracing::debug!(
        criterion = %criterion.name,
        seed,
        ?curve,
        period_length,
        "Synthesizing trend"
    );

    let points = (0..period_length)
        .map(|i| {
            let value = if i == 0 {
                0.0
            } else if i == last {
                criterion.target_value.round()
            } else {
                let t = i as f64 / last as f64;
                let value = criterion.target_value * (curve.factor(t) + noise(seed, i));
                // Floor at +0.0; a zero target can otherwise yield -0.0.
                if value > 0.0 { value.round() } else { 0.0 }
            };
            TrendPoint::new(i, value)
        })
        .collect();

    Ok(points)
}

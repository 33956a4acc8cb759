use crate::foundation::error::{PhaseError, PhaseResult};
use crate::integrate::profile::FrequencyProfile;

/// Upper bound on samples taken by a single integration.
pub const MAX_SAMPLES: usize = 1 << 26;

/// Default quadrature step (seconds).
pub const DEFAULT_STEP: f64 = 0.01;

/// Validate a quadrature step size: finite and strictly positive.
pub(crate) fn check_step(step: f64) -> PhaseResult<()> {
    if !step.is_finite() || step <= 0.0 {
        return Err(PhaseError::validation(format!(
            "quadrature step must be finite and > 0 (got {step})"
        )));
    }
    Ok(())
}

/// Number of profile samples `floor(t / step)` for a valid `(t, step)` pair.
pub(crate) fn sample_count(t: f64, step: f64) -> PhaseResult<usize> {
    check_step(step)?;
    if !t.is_finite() || t < 0.0 {
        return Err(PhaseError::validation(format!(
            "integration time must be finite and >= 0 (got {t})"
        )));
    }
    let n = (t / step).floor();
    if n > MAX_SAMPLES as f64 {
        return Err(PhaseError::validation(format!(
            "integration needs {n} samples, limit is {MAX_SAMPLES}"
        )));
    }
    Ok(n as usize)
}

/// Accumulated phase: the integral of `profile` over `[0, t]`.
///
/// The profile is sampled at `0, step, ..., (N-1)*step` with `N = floor(t / step)`
/// and the samples are combined with the uniform trapezoidal rule. Fewer than two
/// samples integrate to `0.0`. The profile itself is not checked, so a NaN sample
/// yields a NaN phase.
///
/// Every call recomputes from `t = 0`; use
/// [`PhaseAccumulator`](crate::PhaseAccumulator) to amortize repeated queries.
pub fn integrate<P>(t: f64, profile: &P, step: f64) -> PhaseResult<f64>
where
    P: FrequencyProfile + ?Sized,
{
    let n = sample_count(t, step)?;
    if n < 2 {
        return Ok(0.0);
    }

    let mut prev = profile.omega(0.0);
    let mut sum = 0.0;
    for k in 1..n {
        let y = profile.omega(k as f64 * step);
        sum += 0.5 * (prev + y);
        prev = y;
    }
    Ok(sum * step)
}

#[cfg(test)]
#[path = "../../tests/unit/integrate/quadrature.rs"]
mod tests;

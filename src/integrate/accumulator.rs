use crate::foundation::error::PhaseResult;
use crate::integrate::profile::FrequencyProfile;
use crate::integrate::quadrature::{check_step, sample_count};

/// Incremental form of [`integrate`](fn@crate::integrate).
///
/// Keeps the running trapezoid sums for every sample computed so far, so a sweep
/// of increasing query times costs one profile evaluation per new sample instead
/// of a full recomputation per query. Results are bit-identical to
/// [`integrate`](fn@crate::integrate) with the same profile and step.
#[derive(Clone, Debug)]
pub struct PhaseAccumulator<P> {
    profile: P,
    step: f64,
    // prefix[k] = sum of trapezoid terms over samples 0..=k (not yet scaled by step)
    prefix: Vec<f64>,
    last_sample: f64,
}

impl<P> PhaseAccumulator<P>
where
    P: FrequencyProfile,
{
    /// Create an empty accumulator. Fails when `step` is not finite and positive.
    pub fn new(profile: P, step: f64) -> PhaseResult<Self> {
        check_step(step)?;
        Ok(Self {
            profile,
            step,
            prefix: Vec::new(),
            last_sample: 0.0,
        })
    }

    /// Accumulated phase at `t`, extending the cache when needed.
    pub fn phase_at(&mut self, t: f64) -> PhaseResult<f64> {
        let n = sample_count(t, self.step)?;
        if n < 2 {
            return Ok(0.0);
        }
        self.extend_to(n);
        Ok(self.prefix[n - 1] * self.step)
    }

    /// Quadrature step in seconds.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Profile being integrated.
    pub fn profile(&self) -> &P {
        &self.profile
    }

    /// Number of profile samples currently cached.
    pub fn cached_samples(&self) -> usize {
        self.prefix.len()
    }

    /// Drop all cached samples.
    pub fn reset(&mut self) {
        self.prefix.clear();
        self.last_sample = 0.0;
    }

    fn extend_to(&mut self, n: usize) {
        if self.prefix.is_empty() {
            self.last_sample = self.profile.omega(0.0);
            self.prefix.push(0.0);
        }
        let from = self.prefix.len();
        if from >= n {
            return;
        }

        self.prefix.reserve(n - from);
        let mut sum = self.prefix[from - 1];
        for k in from..n {
            let y = self.profile.omega(k as f64 * self.step);
            sum += 0.5 * (self.last_sample + y);
            self.prefix.push(sum);
            self.last_sample = y;
        }
        tracing::debug!(from, to = n, "phase accumulator cache grown");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/integrate/accumulator.rs"]
mod tests;

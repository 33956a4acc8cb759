use crate::foundation::error::{PhaseError, PhaseResult};

/// Angular frequency as a function of time.
///
/// Implementations must be pure: the same `t` always yields the same value. Any
/// `Fn(f64) -> f64` closure is a profile.
pub trait FrequencyProfile {
    /// Angular frequency (rad/s) at time `t` (seconds).
    fn omega(&self, t: f64) -> f64;
}

impl<F> FrequencyProfile for F
where
    F: Fn(f64) -> f64,
{
    fn omega(&self, t: f64) -> f64 {
        self(t)
    }
}

/// Constant angular frequency.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Constant {
    /// Angular frequency in rad/s.
    pub omega: f64,
}

impl FrequencyProfile for Constant {
    fn omega(&self, _t: f64) -> f64 {
        self.omega
    }
}

/// Piecewise-linear ramp: `f1` before `a`, `f2` from `b` on, linear in between.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ramp {
    /// Frequency before the ramp starts.
    pub f1: f64,
    /// Frequency after the ramp ends.
    pub f2: f64,
    /// Ramp start time (seconds).
    pub a: f64,
    /// Ramp end time (seconds), `>= a`.
    pub b: f64,
}

impl Ramp {
    /// Create a validated ramp.
    pub fn new(f1: f64, f2: f64, a: f64, b: f64) -> PhaseResult<Self> {
        let ramp = Self { f1, f2, a, b };
        ramp.validate()?;
        Ok(ramp)
    }

    /// Check that every parameter is finite and that `a <= b`.
    pub fn validate(&self) -> PhaseResult<()> {
        let fields = [
            ("f1", self.f1),
            ("f2", self.f2),
            ("a", self.a),
            ("b", self.b),
        ];
        for (name, v) in fields {
            if !v.is_finite() {
                return Err(PhaseError::profile(format!("ramp '{name}' must be finite")));
            }
        }
        if self.a > self.b {
            return Err(PhaseError::profile("ramp start 'a' must be <= end 'b'"));
        }
        Ok(())
    }
}

impl FrequencyProfile for Ramp {
    fn omega(&self, t: f64) -> f64 {
        if t < self.a {
            self.f1
        } else if t >= self.b {
            // also covers the degenerate a == b step
            self.f2
        } else {
            let u = (t - self.a) / (self.b - self.a);
            self.f1 + (self.f2 - self.f1) * u
        }
    }
}

/// Runtime profile resolved from a scene or CLI definition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// Fixed frequency.
    Constant(Constant),
    /// Piecewise-linear ramp.
    Ramp(Ramp),
}

impl Profile {
    /// Canonical chirp profile: 1 rad/s until `3π`, 5 rad/s from `5π`.
    pub fn chirp() -> Self {
        use std::f64::consts::PI;
        Self::Ramp(Ramp {
            f1: 1.0,
            f2: 5.0,
            a: 3.0 * PI,
            b: 5.0 * PI,
        })
    }

    /// Lower bound of the profile over all `t`.
    pub fn min_omega(&self) -> f64 {
        match self {
            Self::Constant(c) => c.omega,
            Self::Ramp(r) => r.f1.min(r.f2),
        }
    }
}

impl FrequencyProfile for Profile {
    fn omega(&self, t: f64) -> f64 {
        match self {
            Self::Constant(c) => c.omega(t),
            Self::Ramp(r) => r.omega(t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/integrate/profile.rs"]
mod tests;

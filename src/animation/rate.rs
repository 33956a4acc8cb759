/// Rate functions that map normalized play progress to interpolation progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateFunc {
    /// Constant speed.
    #[default]
    Linear,
    /// Sigmoid ease-in/out with zero slope at both ends.
    Smooth,
    /// First half of [`RateFunc::Smooth`], stretched: starts slow, ends fast.
    RushInto,
    /// Second half of [`RateFunc::Smooth`], stretched: starts fast, ends slow.
    RushFrom,
}

const SMOOTH_INFLECTION: f64 = 10.0;

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn smooth(t: f64) -> f64 {
    let error = sigmoid(-SMOOTH_INFLECTION / 2.0);
    ((sigmoid(SMOOTH_INFLECTION * (t - 0.5)) - error) / (1.0 - 2.0 * error)).clamp(0.0, 1.0)
}

impl RateFunc {
    /// Apply this rate function to progress `t`, clamped into `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Smooth => smooth(t),
            Self::RushInto => 2.0 * smooth(t / 2.0),
            Self::RushFrom => 2.0 * smooth(t / 2.0 + 0.5) - 1.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/rate.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::animation::rate::RateFunc;
use crate::animation::schedule::{StepDef, TrackerDef};
use crate::foundation::core::{Fps, Scalar};
use crate::foundation::error::{PhaseError, PhaseResult};
use crate::integrate::profile::{Constant, Profile, Ramp};
use crate::integrate::quadrature::{DEFAULT_STEP, check_step, sample_count};

/// Largest accepted `curve_samples`.
pub const MAX_CURVE_SAMPLES: usize = 1 << 16;

fn default_curve_samples() -> usize {
    256
}

fn default_periods() -> f64 {
    2.0
}

fn default_step() -> f64 {
    DEFAULT_STEP
}

/// JSON form of a frequency profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileDef {
    /// Fixed angular frequency.
    Constant {
        /// Frequency in rad/s.
        omega: Scalar,
    },
    /// `f1` before `a`, `f2` from `b` on, linear in between.
    Ramp {
        /// Frequency before the ramp.
        f1: Scalar,
        /// Frequency after the ramp.
        f2: Scalar,
        /// Ramp start (seconds).
        a: Scalar,
        /// Ramp end (seconds).
        b: Scalar,
    },
}

impl ProfileDef {
    /// Resolve into a validated runtime profile.
    pub fn to_profile(&self) -> PhaseResult<Profile> {
        match *self {
            Self::Constant { omega } => {
                if !omega.0.is_finite() {
                    return Err(PhaseError::profile("constant 'omega' must be finite"));
                }
                Ok(Profile::Constant(Constant { omega: omega.0 }))
            }
            Self::Ramp { f1, f2, a, b } => Ok(Profile::Ramp(Ramp::new(f1.0, f2.0, a.0, b.0)?)),
        }
    }
}

/// What a scene shows, and the parameters specific to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKindDef {
    /// `sin(x)` drawn up to the tracker value, with a dot riding the tip.
    SimpleSine,
    /// `sin(ω x)` with ω driven by the tracker, always showing whole periods.
    ExpandContract {
        /// Number of periods kept on screen.
        #[serde(default = "default_periods")]
        periods: f64,
    },
    /// Integrated phase vs. the naive `ω(t)·t` for a time-varying frequency.
    Chirp {
        /// Frequency profile; defaults to the canonical 1 to 5 rad/s ramp.
        #[serde(default)]
        profile: Option<ProfileDef>,
        /// Quadrature step in seconds.
        #[serde(default = "default_step")]
        step: f64,
    },
}

/// JSON-facing scene definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDef {
    /// Human-readable scene name.
    #[serde(default)]
    pub name: String,
    /// Frame rate the schedule is laid out at.
    pub fps: Fps,
    /// Points per sampled curve.
    #[serde(default = "default_curve_samples")]
    pub curve_samples: usize,
    /// Tracker driving the scene.
    pub tracker: TrackerDef,
    /// Scene content.
    pub kind: SceneKindDef,
}

/// Built-in scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Constant-frequency sine traced over `8π` in 10 seconds.
    SimpleSine,
    /// ω swept from 0.25 to 2 and back.
    ExpandContract,
    /// Time swept over `8π` with the 1 to 5 rad/s ramp profile.
    Chirp,
}

impl Preset {
    /// Every preset, in display order.
    pub const ALL: [Preset; 3] = [Self::SimpleSine, Self::ExpandContract, Self::Chirp];

    /// Stable kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::SimpleSine => "simple-sine",
            Self::ExpandContract => "expand-contract",
            Self::Chirp => "chirp",
        }
    }

    /// Look a preset up by [`Preset::name`].
    pub fn from_name(name: &str) -> PhaseResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| PhaseError::validation(format!("unknown preset '{name}'")))
    }

    /// Scene definition for this preset at 30 fps.
    pub fn def(self) -> SceneDef {
        let fps = Fps { num: 30, den: 1 };
        let axis_length = Scalar::pi(8.0);
        let (tracker, kind) = match self {
            Self::SimpleSine => (
                TrackerDef {
                    initial: Scalar(0.01),
                    steps: vec![StepDef::Play {
                        to: axis_length,
                        run_time: 10.0,
                        rate: RateFunc::Linear,
                    }],
                },
                SceneKindDef::SimpleSine,
            ),
            Self::ExpandContract => (
                TrackerDef {
                    initial: Scalar(0.25),
                    steps: vec![
                        StepDef::Play {
                            to: Scalar(2.0),
                            run_time: 2.0,
                            rate: RateFunc::Linear,
                        },
                        StepDef::Wait { secs: 1.0 },
                        StepDef::Play {
                            to: Scalar(0.25),
                            run_time: 2.0,
                            rate: RateFunc::Linear,
                        },
                        StepDef::Wait { secs: 1.0 },
                    ],
                },
                SceneKindDef::ExpandContract {
                    periods: default_periods(),
                },
            ),
            Self::Chirp => (
                TrackerDef {
                    initial: Scalar(0.0),
                    steps: vec![StepDef::Play {
                        to: axis_length,
                        run_time: 10.0,
                        rate: RateFunc::Linear,
                    }],
                },
                SceneKindDef::Chirp {
                    profile: None,
                    step: DEFAULT_STEP,
                },
            ),
        };

        SceneDef {
            name: self.name().to_owned(),
            fps,
            curve_samples: default_curve_samples(),
            tracker,
            kind,
        }
    }
}

impl SceneDef {
    /// Check scene-level invariants, tracker steps included.
    pub fn validate(&self) -> PhaseResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.curve_samples < 2 || self.curve_samples > MAX_CURVE_SAMPLES {
            return Err(PhaseError::validation(format!(
                "curve_samples must be in [2, {MAX_CURVE_SAMPLES}] (got {})",
                self.curve_samples
            )));
        }
        self.tracker.validate()?;

        match &self.kind {
            SceneKindDef::SimpleSine => {}
            SceneKindDef::ExpandContract { periods } => {
                if !periods.is_finite() || *periods <= 0.0 {
                    return Err(PhaseError::validation("expand_contract periods must be > 0"));
                }
                if self.tracker_values().any(|w| w <= 0.0) {
                    return Err(PhaseError::validation(
                        "expand_contract tracker (ω) must stay > 0",
                    ));
                }
            }
            SceneKindDef::Chirp { profile, step } => {
                check_step(*step)?;
                if let Some(p) = profile {
                    p.to_profile()?;
                }
                if self.tracker_values().any(|t| t < 0.0) {
                    return Err(PhaseError::validation("chirp tracker (time) must stay >= 0"));
                }
                let t_max = self.tracker_values().fold(0.0, f64::max);
                sample_count(t_max, *step)?;
            }
        }
        Ok(())
    }

    /// Runtime profile for chirp scenes; `None` for the other kinds.
    pub fn profile(&self) -> PhaseResult<Option<Profile>> {
        match &self.kind {
            SceneKindDef::Chirp { profile, .. } => match profile {
                Some(p) => p.to_profile().map(Some),
                None => Ok(Some(Profile::chirp())),
            },
            _ => Ok(None),
        }
    }

    // Rate functions stay in [0, 1], so keyed values bound the whole track.
    fn tracker_values(&self) -> impl Iterator<Item = f64> + '_ {
        std::iter::once(self.tracker.initial.0).chain(self.tracker.steps.iter().filter_map(
            |s| match *s {
                StepDef::Play { to, .. } => Some(to.0),
                StepDef::Wait { .. } => None,
            },
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::{
    animation::keyframes::{Keyframe, Keyframes},
    animation::rate::RateFunc,
    foundation::core::{FrameIndex, Fps, Scalar},
    foundation::error::{PhaseError, PhaseResult},
};

/// Latest frame a schedule may reach.
pub const MAX_SCHEDULE_FRAMES: u64 = u32::MAX as u64;

fn default_wait_secs() -> f64 {
    1.0
}

/// One step of a tracker schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepDef {
    /// Move the tracker from its current value to `to` over `run_time` seconds.
    Play {
        /// Target value.
        to: Scalar,
        /// Duration in seconds (`> 0`).
        run_time: f64,
        /// Progress mapping for this move.
        #[serde(default)]
        rate: RateFunc,
    },
    /// Hold the current value.
    Wait {
        /// Hold duration in seconds (`>= 0`).
        #[serde(default = "default_wait_secs")]
        secs: f64,
    },
}

/// A scalar tracker and the ordered steps that drive it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerDef {
    /// Value shown on frame 0.
    pub initial: Scalar,
    /// Steps played back to back.
    #[serde(default)]
    pub steps: Vec<StepDef>,
}

impl TrackerDef {
    /// Check step parameters.
    pub fn validate(&self) -> PhaseResult<()> {
        if !self.initial.0.is_finite() {
            return Err(PhaseError::schedule("tracker 'initial' must be finite"));
        }
        for (i, step) in self.steps.iter().enumerate() {
            match *step {
                StepDef::Play { to, run_time, .. } => {
                    if !to.0.is_finite() {
                        return Err(PhaseError::schedule(format!(
                            "step {i}: play target must be finite"
                        )));
                    }
                    if !run_time.is_finite() || run_time <= 0.0 {
                        return Err(PhaseError::schedule(format!(
                            "step {i}: play run_time must be > 0"
                        )));
                    }
                }
                StepDef::Wait { secs } => {
                    if !secs.is_finite() || secs < 0.0 {
                        return Err(PhaseError::schedule(format!(
                            "step {i}: wait secs must be >= 0"
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Total schedule length in seconds.
    pub fn total_secs(&self) -> f64 {
        self.steps
            .iter()
            .map(|s| match *s {
                StepDef::Play { run_time, .. } => run_time,
                StepDef::Wait { secs } => secs,
            })
            .sum()
    }

    /// Lay the steps out as keyframes at `fps`. Step boundaries snap to the nearest frame.
    pub fn compile(&self, fps: Fps) -> PhaseResult<Keyframes> {
        self.validate()?;

        let mut keys = Vec::with_capacity(self.steps.len() + 1);
        keys.push(Keyframe {
            frame: FrameIndex(0),
            value: self.initial.0,
            rate: RateFunc::Linear,
        });

        let mut secs = 0.0;
        let mut value = self.initial.0;
        for step in &self.steps {
            match *step {
                StepDef::Play { to, run_time, rate } => {
                    if let Some(prev) = keys.last_mut() {
                        prev.rate = rate;
                    }
                    secs += run_time;
                    value = to.0;
                }
                StepDef::Wait { secs: hold } => {
                    secs += hold;
                }
            }
            if secs * fps.as_f64() > MAX_SCHEDULE_FRAMES as f64 {
                return Err(PhaseError::schedule(format!(
                    "schedule runs past frame {MAX_SCHEDULE_FRAMES} ({secs}s at {} fps)",
                    fps.as_f64()
                )));
            }
            keys.push(Keyframe {
                frame: FrameIndex(fps.secs_to_frames_round(secs)),
                value,
                rate: RateFunc::Linear,
            });
        }

        let out = Keyframes { keys };
        out.validate()?;
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/schedule.rs"]
mod tests;

use crate::{
    animation::rate::RateFunc,
    foundation::core::FrameIndex,
    foundation::error::{PhaseError, PhaseResult},
};

/// One tracker keyframe.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    /// Frame at which the tracker holds `value`.
    pub frame: FrameIndex,
    /// Tracker value at `frame`.
    pub value: f64,
    /// Rate function applied toward the next keyframe.
    pub rate: RateFunc,
}

/// Scalar track sampled per frame, with interpolation between adjacent keys.
///
/// Before the first key the first value holds; after the last key the last value holds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframes {
    /// Keys sorted by `frame`.
    pub keys: Vec<Keyframe>,
}

impl Keyframes {
    /// Validate ordering and that at least one key exists.
    pub fn validate(&self) -> PhaseResult<()> {
        if self.keys.is_empty() {
            return Err(PhaseError::schedule("Keyframes must have at least one key"));
        }
        if !self.keys.windows(2).all(|w| w[0].frame.0 <= w[1].frame.0) {
            return Err(PhaseError::schedule("Keyframes keys must be sorted by frame"));
        }
        if let Some(k) = self.keys.iter().find(|k| !k.value.is_finite()) {
            return Err(PhaseError::schedule(format!(
                "keyframe at frame {} has non-finite value",
                k.frame.0
            )));
        }
        Ok(())
    }

    /// Frame of the last key.
    pub fn last_frame(&self) -> FrameIndex {
        self.keys.last().map(|k| k.frame).unwrap_or(FrameIndex(0))
    }

    /// Sample the track at `frame`.
    pub fn sample(&self, frame: FrameIndex) -> PhaseResult<f64> {
        let Some(first) = self.keys.first() else {
            return Err(PhaseError::schedule("Keyframes has no keys"));
        };

        let f = frame.0;
        let idx = self.keys.partition_point(|k| k.frame.0 <= f);
        if idx == 0 {
            return Ok(first.value);
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value);
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.frame.0.saturating_sub(a.frame.0);
        if denom == 0 {
            return Ok(a.value);
        }

        let t = ((f - a.frame.0) as f64) / (denom as f64);
        let te = a.rate.apply(t);
        Ok(a.value + (b.value - a.value) * te)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;

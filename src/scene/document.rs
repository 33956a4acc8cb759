use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;

use crate::animation::keyframes::Keyframes;
use crate::foundation::core::{Fps, FrameIndex, FrameRange};
use crate::foundation::error::{PhaseError, PhaseResult};
use crate::integrate::profile::Profile;
use crate::scene::model::{Preset, SceneDef, SceneKindDef};

/// Validated scene, ready for per-frame evaluation.
///
/// Construction validates the [`SceneDef`], lays the tracker schedule out as
/// keyframes and resolves the frequency profile once, so evaluation never
/// re-parses or re-validates.
#[derive(Debug, Clone)]
pub struct Scene {
    def: SceneDef,
    fps: Fps,
    track: Keyframes,
    profile: Option<Profile>,
    duration: u64,
}

impl Scene {
    /// Build a scene from an in-memory definition.
    pub fn from_def(def: SceneDef) -> PhaseResult<Self> {
        def.validate()?;
        let fps = Fps::new(def.fps.num, def.fps.den)?;
        let track = def.tracker.compile(fps)?;
        let profile = def.profile()?;
        let duration = track
            .last_frame()
            .0
            .checked_add(1)
            .ok_or_else(|| PhaseError::schedule("scene duration overflows the frame counter"))?;
        Ok(Self {
            def,
            fps,
            track,
            profile,
            duration,
        })
    }

    /// Build one of the built-in scenes.
    pub fn preset(preset: Preset) -> PhaseResult<Self> {
        Self::from_def(preset.def())
    }

    /// Parse a scene definition from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> PhaseResult<Self> {
        let def: SceneDef = serde_json::from_reader(r)
            .map_err(|e| PhaseError::serde(format!("parse scene JSON: {e}")))?;
        Self::from_def(def)
    }

    /// Parse a scene definition from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PhaseResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("open scene JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Source definition.
    pub fn def(&self) -> &SceneDef {
        &self.def
    }

    /// Scene content kind.
    pub fn kind(&self) -> &SceneKindDef {
        &self.def.kind
    }

    /// Validated frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Tracker keyframes at the scene frame rate.
    pub fn keyframes(&self) -> &Keyframes {
        &self.track
    }

    /// Resolved profile (chirp scenes only).
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Scene length in frames: through the last keyframe, inclusive.
    pub fn duration_frames(&self) -> u64 {
        self.duration
    }

    /// Scene length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.duration)
    }

    /// Every frame of the scene.
    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.duration),
        }
    }

    /// Tracker value at `frame`.
    pub fn tracker_at(&self, frame: FrameIndex) -> PhaseResult<f64> {
        self.track.sample(frame)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/document.rs"]
mod tests;

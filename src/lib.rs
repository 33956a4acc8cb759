//! phasewave integrates a time-varying angular frequency into instantaneous phase.
//!
//! A sine with constant frequency is `sin(ω t)`. Once ω depends on time, the
//! displayed angle must be the *accumulated* phase `∫₀ᵗ ω(s) ds`; plugging `ω(t)`
//! straight into `sin(ω(t) · t)` produces a visibly wrong wave. This crate provides:
//!
//! - [`integrate()`]: fixed-step trapezoidal quadrature of a [`FrequencyProfile`]
//! - [`PhaseAccumulator`]: the same integral with cached prefix sums for sweeps
//! - [`Scene`] + [`Evaluator`]: deterministic per-frame state for the explanatory
//!   scenes (traced sine, expanding/contracting ω, and the chirp comparison)
//!
//! Evaluation is pure: a frame depends only on the scene definition and its index.
//! Rendering the returned geometry is left to the caller.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod eval;
mod foundation;
mod integrate;
mod scene;

pub use animation::keyframes::{Keyframe, Keyframes};
pub use animation::rate::RateFunc;
pub use animation::schedule::{MAX_SCHEDULE_FRAMES, StepDef, TrackerDef};
pub use eval::evaluator::{EvalThreading, Evaluator, FrameState, SceneView};
pub use foundation::core::{Fps, FrameIndex, FrameRange, Point, Scalar};
pub use foundation::error::{PhaseError, PhaseResult};
pub use integrate::accumulator::PhaseAccumulator;
pub use integrate::profile::{Constant, FrequencyProfile, Profile, Ramp};
pub use integrate::quadrature::{DEFAULT_STEP, MAX_SAMPLES, integrate};
pub use scene::document::Scene;
pub use scene::model::{MAX_CURVE_SAMPLES, Preset, ProfileDef, SceneDef, SceneKindDef};

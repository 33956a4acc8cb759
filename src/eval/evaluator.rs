use rayon::prelude::*;

use crate::{
    eval::curve::sample_curve,
    foundation::core::{FrameIndex, FrameRange, Point},
    foundation::error::{PhaseError, PhaseResult},
    integrate::accumulator::PhaseAccumulator,
    integrate::profile::FrequencyProfile,
    scene::document::Scene,
    scene::model::SceneKindDef,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything a renderer needs to draw one frame.
pub struct FrameState {
    /// Evaluated frame index.
    pub frame: FrameIndex,
    /// Frame timestamp in seconds.
    pub time_secs: f64,
    /// Tracker value at this frame.
    pub tracker: f64,
    /// Kind-specific geometry and readouts.
    pub view: SceneView,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Kind-specific frame contents.
pub enum SceneView {
    /// Sine traced up to the tracker.
    SimpleSine {
        /// `(x, sin x)` for `x` in `[0, tracker]`.
        curve: Vec<Point>,
        /// Tip of the traced curve.
        end: Point,
        /// Height of the side dot, `sin(tracker)`.
        dot_y: f64,
    },
    /// Sine with tracker-driven angular frequency.
    ExpandContract {
        /// Angular frequency shown in the label.
        omega: f64,
        /// Right edge of the plotted domain.
        x_max: f64,
        /// `(x, sin(ω x))` over `[0, x_max]`.
        curve: Vec<Point>,
    },
    /// Time-varying frequency: integrated phase against the naive product.
    Chirp {
        /// Time (the tracker value).
        t: f64,
        /// `ω(t)`.
        omega: f64,
        /// Integrated phase up to `t`.
        phase: f64,
        /// `sin(phase)`.
        correct: f64,
        /// `sin(ω(t) · t)`.
        naive: f64,
        /// `(s, sin(phase(s)))` over `[0, t]`.
        correct_curve: Vec<Point>,
        /// `(s, sin(ω(s) · s))` over `[0, t]`.
        naive_curve: Vec<Point>,
    },
}

/// Frame-range evaluation strategy.
#[derive(Clone, Debug, Default)]
pub struct EvalThreading {
    /// Evaluate frames on a rayon pool.
    pub parallel: bool,
    /// Worker count for the pool; `None` uses rayon defaults.
    pub threads: Option<usize>,
}

/// Stateless evaluator from scene timeline to frame state.
pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(skip(scene))]
    /// Evaluate one frame.
    pub fn eval_frame(scene: &Scene, frame: FrameIndex) -> PhaseResult<FrameState> {
        if !scene.range().contains(frame) {
            return Err(PhaseError::evaluation(format!(
                "frame {} is out of bounds (scene has {} frames)",
                frame.0,
                scene.duration_frames()
            )));
        }

        let tracker = scene.tracker_at(frame)?;
        if !tracker.is_finite() {
            return Err(PhaseError::evaluation(format!(
                "tracker is not finite at frame {}",
                frame.0
            )));
        }

        let samples = scene.def().curve_samples;
        let view = match scene.kind() {
            SceneKindDef::SimpleSine => eval_simple_sine(tracker, samples)?,
            SceneKindDef::ExpandContract { periods } => {
                eval_expand_contract(tracker, *periods, samples)?
            }
            SceneKindDef::Chirp { step, .. } => eval_chirp(scene, tracker, *step, samples)?,
        };

        Ok(FrameState {
            frame,
            time_secs: scene.fps().frames_to_secs(frame.0),
            tracker,
            view,
        })
    }

    /// Evaluate every frame in `range`, in order.
    pub fn eval_range(
        scene: &Scene,
        range: FrameRange,
        threading: &EvalThreading,
    ) -> PhaseResult<Vec<FrameState>> {
        if !scene.range().covers(range) {
            return Err(PhaseError::validation(format!(
                "frame range [{}, {}) exceeds scene length {}",
                range.start.0,
                range.end.0,
                scene.duration_frames()
            )));
        }

        let frames: Vec<FrameIndex> = (range.start.0..range.end.0).map(FrameIndex).collect();
        if !threading.parallel {
            return frames
                .into_iter()
                .map(|f| Self::eval_frame(scene, f))
                .collect();
        }

        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| {
            frames
                .par_iter()
                .map(|&f| Self::eval_frame(scene, f))
                .collect::<PhaseResult<Vec<_>>>()
        })
    }
}

fn eval_simple_sine(x: f64, samples: usize) -> PhaseResult<SceneView> {
    let curve = sample_curve(x, samples, |s| Ok(s.sin()))?;
    let end = curve.last().copied().unwrap_or(Point::ZERO);
    Ok(SceneView::SimpleSine {
        curve,
        end,
        dot_y: x.sin(),
    })
}

fn eval_expand_contract(omega: f64, periods: f64, samples: usize) -> PhaseResult<SceneView> {
    if omega <= 0.0 {
        return Err(PhaseError::evaluation("angular frequency must be > 0"));
    }
    let x_max = std::f64::consts::TAU * periods / omega;
    let curve = sample_curve(x_max, samples, |s| Ok((omega * s).sin()))?;
    Ok(SceneView::ExpandContract {
        omega,
        x_max,
        curve,
    })
}

fn eval_chirp(scene: &Scene, t: f64, step: f64, samples: usize) -> PhaseResult<SceneView> {
    let profile = *scene
        .profile()
        .ok_or_else(|| PhaseError::evaluation("chirp scene has no frequency profile"))?;

    // Curve points are visited left to right, so one accumulator serves the whole frame.
    let mut acc = PhaseAccumulator::new(profile, step)?;
    let correct_curve = sample_curve(t, samples, |s| Ok(acc.phase_at(s)?.sin()))?;
    let phase = acc.phase_at(t)?;
    let omega = profile.omega(t);
    if !phase.is_finite() || !omega.is_finite() {
        tracing::warn!(t, phase, omega, "chirp profile produced a non-finite value");
    }

    let naive_curve = sample_curve(t, samples, |s| Ok((profile.omega(s) * s).sin()))?;
    Ok(SceneView::Chirp {
        t,
        omega,
        phase,
        correct: phase.sin(),
        naive: (omega * t).sin(),
        correct_curve,
        naive_curve,
    })
}

fn build_thread_pool(threads: Option<usize>) -> PhaseResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(PhaseError::validation(
            "eval threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| PhaseError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;

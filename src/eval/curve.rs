use crate::foundation::core::Point;
use crate::foundation::error::PhaseResult;

/// Sample `f` at `samples` evenly spaced points over `[0, x_max]`.
///
/// The last point sits exactly on `x_max`. An empty domain (`x_max <= 0` or not
/// finite) collapses to a single point at the origin.
pub(crate) fn sample_curve<F>(x_max: f64, samples: usize, mut f: F) -> PhaseResult<Vec<Point>>
where
    F: FnMut(f64) -> PhaseResult<f64>,
{
    if !x_max.is_finite() || x_max <= 0.0 || samples < 2 {
        return Ok(vec![Point::ZERO]);
    }

    let last = samples - 1;
    let mut out = Vec::with_capacity(samples);
    for i in 0..samples {
        let x = if i == last {
            x_max
        } else {
            x_max * (i as f64) / (last as f64)
        };
        out.push(Point::new(x, f(x)?));
    }
    Ok(out)
}

use nalgebra::Point2;
use std::f64::consts::FRAC_PI_2;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum CurveError {
    #[error("Control x-positions must be strictly increasing, got [{0}, {1}, {2}]")]
    NonIncreasingControlPoints(f64, f64, f64),

    #[error("At least 2 samples per segment are required, got {0}")]
    TooFewSamples(usize),
}

/// `count` uniformly spaced values covering `[start, end]` inclusive.
fn linspace(start: f64, end: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = (end - start) / (count - 1) as f64;
    (0..count).map(move |i| {
        if i == count - 1 {
            end
        } else {
            start + step * i as f64
        }
    })
}

/// Samples the smooth barrier curve through the three control points
/// `(x[0], y[0])` (level before), `(x[1], y[1])` (transition state) and
/// `(x[2], y[2])` (level after), as a half-sine ease-in toward the barrier
/// followed by a half-sine ease-out beyond it.
///
/// The second half keeps `x[0]` as the sine's angle origin while dividing by
/// the second half-span. This is the observed closed form, kept as-is: with
/// equal half-spans the two halves meet continuously at the barrier and the
/// final sample lands exactly on `y[2]`.
pub fn transition_curve(
    x: [f64; 3],
    y: [f64; 3],
    samples_per_segment: usize,
) -> Result<Vec<Point2<f64>>, CurveError> {
    let [x0, x1, x2] = x;
    let [y0, y1, y2] = y;

    if !(x0 < x1 && x1 < x2) {
        return Err(CurveError::NonIncreasingControlPoints(x0, x1, x2));
    }
    if samples_per_segment < 2 {
        return Err(CurveError::TooFewSamples(samples_per_segment));
    }

    let mut points = Vec::with_capacity(2 * samples_per_segment);

    let rise = y1 - y0;
    for xi in linspace(x0, x1, samples_per_segment) {
        let angle = FRAC_PI_2 * (xi - x0) / (x1 - x0);
        points.push(Point2::new(xi, y0 + rise * angle.sin()));
    }

    let fall = y2 - y1;
    for xi in linspace(x1, x2, samples_per_segment) {
        let angle = FRAC_PI_2 * (xi - x0) / (x2 - x1);
        points.push(Point2::new(xi, y2 - fall * angle.sin()));
    }

    Ok(points)
}

use crate::consts::{MIN_NORMALIZABLE_LENGTH, STRICT_MAX_ABSOLUTE_DIFFERENCE};

use glam::DVec2;

#[derive(Copy, Clone, PartialEq, Debug)]
/// A structure which can be used to reference a particular point along a `Curve`.
/// - The `Parametric` variant addresses the point by the curve's own parameter `t`. Speed along the parametric form is not constant.
///   Values outside `[0, 1]` extrapolate the curve's polynomial.
/// - The `ArcLength` variant addresses the point by the distance travelled from the start point, measured on the sampled polyline
///   that defines the curve's length. Distances at or below `0` map to the start and distances at or beyond the length map to the end.
pub enum TValue {
	Parametric(f64),
	ArcLength(f64),
}

/// Spacing of the samples in a lookup table.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum TValueType {
	/// Samples are evenly spaced in `t`.
	Parametric,
	/// Samples are evenly spaced along the arc length.
	ArcLength,
}

/// Evaluate the first `count` points of `points` at `t` by repeated pairwise linear interpolation.
pub fn de_casteljau(mut points: [DVec2; 4], count: usize, t: f64) -> DVec2 {
	for level in 1..count {
		for index in 0..count - level {
			// Exact at `t = 0` and `t = 1`
			points[index] = points[index] * (1. - t) + points[index + 1] * t;
		}
	}
	points[0]
}

/// Normalize `vector`, or return the zero vector when it is too short to have a meaningful direction.
pub fn unit_or_zero(vector: DVec2) -> DVec2 {
	let length = vector.length();
	if length > MIN_NORMALIZABLE_LENGTH { vector / length } else { DVec2::ZERO }
}

/// Find the root of the linear equation `ax + b`.
pub fn solve_linear(a: f64, b: f64) -> Option<f64> {
	// There exists a root when `a` is not 0
	(a.abs() > STRICT_MAX_ABSOLUTE_DIFFERENCE).then(|| -b / a)
}

/// Find the roots of the quadratic equation `ax^2 + bx + c`.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> [Option<f64>; 2] {
	if a.abs() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
		return [solve_linear(b, c), None];
	}

	let discriminant = b * b - 4. * a * c;
	let two_times_a = 2. * a;
	if discriminant.abs() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
		[Some(-b / two_times_a), None]
	} else if discriminant > 0. {
		let root_discriminant = discriminant.sqrt();
		[Some((-b + root_discriminant) / two_times_a), Some((-b - root_discriminant) / two_times_a)]
	} else {
		[None, None]
	}
}

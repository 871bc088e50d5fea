// Comparison helpers for tests, allowing some maximum absolute difference to account for floating point errors

use crate::consts::MAX_ABSOLUTE_DIFFERENCE;
use crate::Curve;

use glam::DVec2;

pub fn compare_f64s(f1: f64, f2: f64) -> bool {
	(f1 - f2).abs() < MAX_ABSOLUTE_DIFFERENCE
}

/// Compare two `f64` numbers with a provided max absolute value difference.
pub fn f64_compare(a: f64, b: f64, max_abs_diff: f64) -> bool {
	(a - b).abs() < max_abs_diff
}

pub fn compare_points(p1: DVec2, p2: DVec2) -> bool {
	p1.abs_diff_eq(p2, MAX_ABSOLUTE_DIFFERENCE)
}

pub fn compare_vec_of_points(a: Vec<DVec2>, b: Vec<DVec2>, max_absolute_difference: f64) -> bool {
	a.len() == b.len() && a.into_iter().zip(b).all(|(p1, p2)| p1.abs_diff_eq(p2, max_absolute_difference))
}

/// Compare the control points of a curve against the expected ones.
pub fn compare_curve_points(curve: &Curve, expected_points: Vec<DVec2>) -> bool {
	compare_vec_of_points(curve.get_points().collect(), expected_points, MAX_ABSOLUTE_DIFFERENCE)
}

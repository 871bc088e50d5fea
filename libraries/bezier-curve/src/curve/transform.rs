use super::*;
use crate::CurveError;

use glam::{DAffine2, DMat2};

/// Functionality that transform curves, such as split, clip, reverse and affine transformations.
impl Curve {
	/// Returns the pair of curves that result from splitting the original curve at the parameter `t`.
	/// Both halves keep the degree of the original; the first traces `[0, t]` and the second traces `[t, 1]`, each reparameterized to `[0, 1]`.
	/// The halves share the point `point_at(t)`.
	pub fn split(&self, t: f64) -> [Curve; 2] {
		let (mut points, count) = self.control_polygon();
		let mut left = [DVec2::ZERO; 4];
		let mut right = [DVec2::ZERO; 4];
		left[0] = points[0];
		right[count - 1] = points[count - 1];

		// Each level of the De Casteljau reduction contributes its first point to the left curve and its last point to the right curve
		for level in 1..count {
			let remaining = count - level;
			for index in 0..remaining {
				points[index] = points[index] * (1. - t) + points[index + 1] * t;
			}
			left[level] = points[0];
			right[remaining - 1] = points[remaining - 1];
		}

		[self.with_control_polygon(left), self.with_control_polygon(right)]
	}

	/// Returns the curve covering the parameter range `[t0, t1]` of the original curve, reparameterized to `[0, 1]`.
	/// - Fails with [CurveError::InvalidClipRange] unless `0 <= t0 < t1 <= 1`. `t0 = 0` and `t1 = 1` are accepted and cut nothing on that side.
	pub fn clip(&self, t0: f64, t1: f64) -> Result<Curve, CurveError> {
		if !(0. <= t0 && t0 < t1 && t1 <= 1.) {
			return Err(CurveError::InvalidClipRange { t0, t1 });
		}

		let [_, starting_at_t0] = self.split(t0);
		// Rescale `t1` into the parameter range of the curve that now starts at `t0`
		let [clipped, _] = starting_at_t0.split((t1 - t0) / (1. - t0));

		// Both splits rebuild the original degree, so this only trips if that ever stops holding
		let expected = self.degree() + 1;
		let actual = clipped.get_points().count();
		if actual != expected {
			log::error!("Clipping {self:?} to [{t0}, {t1}] produced {clipped:?}");
			return Err(CurveError::DegenerateClip { expected, actual });
		}

		Ok(clipped)
	}

	/// Returns a reversed version of the curve, traced from the end point to the start point.
	pub fn reverse(&self) -> Curve {
		Curve {
			start: self.end,
			end: self.start,
			handles: self.handles.reversed(),
		}
	}

	/// Returns a curve that results from applying the transformation function to each control point.
	pub fn apply_transformation(&self, transformation_function: impl Fn(DVec2) -> DVec2) -> Curve {
		Curve {
			start: transformation_function(self.start),
			end: transformation_function(self.end),
			handles: self.handles.apply_transformation(&transformation_function),
		}
	}

	/// Returns a curve that results from mapping every control point through the affine transformation.
	/// Affine maps commute with De Casteljau's algorithm, so the result is exactly the image of the original curve.
	pub fn transform(&self, transform: DAffine2) -> Curve {
		self.apply_transformation(|point| transform.transform_point2(point))
	}

	/// Returns a curve that results from rotating the curve around the origin by the given angle (in radians).
	pub fn rotate(&self, angle: f64) -> Curve {
		let rotation_matrix = DMat2::from_angle(angle);
		self.apply_transformation(|point| rotation_matrix.mul_vec2(point))
	}

	/// Returns a curve that results from rotating the curve around the provided point by the given angle (in radians).
	pub fn rotate_about_point(&self, angle: f64, pivot: DVec2) -> Curve {
		let rotation_matrix = DMat2::from_angle(angle);
		self.apply_transformation(|point| rotation_matrix.mul_vec2(point - pivot) + pivot)
	}

	/// Returns a curve that results from translating the curve by the given `DVec2`.
	pub fn translate(&self, translation: DVec2) -> Curve {
		self.apply_transformation(|point| point + translation)
	}

	/// Returns a curve that results from scaling the curve about the origin by the given factor along each axis.
	pub fn scale(&self, factor: DVec2) -> Curve {
		self.apply_transformation(|point| point * factor)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ErrorKind;
	use crate::compare::{compare_curve_points, compare_points};
	use pretty_assertions::assert_eq;
	use std::f64::consts::FRAC_PI_2;

	fn sample_curves() -> [Curve; 3] {
		[
			Curve::from_linear_coordinates(10., 10., 40., 30.),
			Curve::from_quadratic_coordinates(10., 10., 40., 30., 60., 60.),
			Curve::from_cubic_coordinates(2., 2., 5., 10., 8., 4., 12., 2.),
		]
	}

	#[test]
	fn split_halves_meet_on_the_curve() {
		for curve in sample_curves() {
			for t in [0.1, 0.25, 0.5, 0.9] {
				let [left, right] = curve.split(t);
				assert_eq!(left.degree(), curve.degree());
				assert_eq!(right.degree(), curve.degree());
				assert_eq!(left.start(), curve.start());
				assert_eq!(right.end(), curve.end());
				assert_eq!(left.end(), right.start());
				assert_eq!(left.end(), curve.point_at(t));
			}
		}
	}

	#[test]
	fn split_line() {
		let line = Curve::from_linear_coordinates(0., 0., 1., 1.);
		let [left, right] = line.split(0.5);
		assert_eq!(left, Curve::from_linear_coordinates(0., 0., 0.5, 0.5));
		assert_eq!(right, Curve::from_linear_coordinates(0.5, 0.5, 1., 1.));
	}

	#[test]
	fn split_cubic() {
		let cubic = Curve::from_cubic_coordinates(0., 0., 0., 100., 100., 100., 100., 0.);
		let [left, right] = cubic.split(0.5);
		assert!(compare_curve_points(&left, vec![DVec2::new(0., 0.), DVec2::new(0., 50.), DVec2::new(25., 75.), DVec2::new(50., 75.)]));
		assert!(compare_curve_points(&right, vec![DVec2::new(50., 75.), DVec2::new(75., 75.), DVec2::new(100., 50.), DVec2::new(100., 0.)]));
	}

	#[test]
	fn split_halves_trace_the_original() {
		for curve in sample_curves() {
			let t = 0.3;
			let [left, right] = curve.split(t);
			for s in [0., 0.2, 0.5, 0.8, 1.] {
				assert!(compare_points(left.point_at(s), curve.point_at(s * t)));
				assert!(compare_points(right.point_at(s), curve.point_at(t + s * (1. - t))));
			}
		}
	}

	#[test]
	fn split_at_the_ends() {
		let curve = sample_curves()[2];
		let [left, right] = curve.split(0.);
		assert!(left.is_point());
		assert_eq!(right, curve);

		let [left, right] = curve.split(1.);
		assert_eq!(left, curve);
		assert!(right.is_point());
	}

	#[test]
	fn clip_matches_the_original() {
		for curve in sample_curves() {
			let clipped = curve.clip(0.3, 0.7).unwrap();
			assert_eq!(clipped.degree(), curve.degree());
			assert!(compare_points(clipped.start(), curve.point_at(0.3)));
			assert!(compare_points(clipped.end(), curve.point_at(0.7)));
			for s in [0.25, 0.5, 0.75] {
				assert!(compare_points(clipped.point_at(s), curve.point_at(0.3 + 0.4 * s)));
			}
		}
	}

	#[test]
	fn clip_keeps_four_control_points() {
		let cubic = Curve::from_cubic_coordinates(2., 2., 5., 10., 8., 4., 12., 2.);
		assert_eq!(cubic.clip(0.3, 0.7).unwrap().get_points().count(), 4);
	}

	#[test]
	fn clip_to_the_whole_range_is_the_identity() {
		for curve in sample_curves() {
			assert!(curve.clip(0., 1.).unwrap().abs_diff_eq(&curve, MAX_ABSOLUTE_DIFFERENCE));
		}
	}

	#[test]
	fn clip_with_one_open_side() {
		let curve = sample_curves()[2];
		let [head, tail] = curve.split(0.4);
		assert!(curve.clip(0., 0.4).unwrap().abs_diff_eq(&head, MAX_ABSOLUTE_DIFFERENCE));
		assert!(curve.clip(0.4, 1.).unwrap().abs_diff_eq(&tail, MAX_ABSOLUTE_DIFFERENCE));
	}

	#[test]
	fn clip_rejects_invalid_ranges() {
		let curve = sample_curves()[1];
		for (t0, t1) in [(0.7, 0.3), (0.5, 0.5), (-0.1, 0.5), (0.5, 1.1), (1., 1.)] {
			let error = curve.clip(t0, t1).unwrap_err();
			assert_eq!(error, CurveError::InvalidClipRange { t0, t1 });
			assert_eq!(error.kind(), ErrorKind::InvalidArgument);
		}
		assert!(curve.clip(f64::NAN, 0.5).is_err());
		assert!(curve.clip(0.2, f64::NAN).is_err());
	}

	#[test]
	fn reverse() {
		let cubic = Curve::from_cubic_coordinates(0., 0., 1., 1., 2., 1., 3., 0.);
		let reversed = cubic.reverse();
		assert_eq!(reversed, Curve::from_cubic_coordinates(3., 0., 2., 1., 1., 1., 0., 0.));
		assert_eq!(reversed.reverse(), cubic);
		assert!(compare_points(reversed.point_at(0.25), cubic.point_at(0.75)));
	}

	#[test]
	fn transform_with_translation() {
		let line = Curve::from_linear_coordinates(3., 3., 6., 6.);
		let transformed = line.transform(DAffine2::from_translation(DVec2::new(-2., 2.)));
		assert_eq!(transformed.start(), DVec2::new(1., 5.));
		assert_eq!(transformed.end(), DVec2::new(4., 8.));
		assert_eq!(transformed, line.translate(DVec2::new(-2., 2.)));

		// The original is left untouched
		assert_eq!(line.start(), DVec2::new(3., 3.));
	}

	#[test]
	fn transform_commutes_with_evaluation() {
		let affine = DAffine2::from_scale_angle_translation(DVec2::new(2., 0.5), 0.3, DVec2::new(-4., 7.));
		for curve in sample_curves() {
			let transformed = curve.transform(affine);
			assert_eq!(transformed.degree(), curve.degree());
			for t in [0., 0.4, 1.] {
				assert!(compare_points(transformed.point_at(t), affine.transform_point2(curve.point_at(t))));
			}
		}
	}

	#[test]
	fn rotate_and_scale() {
		let line = Curve::from_linear_coordinates(1., 0., 2., 0.);
		let rotated = line.rotate(FRAC_PI_2);
		assert!(compare_points(rotated.start(), DVec2::new(0., 1.)));
		assert!(compare_points(rotated.end(), DVec2::new(0., 2.)));

		let rotated = line.rotate_about_point(FRAC_PI_2, DVec2::new(1., 0.));
		assert!(compare_points(rotated.start(), DVec2::new(1., 0.)));
		assert!(compare_points(rotated.end(), DVec2::new(1., 1.)));

		let scaled = Curve::from_quadratic_coordinates(1., 1., 2., 3., 4., 1.).scale(DVec2::new(2., -1.));
		assert_eq!(scaled, Curve::from_quadratic_coordinates(2., -1., 4., -3., 8., -1.));
	}
}

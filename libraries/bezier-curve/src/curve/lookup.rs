use super::*;
use crate::ProjectionOptions;
use crate::utils::{TValue, TValueType};

/// Functionality relating to looking up properties of the `Curve` or points along the `Curve`.
///
/// The length of a curve is defined as the length of the polyline through `point_at(i / LENGTH_SUBDIVISIONS)` for `i` in `0..=LENGTH_SUBDIVISIONS`.
/// There is no closed form for the exact arc length of quadratic and cubic curves, so every arc-length query below is measured against
/// this polyline, which keeps the forward and inverse mappings consistent with each other.
impl Curve {
	/// Convert a [TValue] to a parametric `t`-value.
	pub(crate) fn t_value_to_parametric(&self, t: TValue) -> f64 {
		match t {
			TValue::Parametric(t) => t,
			TValue::ArcLength(distance) => self.time_parameter(distance),
		}
	}

	/// Return a selection of `steps + 1` points on the curve, from the start point to the end point.
	/// The points are evenly spaced in `t` for [TValueType::Parametric], or evenly spaced along the arc length for [TValueType::ArcLength].
	/// - `steps` - Number of intervals between the returned points. The default value is `10`.
	/// - `tvalue_type` - Spacing of the points. The default value is [TValueType::Parametric].
	pub fn compute_lookup_table(&self, steps: Option<usize>, tvalue_type: Option<TValueType>) -> Vec<DVec2> {
		let steps = steps.unwrap_or(DEFAULT_LUT_STEP_SIZE).max(1);
		let tvalue_type = tvalue_type.unwrap_or(TValueType::Parametric);
		let length = match tvalue_type {
			TValueType::Parametric => 0.,
			TValueType::ArcLength => self.length(),
		};

		(0..=steps)
			.map(|index| {
				let ratio = index as f64 / steps as f64;
				match tvalue_type {
					TValueType::Parametric => self.point_at(ratio),
					TValueType::ArcLength => self.point_at(self.time_parameter(ratio * length)),
				}
			})
			.collect()
	}

	/// Approximate length of the curve, measured along a polyline of [LENGTH_SUBDIVISIONS] chords.
	pub fn length(&self) -> f64 {
		self.arc_length_parameter(1.)
	}

	/// Length of the curve between the start point and the parameter `t`, which is clamped to `[0, 1]`.
	/// Whole chords of the length polyline are summed up to the last sample before `t`, followed by the chord from that sample to `point_at(t)`.
	pub fn arc_length_parameter(&self, t: f64) -> f64 {
		let t = if t.is_nan() { 0. } else { t.clamp(0., 1.) };
		let whole_chords = ((t * LENGTH_SUBDIVISIONS as f64).floor() as usize).min(LENGTH_SUBDIVISIONS);

		let mut previous = self.start;
		let mut length = 0.;
		for index in 1..=whole_chords {
			let current = self.point_at(index as f64 / LENGTH_SUBDIVISIONS as f64);
			length += previous.distance(current);
			previous = current;
		}
		if whole_chords < LENGTH_SUBDIVISIONS {
			length += previous.distance(self.point_at(t));
		}
		length
	}

	/// Parameter `t` at which the arc length measured from the start point equals `arc_length`.
	/// Walks the chords of the length polyline until their running total reaches `arc_length`, then interpolates within the last chord.
	/// - Returns `0` when `arc_length` is not positive and exactly `1` when `arc_length` is at least [Curve::length].
	pub fn time_parameter(&self, arc_length: f64) -> f64 {
		if let Some(t) = self.clamp_arc_length(arc_length) {
			return t;
		}

		let mut previous = self.start;
		let mut accumulated = 0.;
		for index in 1..=LENGTH_SUBDIVISIONS {
			let current = self.point_at(index as f64 / LENGTH_SUBDIVISIONS as f64);
			let chord = previous.distance(current);
			if accumulated + chord >= arc_length {
				// `accumulated < arc_length` here, so the chord is not empty
				let ratio = (arc_length - accumulated) / chord;
				return ((index - 1) as f64 + ratio) / LENGTH_SUBDIVISIONS as f64;
			}
			accumulated += chord;
			previous = current;
		}
		1.
	}

	/// Parameter `t` at which the arc length measured from the start point equals `arc_length`, found by bisecting on [Curve::arc_length_parameter].
	/// - `error` - Tolerance on the returned `t`. The default value is `0.00001`. The search stops after 64 halvings regardless.
	/// - Returns `0` when `arc_length` is not positive and exactly `1` when `arc_length` is at least [Curve::length].
	pub fn time_parameter_by_bisection(&self, arc_length: f64, error: Option<f64>) -> f64 {
		if let Some(t) = self.clamp_arc_length(arc_length) {
			return t;
		}
		let error = error.unwrap_or(DEFAULT_ARC_LENGTH_ERROR);

		let mut low = 0.;
		let mut high = 1.;
		for _ in 0..MAX_BISECTION_ITERATIONS {
			if high - low <= error {
				break;
			}
			let middle = (low + high) / 2.;
			if self.arc_length_parameter(middle) < arc_length {
				low = middle;
			} else {
				high = middle;
			}
		}
		(low + high) / 2.
	}

	/// The parameter for an arc length outside of the curve: `0` at or before the start, `1` at or beyond the end. `None` for arc lengths strictly inside.
	fn clamp_arc_length(&self, arc_length: f64) -> Option<f64> {
		if arc_length.is_nan() || arc_length <= 0. {
			log::trace!("Clamped arc length {arc_length} to the start of the curve");
			return Some(0.);
		}
		let total_length = self.length();
		if arc_length >= total_length {
			log::trace!("Clamped arc length {arc_length} to the end of the curve of length {total_length}");
			return Some(1.);
		}
		None
	}

	/// Position of the point `arc_length` away from the start point, measured along the curve.
	pub fn point_at_arc_length(&self, arc_length: f64) -> DVec2 {
		self.point_at(self.time_parameter(arc_length))
	}

	/// Tangent at the point `arc_length` away from the start point, measured along the curve.
	pub fn tangent_at_arc_length(&self, arc_length: f64) -> DVec2 {
		self.tangent_at(self.time_parameter(arc_length))
	}

	/// Normal at the point `arc_length` away from the start point, measured along the curve.
	pub fn normal_at_arc_length(&self, arc_length: f64) -> DVec2 {
		self.normal_at(self.time_parameter(arc_length))
	}

	/// Tangent and normal at the point `arc_length` away from the start point, measured along the curve.
	pub fn tangent_and_normal_at_arc_length(&self, arc_length: f64) -> (DVec2, DVec2) {
		self.tangent_and_normal_at(self.time_parameter(arc_length))
	}

	/// Returns the parameter `t` of the point on the curve closest to the provided point.
	/// The curve is sampled at evenly spaced parameters configured by [ProjectionOptions], and the closest sample wins, preferring the lowest `t` on ties.
	/// The result is therefore within half a sample spacing of the true projection.
	pub fn project(&self, point: DVec2, options: Option<ProjectionOptions>) -> f64 {
		let ProjectionOptions { samples } = options.unwrap_or_default();
		let samples = samples.clamp(1, MAX_PROJECTION_SAMPLES);

		// `min_by` keeps the first of equally close samples
		(0..=samples)
			.map(|index| index as f64 / samples as f64)
			.map(|t| (t, point.distance_squared(self.point_at(t))))
			.min_by(|a, b| a.1.total_cmp(&b.1))
			.map_or(0., |(t, _)| t)
	}

	/// Returns the point on the curve closest to `target`, using the default [ProjectionOptions].
	pub fn closest_point(&self, target: DVec2) -> DVec2 {
		self.point_at(self.project(target, None))
	}

	/// Euclidean distance between `target` and the closest point on the curve.
	pub fn distance_to(&self, target: DVec2) -> f64 {
		self.closest_point(target).distance(target)
	}
}

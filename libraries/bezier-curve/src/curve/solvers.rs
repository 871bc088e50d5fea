use super::*;
use crate::utils::{TValue, de_casteljau, solve_quadratic, unit_or_zero};

/// Functionality that solve for various curve information such as position, derivative, tangent, extrema, etc.
impl Curve {
	/// Returns the position of the curve at the parameter `t` using De Casteljau's algorithm.
	/// `t` is not restricted to `[0, 1]`; values outside of it extrapolate the curve.
	pub fn point_at(&self, t: f64) -> DVec2 {
		let (points, count) = self.control_polygon();
		de_casteljau(points, count, t)
	}

	/// Returns the position of the curve at the point addressed by `t`.
	pub fn evaluate(&self, t: TValue) -> DVec2 {
		self.point_at(self.t_value_to_parametric(t))
	}

	/// Returns a list of lists of points representing the De Casteljau points for all iterations at the parameter `t`.
	/// The `i`th element of the list represents the set of points in the `i`th iteration, and the last one holds the single point `point_at(t)`.
	pub fn de_casteljau_points(&self, t: f64) -> Vec<Vec<DVec2>> {
		let mut current_points = self.get_points().collect::<Vec<DVec2>>();
		let mut de_casteljau_points = Vec::with_capacity(current_points.len());

		// Iterate until one point is left
		while current_points.len() > 1 {
			let next_points = current_points.windows(2).map(|pair| pair[0] * (1. - t) + pair[1] * t).collect();
			de_casteljau_points.push(std::mem::replace(&mut current_points, next_points));
		}
		de_casteljau_points.push(current_points);

		de_casteljau_points
	}

	/// Returns a [Curve] representing the derivative of the original curve.
	/// - This function returns `None` for a linear curve, whose derivative is the constant `end - start`.
	pub fn derivative(&self) -> Option<Curve> {
		match self.handles {
			CurveHandles::Linear => None,
			CurveHandles::Quadratic { handle } => {
				let p1_minus_p0 = handle - self.start;
				let p2_minus_p1 = self.end - handle;
				Some(Curve::from_linear_dvec2(2. * p1_minus_p0, 2. * p2_minus_p1))
			}
			CurveHandles::Cubic { handle_start, handle_end } => {
				let p1_minus_p0 = handle_start - self.start;
				let p2_minus_p1 = handle_end - handle_start;
				let p3_minus_p2 = self.end - handle_end;
				Some(Curve::from_quadratic_dvec2(3. * p1_minus_p0, 3. * p2_minus_p1, 3. * p3_minus_p2))
			}
		}
	}

	/// Returns the non-normalized derivative at the parameter `t`: the degree times the De Casteljau evaluation of the forward differences of the control points.
	pub(crate) fn non_normalized_tangent(&self, t: f64) -> DVec2 {
		let (points, count) = self.control_polygon();
		let mut differences = [DVec2::ZERO; 4];
		for index in 0..count - 1 {
			differences[index] = points[index + 1] - points[index];
		}
		de_casteljau(differences, count - 1, t) * self.degree() as f64
	}

	/// Returns a normalized unit vector representing the tangent at the parameter `t`.
	/// Where the derivative vanishes (a cusp, or a curve collapsed to a point) the zero vector is returned.
	pub fn tangent_at(&self, t: f64) -> DVec2 {
		unit_or_zero(self.non_normalized_tangent(t))
	}

	/// Returns a normalized unit vector representing the direction of the normal at the parameter `t`.
	/// The normal is the tangent rotated a quarter turn counterclockwise, `(x, y) -> (-y, x)`, and is zero wherever the tangent is zero.
	pub fn normal_at(&self, t: f64) -> DVec2 {
		unit_or_zero(self.tangent_at(t).perp())
	}

	/// Returns the tangent and the normal at the parameter `t`.
	pub fn tangent_and_normal_at(&self, t: f64) -> (DVec2, DVec2) {
		let tangent = self.tangent_at(t);
		(tangent, unit_or_zero(tangent.perp()))
	}

	/// Returns a normalized unit vector representing the tangent at the point addressed by `t`.
	pub fn tangent(&self, t: TValue) -> DVec2 {
		self.tangent_at(self.t_value_to_parametric(t))
	}

	/// Returns a normalized unit vector representing the normal at the point addressed by `t`.
	pub fn normal(&self, t: TValue) -> DVec2 {
		self.normal_at(self.t_value_to_parametric(t))
	}

	/// Tangent at the start point.
	pub fn start_tangent(&self) -> DVec2 {
		self.tangent_at(0.)
	}

	/// Tangent at the end point.
	pub fn end_tangent(&self) -> DVec2 {
		self.tangent_at(1.)
	}

	/// Returns two lists of `t`-values representing the local extrema of the `x` and `y` parametric curves respectively.
	/// The local extrema are defined to be points at which the derivative of the curve is equal to zero.
	fn unrestricted_local_extrema(&self) -> [[Option<f64>; 2]; 2] {
		match self.handles {
			CurveHandles::Linear => [[None; 2]; 2],
			CurveHandles::Quadratic { handle } => {
				let d0 = handle - self.start;
				let d1 = self.end - handle;
				let dd = d1 - d0;
				let a = (dd.x != 0.).then(|| -d0.x / dd.x);
				let b = (dd.y != 0.).then(|| -d0.y / dd.y);
				[[a, None], [b, None]]
			}
			CurveHandles::Cubic { handle_start, handle_end } => {
				let d0 = handle_start - self.start;
				let d1 = handle_end - handle_start;
				let d2 = self.end - handle_end;
				let a = d0 - 2. * d1 + d2;
				let b = 2. * (d1 - d0);
				let c = d0;
				[solve_quadratic(a.x, b.x, c.x), solve_quadratic(a.y, b.y, c.y)]
			}
		}
	}

	/// Returns two lists of `t`-values representing the local extrema of the `x` and `y` parametric curves respectively.
	/// The list of `t`-values returned are filtered such that they fall within the range `(0, 1)`.
	pub fn local_extrema(&self) -> [impl Iterator<Item = f64>; 2] {
		self.unrestricted_local_extrema().map(|t_values| t_values.into_iter().flatten().filter(|&t| t > 0. && t < 1.))
	}

	/// Return the min and max corners of the axis-aligned box around all control points.
	/// A Bezier curve lies inside the convex hull of its control points, so this box always contains the curve, though it may be loose.
	pub fn bounding_box(&self) -> [DVec2; 2] {
		let (points, count) = self.control_polygon();
		points[1..count].iter().fold([points[0], points[0]], |[min, max], &point| [min.min(point), max.max(point)])
	}

	/// Return the min and max corners of the smallest axis-aligned box containing the curve for `t` in `[0, 1]`.
	pub fn tight_bounding_box(&self) -> [DVec2; 2] {
		// Start by taking min/max of endpoints.
		let mut endpoints_min = self.start.min(self.end);
		let mut endpoints_max = self.start.max(self.end);

		// Iterate through extrema points.
		for t_values in self.local_extrema() {
			for t in t_values {
				let point = self.point_at(t);
				endpoints_min = endpoints_min.min(point);
				endpoints_max = endpoints_max.max(point);
			}
		}

		[endpoints_min, endpoints_max]
	}
}

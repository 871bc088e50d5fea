use super::*;
use crate::CurveError;

/// Functionality relating to core `Curve` operations, such as constructors and `abs_diff_eq`.
impl Curve {
	/// Create a curve from its ordered control points: start point, zero to two handles, then end point.
	/// Fails with [CurveError::InvalidPointCount] unless 2, 3 or 4 points are provided.
	pub fn new(points: &[DVec2]) -> Result<Self, CurveError> {
		match *points {
			[start, end] => Ok(Curve::from_linear_dvec2(start, end)),
			[start, handle, end] => Ok(Curve::from_quadratic_dvec2(start, handle, end)),
			[start, handle_start, handle_end, end] => Ok(Curve::from_cubic_dvec2(start, handle_start, handle_end, end)),
			_ => {
				log::debug!("Rejected a curve with {} control points", points.len());
				Err(CurveError::InvalidPointCount(points.len()))
			}
		}
	}

	/// Create a linear curve using the provided coordinates as the start and end points.
	pub fn from_linear_coordinates(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
		Curve::from_linear_dvec2(DVec2::new(x1, y1), DVec2::new(x2, y2))
	}

	/// Create a linear curve using the provided DVec2s as the start and end points.
	pub fn from_linear_dvec2(p1: DVec2, p2: DVec2) -> Self {
		Curve {
			start: p1,
			handles: CurveHandles::Linear,
			end: p2,
		}
	}

	/// Create a quadratic curve using the provided coordinates as the start, handle, and end points.
	pub fn from_quadratic_coordinates(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Self {
		Curve::from_quadratic_dvec2(DVec2::new(x1, y1), DVec2::new(x2, y2), DVec2::new(x3, y3))
	}

	/// Create a quadratic curve using the provided DVec2s as the start, handle, and end points.
	pub fn from_quadratic_dvec2(p1: DVec2, p2: DVec2, p3: DVec2) -> Self {
		Curve {
			start: p1,
			handles: CurveHandles::Quadratic { handle: p2 },
			end: p3,
		}
	}

	/// Create a cubic curve using the provided coordinates as the start, handles, and end points.
	#[allow(clippy::too_many_arguments)]
	pub fn from_cubic_coordinates(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64, x4: f64, y4: f64) -> Self {
		Curve::from_cubic_dvec2(DVec2::new(x1, y1), DVec2::new(x2, y2), DVec2::new(x3, y3), DVec2::new(x4, y4))
	}

	/// Create a cubic curve using the provided DVec2s as the start, handles, and end points.
	pub fn from_cubic_dvec2(p1: DVec2, p2: DVec2, p3: DVec2, p4: DVec2) -> Self {
		Curve {
			start: p1,
			handles: CurveHandles::Cubic { handle_start: p2, handle_end: p3 },
			end: p4,
		}
	}

	/// The control points in order, padded with zeros, along with how many of them are in use.
	pub(crate) fn control_polygon(&self) -> ([DVec2; 4], usize) {
		match self.handles {
			CurveHandles::Linear => ([self.start, self.end, DVec2::ZERO, DVec2::ZERO], 2),
			CurveHandles::Quadratic { handle } => ([self.start, handle, self.end, DVec2::ZERO], 3),
			CurveHandles::Cubic { handle_start, handle_end } => ([self.start, handle_start, handle_end, self.end], 4),
		}
	}

	/// Build a curve of the same degree as `self` from the leading entries of a padded control polygon.
	pub(crate) fn with_control_polygon(&self, points: [DVec2; 4]) -> Curve {
		match self.handles {
			CurveHandles::Linear => Curve::from_linear_dvec2(points[0], points[1]),
			CurveHandles::Quadratic { .. } => Curve::from_quadratic_dvec2(points[0], points[1], points[2]),
			CurveHandles::Cubic { .. } => Curve::from_cubic_dvec2(points[0], points[1], points[2], points[3]),
		}
	}

	/// Returns true if the corresponding control points of the two curves are within the provided absolute value difference from each other.
	/// Curves of different degrees are never equal.
	pub fn abs_diff_eq(&self, other: &Curve, max_abs_diff: f64) -> bool {
		self.degree() == other.degree() && self.get_points().zip(other.get_points()).all(|(a, b)| a.abs_diff_eq(b, max_abs_diff))
	}

	/// Returns true if the start, end and handles of the curve are all at the same location.
	pub fn is_point(&self) -> bool {
		let start = self.start();

		self.get_points().all(|point| point.abs_diff_eq(start, MAX_ABSOLUTE_DIFFERENCE))
	}

	/// Returns true if every control point has finite coordinates.
	pub fn is_finite(&self) -> bool {
		self.start.is_finite() && self.end.is_finite() && self.handles.is_finite()
	}
}

mod core;
mod lookup;
mod manipulators;
mod solvers;
mod structs;
mod transform;

use crate::consts::*;
use glam::DVec2;
use std::fmt::{self, Debug, Formatter};
pub use structs::*;

/// Representation of the interior control point(s) of a curve, which also determine its degree.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum CurveHandles {
	Linear,
	/// Handle for a quadratic curve.
	Quadratic {
		/// Point representing the location of the single handle.
		handle: DVec2,
	},
	/// Handles for a cubic curve.
	Cubic {
		/// Point representing the location of the handle associated to the start point.
		handle_start: DVec2,
		/// Point representing the location of the handle associated to the end point.
		handle_end: DVec2,
	},
}

/// Bit patterns of the coordinates with `-0.0` folded into `0.0`, so that points which compare equal also hash equally.
fn point_bits(point: DVec2) -> [u64; 2] {
	(point + DVec2::ZERO).to_array().map(f64::to_bits)
}

impl std::hash::Hash for CurveHandles {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		std::mem::discriminant(self).hash(state);
		match *self {
			CurveHandles::Linear => {}
			CurveHandles::Quadratic { handle } => point_bits(handle).hash(state),
			CurveHandles::Cubic { handle_start, handle_end } => [point_bits(handle_start), point_bits(handle_end)].hash(state),
		}
	}
}

impl CurveHandles {
	/// Polynomial degree of a curve with these handles.
	pub fn degree(&self) -> usize {
		match self {
			CurveHandles::Linear => 1,
			CurveHandles::Quadratic { .. } => 2,
			CurveHandles::Cubic { .. } => 3,
		}
	}

	pub fn is_finite(&self) -> bool {
		match self {
			CurveHandles::Linear => true,
			CurveHandles::Quadratic { handle } => handle.is_finite(),
			CurveHandles::Cubic { handle_start, handle_end } => handle_start.is_finite() && handle_end.is_finite(),
		}
	}

	/// Get the coordinates of the first handle point. This represents the only handle in a quadratic curve.
	pub fn start(&self) -> Option<DVec2> {
		match *self {
			CurveHandles::Cubic { handle_start, .. } | CurveHandles::Quadratic { handle: handle_start } => Some(handle_start),
			_ => None,
		}
	}

	/// Get the coordinates of the second handle point. This will return `None` for a quadratic curve.
	pub fn end(&self) -> Option<DVec2> {
		match *self {
			CurveHandles::Cubic { handle_end, .. } => Some(handle_end),
			_ => None,
		}
	}

	/// Returns the handles that result from applying the transformation function to each handle point.
	#[must_use]
	pub fn apply_transformation(&self, transformation_function: impl Fn(DVec2) -> DVec2) -> Self {
		match *self {
			CurveHandles::Linear => Self::Linear,
			CurveHandles::Quadratic { handle } => Self::Quadratic { handle: transformation_function(handle) },
			CurveHandles::Cubic { handle_start, handle_end } => Self::Cubic {
				handle_start: transformation_function(handle_start),
				handle_end: transformation_function(handle_end),
			},
		}
	}

	#[must_use]
	pub fn reversed(self) -> Self {
		match self {
			CurveHandles::Cubic { handle_start, handle_end } => Self::Cubic {
				handle_start: handle_end,
				handle_end: handle_start,
			},
			_ => self,
		}
	}
}

/// A line, quadratic or cubic Bezier curve in the plane.
///
/// A curve is defined by 2 to 4 control points and never changes after construction.
/// Operations such as [Curve::split], [Curve::clip] and [Curve::transform] return new curves.
#[derive(Copy, Clone, PartialEq)]
pub struct Curve {
	start: DVec2,
	end: DVec2,
	handles: CurveHandles,
}

impl std::hash::Hash for Curve {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		[point_bits(self.start), point_bits(self.end)].hash(state);
		self.handles.hash(state);
	}
}

impl Debug for Curve {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let mut debug_struct = f.debug_struct("Curve");
		let mut debug_struct_ref = debug_struct.field("start", &self.start);
		debug_struct_ref = match self.handles {
			CurveHandles::Linear => debug_struct_ref,
			CurveHandles::Quadratic { handle } => debug_struct_ref.field("handle", &handle),
			CurveHandles::Cubic { handle_start, handle_end } => debug_struct_ref.field("handle_start", &handle_start).field("handle_end", &handle_end),
		};
		debug_struct_ref.field("end", &self.end).finish()
	}
}

use crate::consts::*;
use crate::{Curve, CurveHandles};

use glam::DVec2;
use std::fmt::Write;

/// A sink for path drawing commands. A curve is exported as one `move_to` followed by exactly one segment command.
pub trait PathEmitter {
	fn move_to(&mut self, point: DVec2);
	fn line_to(&mut self, end: DVec2);
	fn quad_to(&mut self, control: DVec2, end: DVec2);
	fn cubic_to(&mut self, control_start: DVec2, control_end: DVec2, end: DVec2);
}

/// A single drawing command recorded by the `Vec<PathCommand>` emitter.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum PathCommand {
	MoveTo(DVec2),
	LineTo(DVec2),
	QuadTo(DVec2, DVec2),
	CubicTo(DVec2, DVec2, DVec2),
}

impl PathEmitter for Vec<PathCommand> {
	fn move_to(&mut self, point: DVec2) {
		self.push(PathCommand::MoveTo(point));
	}

	fn line_to(&mut self, end: DVec2) {
		self.push(PathCommand::LineTo(end));
	}

	fn quad_to(&mut self, control: DVec2, end: DVec2) {
		self.push(PathCommand::QuadTo(control, end));
	}

	fn cubic_to(&mut self, control_start: DVec2, control_end: DVec2, end: DVec2) {
		self.push(PathCommand::CubicTo(control_start, control_end, end));
	}
}

/// Accumulates the `d` attribute of an SVG `path` element.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SvgPathEmitter {
	path: String,
}

impl SvgPathEmitter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn as_str(&self) -> &str {
		&self.path
	}

	pub fn into_string(self) -> String {
		self.path
	}

	fn command(&mut self, command: &str, points: &[DVec2]) {
		if !self.path.is_empty() {
			self.path.push(' ');
		}
		self.path.push_str(command);
		for (index, point) in points.iter().enumerate() {
			let separator = if index == 0 { "" } else { " " };
			// Writing to a `String` cannot fail
			let _ = write!(self.path, "{separator}{} {}", point.x, point.y);
		}
	}
}

impl PathEmitter for SvgPathEmitter {
	fn move_to(&mut self, point: DVec2) {
		self.command(SVG_ARG_MOVE, &[point]);
	}

	fn line_to(&mut self, end: DVec2) {
		self.command(SVG_ARG_LINEAR, &[end]);
	}

	fn quad_to(&mut self, control: DVec2, end: DVec2) {
		self.command(SVG_ARG_QUADRATIC, &[control, end]);
	}

	fn cubic_to(&mut self, control_start: DVec2, control_end: DVec2, end: DVec2) {
		self.command(SVG_ARG_CUBIC, &[control_start, control_end, end]);
	}
}

#[cfg(feature = "kurbo")]
impl PathEmitter for kurbo::BezPath {
	fn move_to(&mut self, point: DVec2) {
		kurbo::BezPath::move_to(self, kurbo::Point::new(point.x, point.y));
	}

	fn line_to(&mut self, end: DVec2) {
		kurbo::BezPath::line_to(self, kurbo::Point::new(end.x, end.y));
	}

	fn quad_to(&mut self, control: DVec2, end: DVec2) {
		kurbo::BezPath::quad_to(self, kurbo::Point::new(control.x, control.y), kurbo::Point::new(end.x, end.y));
	}

	fn cubic_to(&mut self, control_start: DVec2, control_end: DVec2, end: DVec2) {
		kurbo::BezPath::curve_to(
			self,
			kurbo::Point::new(control_start.x, control_start.y),
			kurbo::Point::new(control_end.x, control_end.y),
			kurbo::Point::new(end.x, end.y),
		);
	}
}

/// Functionality for handing a curve to external path consumers.
impl Curve {
	/// Drive the emitter with this curve: a `move_to` the start point followed by the segment command matching the degree.
	pub fn export<E: PathEmitter + ?Sized>(&self, emitter: &mut E) {
		emitter.move_to(self.start());
		match self.handles() {
			CurveHandles::Linear => emitter.line_to(self.end()),
			CurveHandles::Quadratic { handle } => emitter.quad_to(handle, self.end()),
			CurveHandles::Cubic { handle_start, handle_end } => emitter.cubic_to(handle_start, handle_end, self.end()),
		}
	}

	/// Return the SVG path data describing this curve, such as `M0 0 C1 1 2 1 3 0`.
	pub fn to_svg_path(&self) -> String {
		let mut emitter = SvgPathEmitter::new();
		self.export(&mut emitter);
		emitter.into_string()
	}
}

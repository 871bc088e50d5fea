use super::*;

/// Functionality for the getters of the various points in a curve.
impl Curve {
	/// Get the coordinates of the curve's start point.
	pub fn start(&self) -> DVec2 {
		self.start
	}

	/// Get the coordinates of the curve's end point.
	pub fn end(&self) -> DVec2 {
		self.end
	}

	pub fn handles(&self) -> CurveHandles {
		self.handles
	}

	/// Get the coordinates of the curve's first handle point. This represents the only handle in a quadratic curve.
	pub fn handle_start(&self) -> Option<DVec2> {
		self.handles.start()
	}

	/// Get the coordinates of the second handle point. This will return `None` for a quadratic curve.
	pub fn handle_end(&self) -> Option<DVec2> {
		self.handles.end()
	}

	/// Polynomial degree of the curve: 1 for a line, 2 for a quadratic, 3 for a cubic.
	pub fn degree(&self) -> usize {
		self.handles.degree()
	}

	/// Get an iterator over the coordinates of all points in the curve, in order.
	pub fn get_points(&self) -> impl Iterator<Item = DVec2> {
		let (points, count) = self.control_polygon();
		points.into_iter().take(count)
	}

	/// Get an iterator over the knots: the control points strictly between the start and end points.
	pub fn knots(&self) -> impl Iterator<Item = DVec2> {
		let (points, count) = self.control_polygon();
		points.into_iter().take(count - 1).skip(1)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn getters() {
		let p1 = DVec2::new(0., 0.);
		let p2 = DVec2::new(1., 1.);
		let p3 = DVec2::new(2., 1.);
		let p4 = DVec2::new(3., 0.);

		let cubic = Curve::from_cubic_dvec2(p1, p2, p3, p4);
		assert_eq!(cubic.start(), p1);
		assert_eq!(cubic.end(), p4);
		assert_eq!(cubic.handle_start(), Some(p2));
		assert_eq!(cubic.handle_end(), Some(p3));
		assert_eq!(cubic.degree(), 3);

		let quadratic = Curve::from_quadratic_dvec2(p1, p2, p4);
		assert_eq!(quadratic.handle_start(), Some(p2));
		assert_eq!(quadratic.handle_end(), None);
		assert_eq!(quadratic.degree(), 2);

		let line = Curve::from_linear_dvec2(p1, p4);
		assert_eq!(line.handle_start(), None);
		assert_eq!(line.handles(), CurveHandles::Linear);
		assert_eq!(line.degree(), 1);
	}

	#[test]
	fn points_and_knots() {
		let p1 = DVec2::new(0., 0.);
		let p2 = DVec2::new(1., 1.);
		let p3 = DVec2::new(2., 1.);
		let p4 = DVec2::new(3., 0.);

		let cubic = Curve::from_cubic_dvec2(p1, p2, p3, p4);
		assert_eq!(cubic.get_points().collect::<Vec<_>>(), vec![p1, p2, p3, p4]);
		assert_eq!(cubic.knots().collect::<Vec<_>>(), vec![p2, p3]);

		let quadratic = Curve::from_quadratic_dvec2(p1, p2, p4);
		assert_eq!(quadratic.get_points().collect::<Vec<_>>(), vec![p1, p2, p4]);
		assert_eq!(quadratic.knots().collect::<Vec<_>>(), vec![p2]);

		let line = Curve::from_linear_dvec2(p1, p4);
		assert_eq!(line.get_points().collect::<Vec<_>>(), vec![p1, p4]);
		assert_eq!(line.knots().count(), 0);
	}
}

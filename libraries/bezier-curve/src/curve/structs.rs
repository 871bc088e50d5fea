use crate::consts::DEFAULT_PROJECTION_SAMPLES;

/// Struct to represent optional parameters that can be passed to the `project` function.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ProjectionOptions {
	/// Number of evenly spaced parametric intervals searched for the closest point. The curve is evaluated `samples + 1` times.
	/// The distance between neighbouring samples bounds the error of the projection. The default value is `1000`, and values above `1000000` are clamped.
	pub samples: usize,
}

impl Default for ProjectionOptions {
	fn default() -> Self {
		Self { samples: DEFAULT_PROJECTION_SAMPLES }
	}
}

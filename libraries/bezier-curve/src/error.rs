use thiserror::Error;

/// Broad classification of a [CurveError].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorKind {
	/// The caller passed arguments that violate a documented precondition.
	InvalidArgument,
	/// An operation broke one of its own invariants. Not recoverable by retrying with the same input.
	InvalidOperation,
}

#[derive(Error, Copy, Clone, PartialEq, Debug)]
pub enum CurveError {
	#[error("A curve needs between 2 and 4 control points, but {0} were provided")]
	InvalidPointCount(usize),
	#[error("Clip range [{t0}, {t1}] must satisfy 0 <= t0 < t1 <= 1")]
	InvalidClipRange { t0: f64, t1: f64 },
	#[error("Clipping produced a curve with {actual} control points instead of {expected}")]
	DegenerateClip { expected: usize, actual: usize },
}

impl CurveError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			CurveError::InvalidPointCount(_) | CurveError::InvalidClipRange { .. } => ErrorKind::InvalidArgument,
			CurveError::DegenerateClip { .. } => ErrorKind::InvalidOperation,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn error_kinds() {
		assert_eq!(CurveError::InvalidPointCount(5).kind(), ErrorKind::InvalidArgument);
		assert_eq!(CurveError::InvalidClipRange { t0: 0.5, t1: 0.2 }.kind(), ErrorKind::InvalidArgument);
		assert_eq!(CurveError::DegenerateClip { expected: 4, actual: 1 }.kind(), ErrorKind::InvalidOperation);
	}

	#[test]
	fn error_messages() {
		assert_eq!(CurveError::InvalidPointCount(1).to_string(), "A curve needs between 2 and 4 control points, but 1 were provided");
		assert_eq!(CurveError::InvalidClipRange { t0: 0.75, t1: 0.25 }.to_string(), "Clip range [0.75, 0.25] must satisfy 0 <= t0 < t1 <= 1");
	}
}

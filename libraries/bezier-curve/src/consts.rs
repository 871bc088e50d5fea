// Implementation constants:
/// Number of chords in the polyline that defines the length of a curve.
/// Every length-dependent operation (length, arc length at `t`, `t` at arc length) samples the curve at exactly this resolution.
pub const LENGTH_SUBDIVISIONS: usize = 200;
/// Magnitude below which a derivative is treated as the zero vector instead of being normalized.
pub const MIN_NORMALIZABLE_LENGTH: f64 = 1e-12;
/// Upper bound on bisection steps when inverting the arc length.
pub const MAX_BISECTION_ITERATIONS: usize = 64;

// Method argument defaults:
/// Number of parametric intervals sampled when projecting a point onto a curve.
pub const DEFAULT_PROJECTION_SAMPLES: usize = 1000;
/// Upper bound on the projection samples; larger requests are clamped to it.
pub const MAX_PROJECTION_SAMPLES: usize = 1_000_000;
/// Tolerance on `t` for the bisection search of the parameter at a given arc length.
pub const DEFAULT_ARC_LENGTH_ERROR: f64 = 1e-5;
pub const DEFAULT_LUT_STEP_SIZE: usize = 10;

// Floating point comparisons:
pub const MAX_ABSOLUTE_DIFFERENCE: f64 = 1e-3;
pub const STRICT_MAX_ABSOLUTE_DIFFERENCE: f64 = 1e-6;

// SVG constants:
pub const SVG_ARG_MOVE: &str = "M";
pub const SVG_ARG_LINEAR: &str = "L";
pub const SVG_ARG_QUADRATIC: &str = "Q";
pub const SVG_ARG_CUBIC: &str = "C";

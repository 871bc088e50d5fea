//! Bezier-curve: evaluation, arc-length measurement, subdivision and projection of line, quadratic and cubic Bezier curves
#[cfg(test)]
pub(crate) mod compare;

mod consts;
mod curve;
mod error;
mod export;
mod utils;

pub use consts::{DEFAULT_PROJECTION_SAMPLES, LENGTH_SUBDIVISIONS};
pub use curve::*;
pub use error::*;
pub use export::*;
pub use utils::{TValue, TValueType};

//! Frame conversion for the apparent-position pipeline.
//!
//! Provides the equatorial → horizontal (alt-azimuth) transform and the
//! horizontal → Cartesian unit-vector helper used by front ends that
//! draw the pointing direction.

pub mod horizontal;

pub use horizontal::{equatorial_to_horizontal, horizontal_to_unit_vector, HorizontalCoords};

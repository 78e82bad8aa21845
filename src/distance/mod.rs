//! Stop locations and the pairwise distance model.
//!
//! Every strategy scores tours against a [`DistanceMatrix`] built once per
//! optimization request.

mod location;
mod matrix;

pub use location::Location;
pub use matrix::DistanceMatrix;

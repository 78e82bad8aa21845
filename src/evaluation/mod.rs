//! Tour scoring shared by all search strategies.

mod evaluator;

pub use evaluator::{is_permutation, tour_length, RouteEvaluator};

//! Simulated Annealing (SA) over closed tours.
//!
//! A single-solution trajectory search. Starting from a random tour, each
//! step swaps two positions and accepts worsening moves with a probability
//! that shrinks as the temperature cools geometrically, letting the search
//! escape local optima early and settle late.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};

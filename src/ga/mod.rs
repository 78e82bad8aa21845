//! Genetic Algorithm (GA) over closed tours.
//!
//! A population of permutation-encoded tours evolves by fitness-proportional
//! selection, ordered crossover and swap mutation. Fitness is the inverse
//! tour length, so shorter tours are fitter.
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, generation count, mutation rate
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: best tour of the final population with statistics
//!
//! # Submodules
//!
//! - [`operators`]: ordered crossover and swap mutation on `&[usize]` tours
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod config;
pub mod operators;
mod runner;

pub use config::GaConfig;
pub use runner::{fitness, GaResult, GaRunner};

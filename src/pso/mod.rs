//! Particle Swarm Optimization (PSO) over closed tours.
//!
//! Each particle carries one real-valued priority score per location; its
//! tour is the locations sorted by descending score. Scores are pulled
//! toward the positions each location holds in the particle's own best
//! tour and in the swarm's best tour, so good orderings spread through the
//! swarm.
//!
//! This is a priority-ordering adaptation of PSO rather than a geometric
//! one: "velocity" is a sort key, not a displacement.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Shi & Eberhart (1998), "A Modified Particle Swarm Optimizer"

mod config;
mod particle;
mod runner;

pub use config::PsoConfig;
pub use particle::Particle;
pub use runner::{PsoResult, PsoRunner};

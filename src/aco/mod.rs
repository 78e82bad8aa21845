//! Ant Colony Optimization (ACO) over closed tours.
//!
//! Each iteration a colony of ants builds tours city by city, preferring
//! edges that are short and carry much pheromone. After the whole colony
//! has finished, pheromone evaporates everywhere and is then reinforced on
//! the edges the ants used, in proportion to how short their tours were.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod config;
mod pheromone;
mod runner;

pub use config::AcoConfig;
pub use pheromone::PheromoneMatrix;
pub use runner::{AcoResult, AcoRunner};

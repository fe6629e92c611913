#[macro_use] extern crate log;

mod data;
mod disjoint_set;
mod error;
mod percolation;
mod stats;

pub use data::{Site, Direction, Reach, SiteState};
pub use disjoint_set::DisjointSet;
pub use error::{Error, Result};
pub use percolation::Percolation;
pub use stats::{PercolationStats, StatsConfig, estimate_threshold};

//! This crate exposes an epsilon-box dominance archive which merges and prunes collections of
//! multi-objective solutions into a single non-dominated frontier with bounded resolution.
//!
//! The archive compares solutions by the grid cell ("epsilon box") their objective values fall
//! into rather than by raw values: a solution whose box is better or equal on every objective
//! and strictly better on at least one dominates. Within one box, only the solution closest to
//! the box's lower corner is kept.
//!
//! # Examples
//!
//! ```
//! use pareto_sort::prelude::*;
//! use std::sync::Arc;
//!
//! let spec = ObjectiveSpec::new(vec![0, 1], vec![1., 1.]).unwrap();
//! let mut builder = ArchiveBuilder::new(spec, Arc::new(Environment::silent()));
//!
//! builder.extend(vec![
//!     Solution::new(vec![0.1, 0.1]),
//!     Solution::new(vec![0.2, 0.2]),
//!     Solution::new(vec![5.0, -5.0]),
//! ]);
//!
//! let archive = builder.build();
//! assert_eq!(archive.export(Projection::Full), vec![vec![0.1, 0.1], vec![5.0, -5.0]]);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod models;
pub mod prelude;
pub mod utils;

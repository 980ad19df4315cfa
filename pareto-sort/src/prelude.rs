//! This module reimports a common used types.

pub use crate::algorithms::epsilon::{Archive, ArchiveBuilder, ArchiveStatistics};
pub use crate::algorithms::epsilon::{Preferred, Verdict, compare};

pub use crate::models::{DEFAULT_EPSILON, EpsilonBox, ObjectiveSpec, Projection, Solution};

pub use crate::utils::{ArchiveError, ArchiveResult};
pub use crate::utils::{Environment, InfoLogger};
pub use crate::utils::{Float, compare_floats};

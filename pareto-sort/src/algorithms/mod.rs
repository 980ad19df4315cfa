//! This module contains algorithms used to build a non-dominated archive.

pub mod epsilon;

#[cfg(test)]
#[path = "../../tests/unit/models/objective_spec_test.rs"]
mod objective_spec_test;

use crate::models::Solution;
use crate::utils::{ArchiveError, ArchiveResult, Float};

/// A box width used for every objective when epsilons are not specified.
pub const DEFAULT_EPSILON: Float = 1e-9;

/// Specifies objective columns to compare on together with a box width (epsilon) per objective.
///
/// Invariants: both lists have the same non-zero length and every epsilon is a finite positive
/// number. Column bounds depend on the record width and are checked by `validate_width`.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectiveSpec {
    indices: Vec<usize>,
    epsilons: Vec<Float>,
}

impl ObjectiveSpec {
    /// Creates a new instance of `ObjectiveSpec`.
    pub fn new(indices: Vec<usize>, epsilons: Vec<Float>) -> ArchiveResult<Self> {
        if indices.is_empty() {
            return Err(ArchiveError::configuration("at least one objective is required"));
        }

        if indices.len() != epsilons.len() {
            return Err(ArchiveError::configuration(format!(
                "number of epsilons ({}) must match number of objectives ({})",
                epsilons.len(),
                indices.len()
            )));
        }

        if let Some((idx, epsilon)) = epsilons.iter().enumerate().find(|(_, eps)| !(eps.is_finite() && **eps > 0.)) {
            return Err(ArchiveError::configuration(format!(
                "epsilon for objective {idx} must be a positive number, got {epsilon}"
            )));
        }

        Ok(Self { indices, epsilons })
    }

    /// Creates an objective spec for records of given width. Objectives default to all columns
    /// in natural order, epsilons default to `DEFAULT_EPSILON` per objective.
    pub fn with_defaults(
        field_count: usize,
        indices: Option<Vec<usize>>,
        epsilons: Option<Vec<Float>>,
    ) -> ArchiveResult<Self> {
        let indices = indices.unwrap_or_else(|| (0..field_count).collect());
        let epsilons = epsilons.unwrap_or_else(|| vec![DEFAULT_EPSILON; indices.len()]);

        let spec = Self::new(indices, epsilons)?;
        spec.validate_width(field_count)?;

        Ok(spec)
    }

    /// Checks that all objective columns are within records of given width.
    pub fn validate_width(&self, field_count: usize) -> ArchiveResult<()> {
        match self.indices.iter().find(|&&column| column >= field_count) {
            Some(column) => Err(ArchiveError::configuration(format!(
                "objective column {column} exceeds input record bounds: records have {field_count} fields"
            ))),
            None => Ok(()),
        }
    }

    /// Returns objective column indices.
    pub fn indices(&self) -> &[usize] {
        self.indices.as_slice()
    }

    /// Returns box widths, one per objective.
    pub fn epsilons(&self) -> &[Float] {
        self.epsilons.as_slice()
    }

    /// Returns amount of objectives.
    pub fn size(&self) -> usize {
        self.indices.len()
    }

    /// Returns box index of the value along `idx`-th objective.
    #[inline]
    pub fn box_index(&self, value: Float, idx: usize) -> Float {
        (value / self.epsilons[idx]).floor()
    }

    /// Returns the epsilon box of the solution.
    pub fn box_of(&self, solution: &Solution) -> EpsilonBox {
        // adding zero turns negative zero into positive one
        EpsilonBox(
            solution
                .objectives(self)
                .enumerate()
                .map(|(idx, value)| (self.box_index(value, idx) + 0.).to_bits())
                .collect(),
        )
    }
}

/// A hashable epsilon box key which keeps exact floored coordinates, so boxes far from the
/// origin stay distinct.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EpsilonBox(Vec<u64>);

impl EpsilonBox {
    /// Returns box coordinates, one per objective.
    pub fn coordinates(&self) -> Vec<Float> {
        self.0.iter().map(|&bits| Float::from_bits(bits)).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/solution_test.rs"]
mod solution_test;

use crate::models::ObjectiveSpec;
use crate::utils::Float;

/// A numeric record read from an input collection. Immutable once created.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    fields: Vec<Float>,
}

impl Solution {
    /// Creates a new instance of `Solution`.
    pub fn new(fields: Vec<Float>) -> Self {
        Self { fields }
    }

    /// Returns all fields of the record.
    pub fn fields(&self) -> &[Float] {
        self.fields.as_slice()
    }

    /// Returns amount of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the value of `idx`-th objective.
    pub fn objective(&self, spec: &ObjectiveSpec, idx: usize) -> Float {
        self.fields[spec.indices()[idx]]
    }

    /// Returns objective values in configured order.
    pub fn objectives<'a>(&'a self, spec: &'a ObjectiveSpec) -> impl Iterator<Item = Float> + 'a {
        spec.indices().iter().map(move |&column| self.fields[column])
    }

    /// Returns an objective only record.
    pub fn project(&self, spec: &ObjectiveSpec) -> Vec<Float> {
        self.objectives(spec).collect()
    }

    /// Consumes the solution returning its fields.
    pub fn into_fields(self) -> Vec<Float> {
        self.fields
    }
}

//! Contains the data model: solutions, objective configuration and export shape.

mod objective_spec;
pub use self::objective_spec::*;

mod solution;
pub use self::solution::*;

/// Specifies which fields of archive members are exported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Projection {
    /// The full original record.
    #[default]
    Full,
    /// Only fields at objective indices, in configured order.
    ObjectivesOnly,
}

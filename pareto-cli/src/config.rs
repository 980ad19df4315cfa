//! Archive run configuration.

#[cfg(test)]
#[path = "../tests/unit/config_test.rs"]
mod config_test;

use pareto_sort::prelude::*;
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A field separator used when none is configured.
pub const DEFAULT_DELIMITER: &str = " ";

/// Amount of digits after the decimal point in exported values when none is configured.
pub const DEFAULT_PRECISION: usize = 8;

/// A run configuration. Every value is optional, missing ones fall back to defaults.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Zero-based column indices of objectives. Default is all columns in natural order.
    pub objectives: Option<Vec<usize>>,
    /// Box widths, one per objective. Default is `DEFAULT_EPSILON` for each objective.
    pub epsilons: Option<Vec<Float>>,
    /// A single character field separator used for input and output.
    pub delimiter: Option<String>,
    /// Specifies whether only objective fields are written to output.
    pub print_only_objectives: Option<bool>,
    /// Amount of digits after the decimal point in exported values.
    pub precision: Option<usize>,
    /// A minimum archive size starting from which comparisons run in parallel.
    pub parallel_threshold: Option<usize>,
}

/// Reads config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> ArchiveResult<Config> {
    serde_json::from_reader(reader).map_err(|err| ArchiveError::configuration(format!("cannot read config: {err}")))
}

impl Config {
    /// Returns a new config where values specified in `other` take precedence.
    pub fn override_with(self, other: Config) -> Self {
        Self {
            objectives: other.objectives.or(self.objectives),
            epsilons: other.epsilons.or(self.epsilons),
            delimiter: other.delimiter.or(self.delimiter),
            print_only_objectives: other.print_only_objectives.or(self.print_only_objectives),
            precision: other.precision.or(self.precision),
            parallel_threshold: other.parallel_threshold.or(self.parallel_threshold),
        }
    }

    /// Checks settings which do not depend on input records.
    pub fn validate(&self) -> ArchiveResult<()> {
        self.delimiter()?;

        if let (Some(objectives), Some(epsilons)) = (&self.objectives, &self.epsilons) {
            ObjectiveSpec::new(objectives.clone(), epsilons.clone())?;
        } else if let Some(epsilons) = &self.epsilons {
            // objective count is unknown until records are read, so only epsilon values are checked
            ObjectiveSpec::new((0..epsilons.len()).collect(), epsilons.clone())?;
        }

        Ok(())
    }

    /// Returns field separator as a single byte.
    pub fn delimiter(&self) -> ArchiveResult<u8> {
        let delimiter = self.delimiter.as_deref().unwrap_or(DEFAULT_DELIMITER);

        match delimiter.as_bytes() {
            [byte] => Ok(*byte),
            _ => Err(ArchiveError::configuration(format!(
                "delimiter must be a single byte character, got '{delimiter}'"
            ))),
        }
    }

    /// Returns output precision.
    pub fn precision(&self) -> usize {
        self.precision.unwrap_or(DEFAULT_PRECISION)
    }

    /// Returns the shape of exported records.
    pub fn projection(&self) -> Projection {
        if self.print_only_objectives.unwrap_or(false) { Projection::ObjectivesOnly } else { Projection::Full }
    }

    /// Creates objective spec for records of given width.
    pub fn create_objective_spec(&self, field_count: usize) -> ArchiveResult<ObjectiveSpec> {
        ObjectiveSpec::with_defaults(field_count, self.objectives.clone(), self.epsilons.clone())
    }

    /// Creates environment with given logger.
    pub fn create_environment(&self, logger: InfoLogger) -> Environment {
        Environment::new(logger, self.parallel_threshold)
    }
}

//! A pareto sort library public API: reads numeric records from many input collections, builds
//! an epsilon-box non-dominated archive and writes it back as delimited text.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/unit/lib_test.rs"]
mod lib_test;

pub mod config;
pub mod export;
pub mod import;

use crate::config::Config;
use crate::export::write_records;
use crate::import::RecordReader;
use pareto_sort::prelude::*;
use std::io::{Read, Write};
use std::sync::Arc;

/// Builds an archive from all records of all inputs, consumed in order. Returns `None` when
/// inputs have no records at all.
pub fn build_archive<R: Read>(
    config: &Config,
    inputs: Vec<(String, R)>,
    environment: Arc<Environment>,
) -> ArchiveResult<Option<Archive>> {
    config.validate()?;

    let delimiter = config.delimiter()?;
    let mut width = None;
    let mut builder: Option<ArchiveBuilder> = None;

    for (origin, reader) in inputs {
        let mut records = RecordReader::new(origin.as_str(), reader, delimiter, width);
        let mut total = 0_usize;

        for solution in records.by_ref() {
            let solution = solution?;

            if builder.is_none() {
                let spec = config.create_objective_spec(solution.len())?;
                (environment.logger)(&format!(
                    "records have {} fields, objectives: {:?}, epsilons: {:?}",
                    solution.len(),
                    spec.indices(),
                    spec.epsilons()
                ));
                builder = Some(ArchiveBuilder::new(spec, environment.clone()));
            }

            if let Some(builder) = builder.as_mut() {
                builder.insert(solution);
            }
            total += 1;
        }

        width = records.width();
        (environment.logger)(&format!("read {total} records from '{origin}'"));
    }

    let archive = builder.map(|builder| builder.build());
    if let Some(archive) = archive.as_ref() {
        (environment.logger)(&format!("archive occupies {} epsilon boxes", archive.occupied_boxes().len()));
    }

    Ok(archive)
}

/// Writes archive members using configured projection, delimiter and precision.
pub fn write_archive<W: Write>(config: &Config, archive: Option<&Archive>, writer: W) -> ArchiveResult<()> {
    let records = archive.map(|archive| archive.export(config.projection())).unwrap_or_default();

    write_records(writer, &records, config.delimiter()?, config.precision())
}

//! Export of archive records in scientific notation.

#[cfg(test)]
#[path = "../tests/unit/export_test.rs"]
mod export_test;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use pareto_sort::prelude::*;
use std::io::Write;

/// Formats value like C's `%.<precision>e`: the exponent is signed and has at least two digits.
pub fn format_scientific(value: Float, precision: usize) -> String {
    let formatted = format!("{value:.precision$e}");

    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };

            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => formatted,
    }
}

/// Writes records one per line with fields joined by the delimiter.
pub fn write_records<W: Write>(
    writer: W,
    records: &[Vec<Float>],
    delimiter: u8,
    precision: usize,
) -> ArchiveResult<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    records.iter().try_for_each(|record| {
        writer
            .write_record(record.iter().map(|value| format_scientific(*value, precision)))
            .map_err(std::io::Error::from)
    })?;

    writer.flush()?;

    Ok(())
}

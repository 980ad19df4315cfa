//! Import of delimited numeric records.

#[cfg(test)]
#[path = "../tests/unit/import_test.rs"]
mod import_test;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter, Trim};
use pareto_sort::prelude::*;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::Read;
use std::rc::Rc;

const COMMENT_MARKER: char = '#';

/// Reads fixed-width numeric records from one input collection.
///
/// Everything from `#` to the end of a line is a comment. Blank lines and lines with comments
/// only are skipped. When the delimiter is a whitespace character, consecutive delimiters are
/// treated as one.
pub struct RecordReader<R: Read> {
    origin: String,
    records: StringRecordsIntoIter<LineCountingReader<R>>,
    line_breaks: Rc<RefCell<LineBreaks>>,
    collapse_delimiters: bool,
    width: Option<usize>,
}

impl<R: Read> RecordReader<R> {
    /// Creates a new instance of `RecordReader`. When `width` is specified, every record must have
    /// that many fields, otherwise the width of the first record is used.
    pub fn new(origin: impl Into<String>, reader: R, delimiter: u8, width: Option<usize>) -> Self {
        let line_breaks = Rc::new(RefCell::new(LineBreaks::default()));
        let reader = LineCountingReader { inner: reader, consumed: 0, line_breaks: line_breaks.clone() };

        let records = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .comment(Some(COMMENT_MARKER as u8))
            .trim(Trim::All)
            .from_reader(reader)
            .into_records();

        let collapse_delimiters = delimiter.is_ascii_whitespace();

        Self { origin: origin.into(), records, line_breaks, collapse_delimiters, width }
    }

    /// Returns the record width established so far.
    pub fn width(&self) -> Option<usize> {
        self.width
    }

    /// Returns the physical line of the record which was read last.
    fn last_line(&self) -> u64 {
        let last_byte = self.records.reader().position().byte().saturating_sub(1);

        self.line_breaks.borrow_mut().line_of(last_byte)
    }

    fn parse_record(&mut self, record: &StringRecord) -> ArchiveResult<Option<Solution>> {
        let fields = strip_comment(record)
            .into_iter()
            .filter(|field| !(self.collapse_delimiters && field.is_empty()))
            .collect::<Vec<_>>();

        if fields.iter().all(|field| field.is_empty()) {
            return Ok(None);
        }

        let line = self.last_line();
        let fields = fields
            .into_iter()
            .enumerate()
            .map(|(idx, field)| match field.parse::<Float>() {
                Ok(value) if value.is_nan() => {
                    Err(ArchiveError::malformed(&self.origin, line, format!("field {idx} is not a number: '{field}'")))
                }
                Ok(value) => Ok(value),
                Err(err) => Err(ArchiveError::malformed(
                    &self.origin,
                    line,
                    format!("cannot parse field {idx}: '{field}': {err}"),
                )),
            })
            .collect::<ArchiveResult<Vec<_>>>()?;

        match self.width {
            Some(width) if width != fields.len() => Err(ArchiveError::malformed(
                &self.origin,
                line,
                format!("expected {width} fields, got {}", fields.len()),
            )),
            Some(_) => Ok(Some(Solution::new(fields))),
            None => {
                self.width = Some(fields.len());
                Ok(Some(Solution::new(fields)))
            }
        }
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = ArchiveResult<Solution>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(err) => return Some(Err(ArchiveError::malformed(&self.origin, self.last_line(), err.to_string()))),
            };

            match self.parse_record(&record) {
                Ok(Some(solution)) => return Some(Ok(solution)),
                Ok(None) => continue,
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

/// Returns record fields preceding a comment marker, the field with the marker is truncated.
fn strip_comment(record: &StringRecord) -> Vec<&str> {
    let mut fields = Vec::with_capacity(record.len());

    for field in record.iter() {
        if let Some((head, _)) = field.split_once(COMMENT_MARKER) {
            fields.push(head.trim());
            break;
        }
        fields.push(field);
    }

    fields
}

/// Keeps byte offsets of line breaks which are not yet behind the reader.
#[derive(Default)]
struct LineBreaks {
    passed: u64,
    offsets: VecDeque<u64>,
}

impl LineBreaks {
    /// Returns one-based line number of the byte at given offset. Offsets must not decrease
    /// between calls.
    fn line_of(&mut self, byte: u64) -> u64 {
        while self.offsets.front().is_some_and(|&offset| offset < byte) {
            self.offsets.pop_front();
            self.passed += 1;
        }

        self.passed + 1
    }
}

/// Records positions of all line breaks passing through the underlying reader.
struct LineCountingReader<R> {
    inner: R,
    consumed: u64,
    line_breaks: Rc<RefCell<LineBreaks>>,
}

impl<R: Read> Read for LineCountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let size = self.inner.read(buf)?;
        let consumed = self.consumed;

        self.line_breaks.borrow_mut().offsets.extend(
            buf[..size].iter().enumerate().filter(|(_, byte)| **byte == b'\n').map(|(idx, _)| consumed + idx as u64),
        );
        self.consumed += size as u64;

        Ok(size)
    }
}

//! An incrementally built archive of epsilon-box non-dominated solutions.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/epsilon/archive_test.rs"]
mod archive_test;

use super::{Verdict, compare};
use crate::models::{EpsilonBox, ObjectiveSpec, Projection, Solution};
use crate::utils::{Environment, Float, compact_by_indices, parallel_collect};
use rustc_hash::FxHashSet;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Keeps counts of insertion outcomes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArchiveStatistics {
    /// Total amount of inserted candidates.
    pub candidates: usize,
    /// Amount of candidates appended to the archive.
    pub admitted: usize,
    /// Amount of candidates rejected by an existing member.
    pub rejected: usize,
    /// Amount of members removed by later candidates.
    pub removed: usize,
}

impl Display for ArchiveStatistics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "candidates: {}, admitted: {}, rejected: {}, removed: {}",
            self.candidates, self.admitted, self.rejected, self.removed
        )
    }
}

/// Maintains an ordered collection of solutions where no member box-dominates another one.
pub struct ArchiveBuilder {
    spec: ObjectiveSpec,
    members: Vec<Solution>,
    environment: Arc<Environment>,
    statistics: ArchiveStatistics,
}

/// A result of scanning archive members against one candidate.
struct ScanOutcome {
    /// Positions of members dominated by the candidate, ascending.
    dominated: Vec<usize>,
    is_rejected: bool,
}

impl ArchiveBuilder {
    /// Creates a new instance of `ArchiveBuilder` with an empty archive.
    pub fn new(spec: ObjectiveSpec, environment: Arc<Environment>) -> Self {
        Self { spec, members: Vec::new(), environment, statistics: ArchiveStatistics::default() }
    }

    /// Inserts a candidate: removes all members it dominates and appends it unless some member
    /// dominates it. Members are compared in archive order and the scan stops at the first member
    /// which dominates the candidate; removals found before that point are still applied.
    pub fn insert(&mut self, candidate: Solution) {
        let outcome = if self.environment.is_parallel_for(self.members.len()) {
            self.scan_parallel(&candidate)
        } else {
            self.scan_sequential(&candidate)
        };

        self.statistics.candidates += 1;
        self.statistics.removed += outcome.dominated.len();
        compact_by_indices(&mut self.members, &outcome.dominated);

        if outcome.is_rejected {
            self.statistics.rejected += 1;
        } else {
            self.statistics.admitted += 1;
            self.members.push(candidate);
        }
    }

    /// Inserts all candidates in iteration order.
    pub fn extend<I: IntoIterator<Item = Solution>>(&mut self, candidates: I) {
        candidates.into_iter().for_each(|candidate| self.insert(candidate));
    }

    /// Returns current archive members.
    pub fn members(&self) -> &[Solution] {
        self.members.as_slice()
    }

    /// Returns amount of archive members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if archive has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns insertion statistics collected so far.
    pub fn statistics(&self) -> &ArchiveStatistics {
        &self.statistics
    }

    /// Finishes building and returns the final archive.
    pub fn build(self) -> Archive {
        (self.environment.logger)(&format!(
            "archive is built with {} members, {}",
            self.members.len(),
            self.statistics
        ));

        Archive { spec: self.spec, members: self.members }
    }

    fn scan_sequential(&self, candidate: &Solution) -> ScanOutcome {
        apply_verdicts(self.members.iter().map(|member| compare(member, candidate, &self.spec)))
    }

    /// Compares all members at once and applies verdicts in archive order afterwards, so the
    /// outcome is the same as for sequential scan.
    fn scan_parallel(&self, candidate: &Solution) -> ScanOutcome {
        let spec = &self.spec;
        let verdicts = parallel_collect(&self.members, |member| compare(member, candidate, spec));

        apply_verdicts(verdicts.into_iter())
    }
}

/// Consumes verdicts of `compare(member, candidate)` in member order until the candidate is rejected.
fn apply_verdicts<I: Iterator<Item = Verdict>>(verdicts: I) -> ScanOutcome {
    let mut dominated = Vec::new();

    for (idx, verdict) in verdicts.enumerate() {
        if verdict.is_b_winner() {
            dominated.push(idx);
        } else if verdict.is_a_winner() {
            return ScanOutcome { dominated, is_rejected: true };
        }
    }

    ScanOutcome { dominated, is_rejected: false }
}

/// A final set of epsilon-box non-dominated solutions.
pub struct Archive {
    spec: ObjectiveSpec,
    members: Vec<Solution>,
}

impl Archive {
    /// Returns archive members in archive order.
    pub fn members(&self) -> &[Solution] {
        self.members.as_slice()
    }

    /// Returns amount of archive members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if archive has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns epsilon boxes occupied by archive members.
    pub fn occupied_boxes(&self) -> FxHashSet<EpsilonBox> {
        self.members.iter().map(|member| self.spec.box_of(member)).collect()
    }

    /// Exports archive members as numeric records of the requested shape.
    pub fn export(&self, projection: Projection) -> Vec<Vec<Float>> {
        self.members
            .iter()
            .map(|member| match projection {
                Projection::Full => member.fields().to_vec(),
                Projection::ObjectivesOnly => member.project(&self.spec),
            })
            .collect()
    }
}

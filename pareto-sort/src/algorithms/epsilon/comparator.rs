//! Implements epsilon-box dominance comparison of two solutions.
//!
//! Objective space is partitioned into a grid whose cell width along each objective is that
//! objective's epsilon. Solutions are compared by the cells (boxes) they fall in: a solution
//! whose box index is lower or equal on every objective and lower on at least one dominates.
//! If each solution wins on some objective, they are mutually non-dominated. Two solutions in
//! the same box are resolved by squared distance to the box's lower corner.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/epsilon/comparator_test.rs"]
mod comparator_test;

use crate::models::{ObjectiveSpec, Solution};
use crate::utils::{Float, compare_floats};
use std::cmp::Ordering;

/// Specifies which of two compared solutions is kept when both fall into the same box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preferred {
    /// The first argument of comparison.
    A,
    /// The second argument of comparison.
    B,
}

/// A result of epsilon-box comparison of two solutions `a` and `b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Box of `a` dominates box of `b`.
    ADominatesB,
    /// Box of `b` dominates box of `a`.
    BDominatesA,
    /// Boxes differ and neither dominates the other: both solutions are kept.
    Incomparable,
    /// Both solutions share the same box, the one closer to the box corner is preferred.
    SameBox(Preferred),
}

impl Verdict {
    /// Returns the verdict as seen with arguments swapped.
    pub fn swap(self) -> Self {
        match self {
            Verdict::ADominatesB => Verdict::BDominatesA,
            Verdict::BDominatesA => Verdict::ADominatesB,
            Verdict::Incomparable => Verdict::Incomparable,
            Verdict::SameBox(Preferred::A) => Verdict::SameBox(Preferred::B),
            Verdict::SameBox(Preferred::B) => Verdict::SameBox(Preferred::A),
        }
    }

    /// Returns true if `a` wins either by dominance or by same box preference.
    pub fn is_a_winner(self) -> bool {
        matches!(self, Verdict::ADominatesB | Verdict::SameBox(Preferred::A))
    }

    /// Returns true if `b` wins either by dominance or by same box preference.
    pub fn is_b_winner(self) -> bool {
        matches!(self, Verdict::BDominatesA | Verdict::SameBox(Preferred::B))
    }
}

/// Compares two solutions using epsilon-box dominance over objectives of given spec.
pub fn compare(a: &Solution, b: &Solution, spec: &ObjectiveSpec) -> Verdict {
    let mut a_wins = false;
    let mut b_wins = false;

    for (idx, (a_value, b_value)) in a.objectives(spec).zip(b.objectives(spec)).enumerate() {
        match compare_floats(spec.box_index(a_value, idx), spec.box_index(b_value, idx)) {
            Ordering::Less => {
                a_wins = true;
                if b_wins {
                    return Verdict::Incomparable;
                }
            }
            Ordering::Greater => {
                b_wins = true;
                if a_wins {
                    return Verdict::Incomparable;
                }
            }
            Ordering::Equal => {}
        }
    }

    match (a_wins, b_wins) {
        (true, _) => Verdict::ADominatesB,
        (_, true) => Verdict::BDominatesA,
        _ => {
            // NOTE equal distances prefer `b`, so a newcomer replaces an equally placed member
            if corner_distance(a, spec) < corner_distance(b, spec) {
                Verdict::SameBox(Preferred::A)
            } else {
                Verdict::SameBox(Preferred::B)
            }
        }
    }
}

/// Returns squared euclidean distance from solution's objective vector to the lower corner of its box.
pub fn corner_distance(solution: &Solution, spec: &ObjectiveSpec) -> Float {
    solution
        .objectives(spec)
        .zip(spec.epsilons())
        .enumerate()
        .map(|(idx, (value, epsilon))| {
            let offset = value - spec.box_index(value, idx) * epsilon;
            offset * offset
        })
        .sum()
}

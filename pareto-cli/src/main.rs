//! A command line interface to merge and prune results of multiple optimization runs into a single
//! epsilon-box non-dominated archive.
//!
//! ## Usage
//!
//! - merge two runs using first two columns as objectives with box width 0.1 for both:
//!
//!     `pareto-sort -i run1.txt run2.txt -o pareto.txt --objectives 0 1 --epsilons 0.1 0.1`
//!
//! - read comma separated files and write only objective columns:
//!
//!     `pareto-sort -i run1.csv --delimiter , --print-only-objectives`
//!
//! For more details, simply run
//!
//!     pareto-sort --help

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

mod commands;

use self::commands::sort::{get_sort_app, run_sort};
use std::process;

fn main() {
    let matches = get_sort_app().get_matches();

    if let Err(err) = run_sort(&matches) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

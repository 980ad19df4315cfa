#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

use rayon::prelude::*;

/// Maps collection and collects results into vector in parallel preserving the source order.
pub fn parallel_collect<T, F, R>(source: &[T], map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(&T) -> R + Sync + Send,
    R: Send,
{
    source.par_iter().map(map_op).collect()
}

/// Removes items at given indices from the vector in a single pass keeping the order of the rest.
/// Indices must be sorted in ascending order.
pub fn compact_by_indices<T>(items: &mut Vec<T>, indices: &[usize]) {
    if indices.is_empty() {
        return;
    }

    debug_assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));

    let mut position = 0;
    let mut next = indices.iter().peekable();
    items.retain(|_| {
        let keep = next.peek().is_none_or(|&&idx| idx != position);
        if !keep {
            next.next();
        }
        position += 1;

        keep
    });
}

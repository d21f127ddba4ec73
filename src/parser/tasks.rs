//! Per-candidate fan-out.
use rayon::prelude::*;

/// Applies `task` to every item and returns the results in item order.
///
/// The parallel path writes into a pre-sized indexed vector, so both modes produce identical
/// output for a pure `task`.
pub(crate) fn run_tasks<T, R, F>(items: &[T], sequential: bool, task: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    if sequential {
        return items.iter().map(task).collect();
    }

    let mut results = Vec::with_capacity(items.len());
    items.par_iter().map(task).collect_into_vec(&mut results);
    results
}

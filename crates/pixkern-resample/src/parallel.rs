use rayon::prelude::*;

/// Controls how the buffer-level resize is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool to process destination rows in parallel.
    #[default]
    ParallelRows,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,
}

/// Apply `f(row_index, row)` to every `width`-long row of `dst`.
///
/// Rows are disjoint slices, so `f` only needs to be `Sync` to run them on
/// several threads at once.
pub(crate) fn for_each_row_mut<S>(
    dst: &mut [S],
    width: usize,
    strategy: ExecutionStrategy,
    f: impl Fn(usize, &mut [S]) + Send + Sync,
) where
    S: Send,
{
    if width == 0 {
        return;
    }
    match strategy {
        ExecutionStrategy::ParallelRows => dst
            .par_chunks_exact_mut(width)
            .enumerate()
            .for_each(|(i, row)| f(i, row)),
        ExecutionStrategy::Serial => dst
            .chunks_exact_mut(width)
            .enumerate()
            .for_each(|(i, row)| f(i, row)),
    }
}

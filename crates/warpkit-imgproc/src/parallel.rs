use rayon::prelude::*;
use thiserror::Error;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// The row stride must be valid.
    #[error("row stride must be > 0 and divide the buffer length, got {0}")]
    InvalidRowStride(usize),
}

/// Controls how row-parallel operations are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool to process rows in parallel.
    #[default]
    ParallelRows,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

/// Apply a function to every row of a row-major buffer.
///
/// The buffer is split into disjoint rows of `stride` elements and `f` receives
/// the row index together with the mutable row, so rows can be processed
/// concurrently without any synchronization.
///
/// # Arguments
///
/// * `dst` - The destination buffer.
/// * `stride` - The number of elements per row (width * channels).
/// * `strategy` - The execution strategy.
/// * `f` - The operation to perform on each row.
pub fn par_iter_rows_indexed<T, F>(
    dst: &mut [T],
    stride: usize,
    strategy: ExecutionStrategy,
    f: F,
) -> Result<(), ParallelError>
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    if stride == 0 || dst.len() % stride != 0 {
        return Err(ParallelError::InvalidRowStride(stride));
    }

    match strategy {
        ExecutionStrategy::Serial => {
            dst.chunks_exact_mut(stride)
                .enumerate()
                .for_each(|(row, chunk)| f(row, chunk));
        }
        ExecutionStrategy::ParallelRows => {
            dst.par_chunks_exact_mut(stride)
                .enumerate()
                .for_each(|(row, chunk)| f(row, chunk));
        }
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ParallelError::InvalidThreadCount(n));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            pool.install(|| {
                dst.par_chunks_exact_mut(stride)
                    .enumerate()
                    .for_each(|(row, chunk)| f(row, chunk));
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_rows(strategy: ExecutionStrategy) -> Result<Vec<usize>, ParallelError> {
        let mut dst = vec![0usize; 6];
        par_iter_rows_indexed(&mut dst, 2, strategy, |row, chunk| {
            chunk
                .iter_mut()
                .enumerate()
                .for_each(|(i, v)| *v = row * 10 + i);
        })?;
        Ok(dst)
    }

    #[test]
    fn test_rows_serial() -> Result<(), ParallelError> {
        assert_eq!(fill_rows(ExecutionStrategy::Serial)?, vec![0, 1, 10, 11, 20, 21]);
        Ok(())
    }

    #[test]
    fn test_rows_parallel() -> Result<(), ParallelError> {
        assert_eq!(
            fill_rows(ExecutionStrategy::ParallelRows)?,
            vec![0, 1, 10, 11, 20, 21]
        );
        Ok(())
    }

    #[test]
    fn test_rows_fixed() -> Result<(), ParallelError> {
        assert_eq!(
            fill_rows(ExecutionStrategy::Fixed(2))?,
            vec![0, 1, 10, 11, 20, 21]
        );
        Ok(())
    }

    #[test]
    fn test_rows_fixed_error() {
        let res = fill_rows(ExecutionStrategy::Fixed(0));
        assert_eq!(res, Err(ParallelError::InvalidThreadCount(0)));
    }

    #[test]
    fn test_rows_invalid_stride() {
        let mut dst = vec![0u8; 5];
        let res = par_iter_rows_indexed(&mut dst, 2, ExecutionStrategy::Serial, |_, _| {});
        assert_eq!(res, Err(ParallelError::InvalidRowStride(2)));

        let res = par_iter_rows_indexed(&mut dst, 0, ExecutionStrategy::Serial, |_, _| {});
        assert_eq!(res, Err(ParallelError::InvalidRowStride(0)));
    }
}

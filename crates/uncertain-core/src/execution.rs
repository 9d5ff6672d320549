//! Execution engines for controlling computation strategy
//!
//! The pairwise step of distribution arithmetic is embarrassingly parallel.
//! An engine decides how the outer index range is split and where the
//! chunks run; the caller merges the per-chunk results.

#[cfg(feature = "parallel")]
use crate::Result;

/// Execution strategy for chunked operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Process chunks sequentially on the calling thread
    Sequential,
    /// Process chunks in parallel
    Parallel,
}

/// Trait for execution engines that control how chunked work is performed
pub trait ExecutionEngine: Clone + Send + Sync {
    /// Map a function over consecutive chunks of `0..count`
    ///
    /// Results are returned in chunk order.
    fn map_ranges<F, R>(&self, count: usize, chunk_size: usize, f: F) -> Vec<R>
    where
        F: Fn(std::ops::Range<usize>) -> R + Sync + Send,
        R: Send;

    /// Get the execution strategy
    fn strategy(&self) -> ExecutionStrategy;

    /// Get the number of threads available
    fn num_threads(&self) -> usize;

    /// Chunk size that gives every thread a few chunks to balance load
    fn chunk_size(&self, n_items: usize) -> usize {
        let target_chunks = self.num_threads() * 4;
        n_items.div_ceil(target_chunks.max(1)).max(1)
    }
}

/// Split `0..count` into consecutive ranges of at most `chunk_size` items
fn ranges(count: usize, chunk_size: usize) -> impl Iterator<Item = std::ops::Range<usize>> {
    let chunk_size = chunk_size.max(1);
    (0..count)
        .step_by(chunk_size)
        .map(move |start| start..(start + chunk_size).min(count))
}

/// Sequential execution engine
///
/// Runs every chunk on the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialEngine;

impl SequentialEngine {
    /// Create a new sequential engine
    pub fn new() -> Self {
        Self
    }
}

impl ExecutionEngine for SequentialEngine {
    fn map_ranges<F, R>(&self, count: usize, chunk_size: usize, f: F) -> Vec<R>
    where
        F: Fn(std::ops::Range<usize>) -> R + Sync + Send,
        R: Send,
    {
        ranges(count, chunk_size).map(f).collect()
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Sequential
    }

    fn num_threads(&self) -> usize {
        1
    }

    fn chunk_size(&self, n_items: usize) -> usize {
        n_items.max(1)
    }
}

/// Parallel execution engine using Rayon
///
/// Executes chunks on Rayon's global pool or on a dedicated pool.
#[cfg(feature = "parallel")]
#[derive(Clone, Debug, Default)]
pub struct ParallelEngine {
    thread_pool: Option<std::sync::Arc<rayon::ThreadPool>>,
}

#[cfg(feature = "parallel")]
impl ParallelEngine {
    /// Create a new parallel engine with the global thread pool
    pub fn new() -> Self {
        Self { thread_pool: None }
    }

    /// Create a new parallel engine with a custom thread pool
    pub fn with_thread_pool(pool: std::sync::Arc<rayon::ThreadPool>) -> Self {
        Self {
            thread_pool: Some(pool),
        }
    }

    /// Create with a specific number of threads
    pub fn with_num_threads(num_threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|e| crate::Error::Execution(format!("Failed to create thread pool: {e}")))?;

        Ok(Self {
            thread_pool: Some(std::sync::Arc::new(pool)),
        })
    }
}

#[cfg(feature = "parallel")]
impl ExecutionEngine for ParallelEngine {
    fn map_ranges<F, R>(&self, count: usize, chunk_size: usize, f: F) -> Vec<R>
    where
        F: Fn(std::ops::Range<usize>) -> R + Sync + Send,
        R: Send,
    {
        use rayon::prelude::*;

        let chunks: Vec<std::ops::Range<usize>> = ranges(count, chunk_size).collect();
        if let Some(pool) = &self.thread_pool {
            pool.install(|| chunks.into_par_iter().map(&f).collect())
        } else {
            chunks.into_par_iter().map(&f).collect()
        }
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Parallel
    }

    fn num_threads(&self) -> usize {
        if let Some(pool) = &self.thread_pool {
            pool.current_num_threads()
        } else {
            rayon::current_num_threads()
        }
    }
}

/// Create a sequential engine
pub fn sequential() -> SequentialEngine {
    SequentialEngine::new()
}

/// Create a parallel engine on the global Rayon pool
#[cfg(feature = "parallel")]
pub fn parallel() -> ParallelEngine {
    ParallelEngine::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_cover_everything() {
        let chunks: Vec<_> = ranges(10, 4).collect();
        assert_eq!(chunks, vec![0..4, 4..8, 8..10]);
        assert_eq!(ranges(0, 4).count(), 0);
        assert_eq!(ranges(3, 0).count(), 3);
    }

    #[test]
    fn test_sequential_engine() {
        let engine = sequential();
        assert_eq!(engine.strategy(), ExecutionStrategy::Sequential);
        assert_eq!(engine.num_threads(), 1);
        assert_eq!(engine.chunk_size(1000), 1000);

        let sums = engine.map_ranges(10, 3, |r| r.sum::<usize>());
        assert_eq!(sums, vec![3, 12, 21, 9]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_engine_matches_sequential() {
        let engine = ParallelEngine::with_num_threads(2).unwrap();
        assert_eq!(engine.strategy(), ExecutionStrategy::Parallel);
        assert_eq!(engine.num_threads(), 2);

        let par = engine.map_ranges(100, 7, |r| r.sum::<usize>());
        let seq = sequential().map_ranges(100, 7, |r| r.sum::<usize>());
        assert_eq!(par, seq);
    }
}

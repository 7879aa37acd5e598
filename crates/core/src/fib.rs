//! Fibonacci computation
//!
//! Two deliberately different algorithms over the same contract:
//! F(0) = 0, F(1) = 1, F(n) = F(n-1) + F(n-2).
//!
//! The recursive variant is the reference behavior and is what the
//! `fib` binary prints. It is O(2^n) on purpose; do not memoize it.
//! The iterative variant is the O(n) counterpart, exposed as library
//! API even though no binary calls it.
//!
//! All additions are checked. Results are `u64`, so the first index
//! that cannot be represented is 94.

use tracing::debug;

/// Error type for Fibonacci computation.
///
/// This allows proper error propagation using `?` instead of wrapping
/// silently on overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FibError {
    /// The addition producing F(n) does not fit in a `u64`.
    Overflow { n: u32 },
}

impl std::fmt::Display for FibError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FibError::Overflow { n } => {
                write!(f, "F({}) does not fit in a 64-bit unsigned integer", n)
            }
        }
    }
}

impl std::error::Error for FibError {}

/// Which algorithm [`FibConfig::compute`] runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Algorithm {
    /// Naive binary recursion, O(2^n) time, O(n) call depth (default)
    #[default]
    Recursive,
    /// Two running values updated in a loop, O(n) time, O(1) space
    Iterative,
}

/// Configuration for Fibonacci computation
///
/// # Example
///
/// ```rust
/// use kata_core::{Algorithm, FibConfig};
///
/// let config = FibConfig::new().with_algorithm(Algorithm::Iterative);
/// assert_eq!(config.compute(10), Ok(55));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FibConfig {
    /// Algorithm used by [`FibConfig::compute`]
    pub algorithm: Algorithm,
}

impl FibConfig {
    /// Create a new default configuration (recursive algorithm)
    pub fn new() -> Self {
        FibConfig::default()
    }

    /// Set the algorithm (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Compute F(n) with the configured algorithm
    pub fn compute(&self, n: u32) -> Result<u64, FibError> {
        debug!("computing F({}) via {:?}", n, self.algorithm);
        match self.algorithm {
            Algorithm::Recursive => fib_recursive(n),
            Algorithm::Iterative => fib_iterative(n),
        }
    }
}

/// Compute F(n) iteratively
///
/// Maintains two running values and updates them `n` times.
pub fn fib_iterative(n: u32) -> Result<u64, FibError> {
    let mut a: u64 = 0;
    let mut b: u64 = 1;
    for _ in 0..n {
        let next = a.checked_add(b).ok_or(FibError::Overflow { n })?;
        a = b;
        b = next;
    }
    Ok(a)
}

/// Compute F(n) by naive binary recursion
///
/// Base case returns `n` when `n <= 1`; otherwise the sum of the two
/// smaller calls. Exponential on purpose: the recursion tree is the
/// thing being demonstrated, not the result.
pub fn fib_recursive(n: u32) -> Result<u64, FibError> {
    if n <= 1 {
        return Ok(n as u64);
    }
    let a = fib_recursive(n - 1)?;
    let b = fib_recursive(n - 2)?;
    a.checked_add(b).ok_or(FibError::Overflow { n })
}

/// Compute F(n) by naive binary recursion, reporting the call count
///
/// Returns `(value, calls)` where `calls` counts every invocation in
/// the recursion tree, including the outermost one. For the unmemoized
/// recursion this satisfies:
///
/// ```text
/// calls(0) = calls(1) = 1
/// calls(n) = calls(n-1) + calls(n-2) + 1
/// ```
///
/// A smaller count means memoization crept in; a larger one means the
/// recursion shape changed. Either is a regression.
pub fn fib_recursive_counted(n: u32) -> Result<(u64, u64), FibError> {
    fn go(n: u32, calls: &mut u64) -> Result<u64, FibError> {
        *calls += 1;
        if n <= 1 {
            return Ok(n as u64);
        }
        let a = go(n - 1, calls)?;
        let b = go(n - 2, calls)?;
        a.checked_add(b).ok_or(FibError::Overflow { n })
    }

    let mut calls = 0;
    let value = go(n, &mut calls)?;
    Ok((value, calls))
}

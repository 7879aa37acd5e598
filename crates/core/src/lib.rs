//! Kata Core: shared library for two small command-line exercises
//!
//! This crate provides the computations behind the `fib` and `fancy-if`
//! binaries. Each exercise is a leaf: no shared state, no I/O, nothing
//! suspended across calls.
//!
//! # Modules
//!
//! - `fib`: iterative and naive-recursive Fibonacci over checked `u64`
//!   arithmetic, plus the config selecting between them
//! - `select`: generic selection of one of two already-evaluated values

pub mod fib;
pub mod select;

// Re-export key types and functions
pub use fib::{Algorithm, FibConfig, FibError, fib_iterative, fib_recursive, fib_recursive_counted};
pub use select::fancy_if;

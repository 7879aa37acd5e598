//! Fibonacci calculator CLI
//!
//! Takes one non-negative integer and prints its Fibonacci number.
//! Output comes from the naive recursive algorithm; the iterative one
//! lives in `kata-core` for callers who want it.

use clap::Parser;
use kata_core::FibConfig;
use std::process;
use tracing::debug;

#[derive(Parser)]
#[command(name = "fib")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compute the n-th Fibonacci number", long_about = None)]
struct Cli {
    /// Index into the sequence (F(0) = 0, F(1) = 1)
    n: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Malformed or missing input never reaches the computation; clap
    // exits nonzero with its own diagnostic on stderr.
    let cli = Cli::parse();
    debug!("parsed n={}", cli.n);

    match FibConfig::new().compute(cli.n) {
        Ok(value) => println!("{}", value),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

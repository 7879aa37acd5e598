//! Conditional-value selector demo
//!
//! Evaluates two candidate values, hands them to `fancy_if` with a
//! hardcoded true condition, and prints the selected one. Expected
//! output: `3`.

use clap::Parser;
use kata_core::fancy_if;
use tracing::debug;

#[derive(Parser)]
#[command(name = "fancy-if")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Select one of two pre-computed values", long_about = None)]
struct Cli {}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // No flags or positionals; parsing still rejects stray arguments.
    let _cli = Cli::parse();

    // Both arms are evaluated here, before the call. The selection
    // only picks between finished values.
    let selected = fancy_if(true, 1 + 2, 3 + 4);
    debug!("selected {}", selected);

    println!("{}", selected);
}

//! Drive a Rover
//!
//! This example drives a rover from the command line and prints where it ends up.
//!
//! Key concepts:
//! - Validated construction from raw coordinates and a heading symbol
//! - Instruction strings with noise silently dropped
//! - Optional step-by-step trace
//!
//! Run with: cargo run --example drive -- --x 0 --y 0 --heading N FFRBLL --trace
//! Set RUST_LOG=mars_rover=trace to see every step logged.

use clap::Parser;
use mars_rover::simulator::{initialize, run, run_traced};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "drive", about = "Drive a rover across the integer plane")]
struct Args {
    /// Starting x coordinate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x: f64,

    /// Starting y coordinate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    y: f64,

    /// Starting heading: N, E, S or W
    #[arg(long, default_value = "N")]
    heading: String,

    /// Print every step taken
    #[arg(long)]
    trace: bool,

    /// Instruction string; only F, B, L and R are obeyed
    instructions: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let start = match initialize(args.x, args.y, &args.heading) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    println!("=== Rover Drive ===\n");
    println!("Start: {start}");

    if args.trace {
        let trace = run_traced(start, &args.instructions);
        for (i, step) in trace.steps().iter().enumerate() {
            println!("  {:>3}. {} -> {}", i + 1, step.command, step.to);
        }
        println!("End:   {}", trace.current());
    } else {
        println!("End:   {}", run(start, &args.instructions));
    }
}

//! Keypad Session
//!
//! Drives the calculator from keypad labels, the way a button grid would,
//! and prints the display after each press followed by the history.
//!
//! Key concepts:
//! - Labels parse into typed inputs; unknown labels are rejected up front
//! - Every press reports an `Outcome`
//! - Errors show the marker on the display and never reach history
//!
//! Run with: RUST_LOG=calc_engine=debug cargo run --example keypad_session

use calc_engine::core::KEYPAD;
use calc_engine::{BuildError, Calculator};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<(), BuildError> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    println!("=== Keypad Session ===\n");
    for row in KEYPAD {
        println!("  {}", row.join("  "));
    }
    println!();

    let mut calc = Calculator::builder().error_marker("Error").build()?;

    let script = [
        "5", "+", "3", "=", // 8.0
        "*", "4", "=", // chained: 32.0
        "7", "/", "0", "=", // division by zero
        "+", // ignored on the error marker
        "4", "*", "+", "2", "=", // operator swap: 6.0
        "%", // unknown label
        "C",
    ];

    for label in script {
        match calc.press(label) {
            Ok(outcome) => println!("{label:>2} -> {:<8} {outcome:?}", calc.display()),
            Err(err) => println!("{label:>2} -> rejected: {err}"),
        }
    }

    println!("\nHistory:");
    for line in calc.history().lines() {
        println!("  {line}");
    }

    println!("\n=== Session Complete ===");
    Ok(())
}

//! Adds two 256-bit decimal integers and prints the wrapped sum.
//!
//! ```bash
//! torreon 340282366920938463463374607431768211455 1
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use torreon_primitives::BigUint;

// 256 bits
const LIMBS: usize = 4;

#[derive(Parser)]
#[command(
    name = "torreon",
    about = "Add two 256-bit unsigned integers, wrapping on overflow"
)]
struct Args {
    /// First decimal operand
    first: String,

    /// Second decimal operand
    second: String,
}

fn setup_logger() -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stderr())
        .apply()
        .context("failed to initialize the logger")
}

fn run(args: Args) -> Result<()> {
    let first = BigUint::from_dec_str(&args.first, LIMBS)
        .with_context(|| format!("invalid decimal operand {:?}", args.first))?;
    let second = BigUint::from_dec_str(&args.second, LIMBS)
        .with_context(|| format!("invalid decimal operand {:?}", args.second))?;

    let (sum, overflow) = first.overflowing_add(&second);
    if overflow {
        warn!("sum exceeds 256 bits, result wrapped");
    }
    println!("{}", sum);
    Ok(())
}

fn main() {
    // missing or unparsable arguments exit with code 1
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let _ = error.print();
            std::process::exit(1);
        }
    };

    if let Err(error) = setup_logger() {
        eprintln!("{:#}", error);
        std::process::exit(1);
    }

    if let Err(error) = run(args) {
        eprintln!("{:#}", error);
        std::process::exit(1);
    }
}

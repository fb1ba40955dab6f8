//! CLI definition and entry point

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use env_logger::{Builder, Env, Target};

use ci_math::adapters::LogSink;
use ci_math::core::driver;

/// ci-math - computes a sum and an absolute value
#[derive(Parser, Debug)]
#[command(
    name = "ci-math",
    version,
    about = "Computes a sum and an absolute value and logs the results",
    long_about = "Computes 1 + 1 and ABS(-2) and logs each result.\n\n\
                  Takes no arguments. Set RUST_LOG=debug to trace the operands."
)]
pub struct Cli {}

/// Install the logger: message-only records on stdout, `info` unless `RUST_LOG` says otherwise
fn init_logging() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    init_logging();

    let mut sink = LogSink;
    driver::run(&mut sink).context("sample computation failed")?;
    Ok(())
}

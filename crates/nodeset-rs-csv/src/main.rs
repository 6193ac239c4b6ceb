// src/main.rs
//! `csv2nodeset <input.csv> <output.xml> [--strict] [--config <file.json>]`
//!
//! Log output is controlled with `RUST_LOG` (default `info`).

use clap::Parser;
use log::error;
use nodeset_rs_csv::{CliArgs, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    match run(&args) {
        Ok(diagnostics) => {
            println!("Done with {} diagnostic(s).", diagnostics.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("csv2nodeset: {}", e);
            ExitCode::FAILURE
        }
    }
}

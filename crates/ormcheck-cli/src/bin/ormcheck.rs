#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;

use ormcheck_cli::args::{CliArgs, OutputFormat};
use ormcheck_cli::driver;
use ormcheck_cli::reporter::Reporter;

const EXIT_SUCCESS: u8 = 0;
const EXIT_DIAGNOSTICS: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    // Initialize tracing if ORMCHECK_LOG or RUST_LOG is set (zero cost otherwise).
    ormcheck::tracing_config::init_tracing();

    let args = CliArgs::parse();
    match run(&args) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(args: &CliArgs) -> Result<u8> {
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let result = driver::run(args, &cwd)?;

    match args.format {
        OutputFormat::Json => {
            println!("{}", Reporter::render_json(&result.diagnostics)?);
        }
        OutputFormat::Text => {
            let color = !args.no_color && std::io::stdout().is_terminal();
            let reporter = Reporter::new(color);
            if !result.diagnostics.is_empty() {
                println!("{}", reporter.render(&result.diagnostics));
                println!();
            }
            println!(
                "{}",
                reporter.summary(result.diagnostics.len(), result.classes_checked)
            );
        }
    }

    Ok(if result.diagnostics.is_empty() {
        EXIT_SUCCESS
    } else {
        EXIT_DIAGNOSTICS
    })
}

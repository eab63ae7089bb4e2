use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use linea::{interpreter::evaluator::core::Config, run_file};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// linea runs line-oriented scripts: variable bindings, output, and nested
/// `if`/`elif`/`else`/`for` blocks.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the script to run.
    path: PathBuf,

    /// Stops the `Handle ...` line that is otherwise written to stdout for
    /// every construct before it runs.
    #[arg(short = 'q', long)]
    no_trace: bool,

    /// Fails on lines that start with no known construct instead of skipping
    /// them.
    #[arg(short, long)]
    strict: bool,

    /// Prints the global bindings to stderr after a successful run.
    #[arg(short, long)]
    dump_symbols: bool,

    /// Raises the log level; repeat for more detail. `RUST_LOG` overrides it.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    const fn config(&self) -> Config {
        Config { trace: !self.no_trace, strict: self.strict }
    }

    const fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn init_tracing(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("linea={level}")));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_level());

    match run_file(&args.path, args.config()) {
        Ok(interpreter) => {
            if args.dump_symbols {
                eprint!("{}", interpreter.symbols());
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        },
    }
}

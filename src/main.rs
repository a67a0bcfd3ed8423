use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use shunt::{Options, UnknownCharPolicy, evaluate_with};

/// shunt evaluates arithmetic expressions such as `(2 + 3) * 4 ^ 2`.
///
/// With an expression argument it prints the result once. Without one it reads
/// expressions line by line from standard input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Skip unrecognized characters instead of rejecting the expression.
    #[arg(short, long)]
    lenient: bool,

    /// Log pipeline stages to stderr. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate. Starts an interactive session if omitted.
    expression: Option<String>,
}

/// Installs a stderr subscriber. `verbose` counts `-v` flags.
fn init_logging(verbose: u8) {
    use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                    .with_target(false)
                                                    .with_filter(level))
                                  .init();
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(args.verbose);

    let options = Options { unknown_chars: if args.lenient {
                                UnknownCharPolicy::Skip
                            } else {
                                UnknownCharPolicy::Reject
                            }, };

    match args.expression {
        Some(expression) => {
            if print_result(&expression, &options) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        },
        None => repl(&options),
    }
}

/// Evaluates `expression` and prints the outcome. Returns `false` on error.
fn print_result(expression: &str, options: &Options) -> bool {
    match evaluate_with(expression, options) {
        Ok(Some(value)) => {
            println!("{value}");
            true
        },
        Ok(None) => true,
        Err(e) => {
            eprintln!("{e}");
            false
        },
    }
}

fn repl(options: &Options) -> ExitCode {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if stdout.flush().is_err() {
            return ExitCode::FAILURE;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Failed to read from standard input: {e}");
                return ExitCode::FAILURE;
            },
            None => break,
        };

        let line = line.trim();
        if matches!(line, "exit" | "quit") {
            break;
        }
        tracing::info!("evaluating {line:?}");
        print_result(line, options);
    }

    ExitCode::SUCCESS
}

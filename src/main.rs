use std::{fs, process::ExitCode};

use clap::Parser;
use sandcalc::{
    api::{CalcRequest, STATUS_OK, respond},
    evaluate_expression,
    interpreter::rewrite::rewrite,
    server::{DEFAULT_WORKERS, serve},
};

/// sandcalc evaluates arithmetic expressions in a sandbox: only numbers, the
/// arithmetic operators and a fixed set of math functions are available.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells sandcalc to read expressions from a file, one per line, instead
    /// of taking a single expression.
    #[arg(short, long)]
    file: bool,

    /// Prints the expression with every postfix `!` rewritten into a `fact`
    /// call instead of evaluating it.
    #[arg(short, long)]
    rewrite: bool,

    /// Prints the JSON response the HTTP endpoint would send.
    #[arg(short, long)]
    json: bool,

    /// Serves `POST /api/calc` on this address, e.g. `127.0.0.1:5000`.
    #[arg(long, value_name = "ADDR")]
    serve: Option<String>,

    /// Number of HTTP worker threads.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// The expression, or the path of a file of expressions with `--file`.
    #[arg(required_unless_present = "serve")]
    contents: Option<String>,
}

/// Installs a `tracing` subscriber when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_target(true)
                                                        .with_level(true)
                                                        .with_writer(std::io::stderr))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    if let Some(addr) = &args.serve {
        return match serve(addr, args.workers) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    let Some(contents) = args.contents.as_deref() else {
        eprintln!("No expression provided.");
        return ExitCode::FAILURE;
    };

    let expressions = if args.file {
        match fs::read_to_string(contents) {
            Ok(text) => text.lines()
                            .filter(|line| !line.trim().is_empty())
                            .map(str::to_string)
                            .collect(),
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        vec![contents.to_string()]
    };

    let mut failed = false;
    for expression in &expressions {
        if let Err(message) = run_one(&args, expression) {
            eprintln!("{message}");
            failed = true;
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Handles one expression according to the output flags.
fn run_one(args: &Args, expression: &str) -> Result<(), String> {
    if args.rewrite {
        let rewritten = rewrite(expression.trim()).map_err(|e| e.to_string())?;
        println!("{rewritten}");
        return Ok(());
    }

    if args.json {
        let request = CalcRequest { expression: expression.to_string() };
        let body = serde_json::to_vec(&request).map_err(|e| e.to_string())?;
        let (status, response) = respond(&body);
        let json = serde_json::to_string(&response).map_err(|e| e.to_string())?;
        println!("{json}");
        return if status == STATUS_OK { Ok(()) } else { Err(format!("HTTP status {status}")) };
    }

    let value = evaluate_expression(expression).map_err(|e| e.to_string())?;
    println!("{value}");
    Ok(())
}

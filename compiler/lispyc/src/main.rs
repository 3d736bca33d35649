//! Lispy CLI
//!
//! `lispy` starts the REPL; `lispy run <file>` and `lispy eval <expr>` run
//! code non-interactively.

use lispyc::commands::{eval_expr, run_file, run_repl};
use lispyc::{init_tracing, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let result = match args.get(1).map(String::as_str) {
        None | Some("repl") => run_repl(),
        Some("run") => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: lispy run <file>");
                std::process::exit(1);
            };
            run_file(path)
        }
        Some("eval") => {
            if args.len() < 3 {
                eprintln!("Usage: lispy eval <expr>");
                std::process::exit(1);
            }
            eval_expr(&args[2..].join(" "))
        }
        Some("help" | "--help" | "-h") => {
            print_usage();
            Ok(())
        }
        Some("version" | "--version" | "-V") => {
            println!("Lispy {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(command) => {
            // A bare path runs the file.
            if std::path::Path::new(command).is_file() {
                run_file(command)
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    };

    if let Err(err) = result {
        exit_with(&err);
    }
}

fn exit_with(err: &CliError) -> ! {
    // Parse errors have already been reported with their source context.
    if !matches!(err, CliError::Parse { .. }) {
        eprintln!("error: {err}");
    }
    std::process::exit(err.exit_code());
}

fn print_usage() {
    println!("Lispy interpreter");
    println!();
    println!("Usage: lispy [command] [args]");
    println!();
    println!("Commands:");
    println!("  (none), repl      Start the interactive REPL");
    println!("  run <file>        Evaluate a source file, printing errors");
    println!("  eval <expr>       Evaluate one expression and print the result");
    println!("  help              Show this help message");
    println!("  version           Show version information");
    println!();
    println!("Environment variables:");
    println!("  LISPY_LOG=<filter>  Enable debug tracing (e.g. lispy_eval=trace)");
    println!();
    println!("Examples:");
    println!("  lispy");
    println!("  lispy run prelude.lspy");
    println!("  lispy eval '+ 1 (* 2 3)'");
}

//! Calc CLI: evaluate an expression argument or run the REPL.

use std::env;
use std::process;

use calclang::repl::Repl;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI command to execute.
enum Command {
    /// Evaluate a string
    Eval { code: String },
    /// Start the REPL
    Repl,
}

fn print_usage() {
    eprintln!("Calc {} - Calclang Evaluator", VERSION);
    eprintln!();
    eprintln!("Usage: calc [expression]");
    eprintln!("       calc -e <expression>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -e <expression>  Evaluate an expression and print the result");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  calc                          Start interactive REPL");
    eprintln!("  calc \"(1 + 2) * 3\"            Evaluate an expression");
}

fn parse_args(args: &[String]) -> Option<Command> {
    match args {
        [] => Some(Command::Repl),
        [flag, code] if flag == "-e" => Some(Command::Eval { code: code.clone() }),
        [code] if !code.starts_with('-') => Some(Command::Eval { code: code.clone() }),
        _ => None,
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return;
    }

    let Some(command) = parse_args(&args) else {
        print_usage();
        process::exit(1);
    };

    match command {
        Command::Eval { code } => match calclang::evaluate(&code) {
            Ok(value) => println!("{}", value),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Command::Repl => Repl::new().run(),
    }
}

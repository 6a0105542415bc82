use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use monkey::{evaluate, get_result, new_environment, parse};

const PROMPT: &str = ">> ";

/// monkey is a tree-walking interpreter for the Monkey programming
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells monkey to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the last
    /// printable value of a monkey script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Inline source text (or a path, with --file). Omit to start the
    /// interactive session.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        repl();
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    if let Err(e) = get_result(&script, args.pipe_mode) {
        eprintln!("{e}");
    }
}

/// Runs the interactive read-eval-print loop.
///
/// Every line is parsed and evaluated against one persistent environment,
/// so bindings survive from line to line. Parser errors are listed without
/// ending the session.
fn repl() {
    let env = new_environment();
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("{PROMPT}");
        if io::stdout().flush().is_err() {
            return;
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {},
        }

        let (program, errors) = parse(&line);
        if !errors.is_empty() {
            eprintln!("parser errors:");
            for error in &errors {
                eprintln!("\t{error}");
            }
            continue;
        }

        if let Some(value) = evaluate(&program, &env) {
            println!("{value}");
        }
    }
}

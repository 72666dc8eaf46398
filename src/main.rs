use std::{
    fs,
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use borno::{Interpreter, RunError, run_source};
use clap::Parser;

/// Borno is a dynamically-typed scripting language whose keywords and
/// numerals are written in Bengali script.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a `.bn` script. Starts the interactive prompt when omitted.
    script: Option<PathBuf>,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) if error.kind() == clap::error::ErrorKind::DisplayHelp
                      || error.kind() == clap::error::ErrorKind::DisplayVersion =>
        {
            let _ = error.print();
            return;
        },
        Err(_) => {
            eprintln!("Usage: borno [script]");
            std::process::exit(64);
        },
    };

    match args.script {
        Some(path) => run_file(&path),
        None => run_prompt(),
    }
}

fn run_file(path: &Path) {
    if path.extension().is_none_or(|ext| ext != "bn") {
        eprintln!("Invalid file extension. Please use `.bn` for Borno scripts.");
        std::process::exit(64);
    }

    let source = fs::read_to_string(path).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                               path.display());
                     std::process::exit(64);
                 });

    let mut interpreter = Interpreter::new();
    if let Err(error) = run_source(&source, &mut interpreter, false) {
        report(&error);
        std::process::exit(error.exit_code());
    }
}

fn run_prompt() {
    let stdin = std::io::stdin();
    let mut interpreter = Interpreter::new();

    loop {
        print!(">> ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        // Error state does not outlive the prompt line.
        if let Err(error) = run_source(&line, &mut interpreter, true) {
            report(&error);
        }
    }
}

fn report(error: &RunError) {
    match error {
        RunError::Compile(errors) => {
            for error in errors {
                eprintln!("{error}");
            }
        },
        RunError::Runtime(error) => eprintln!("{error}"),
    }
}

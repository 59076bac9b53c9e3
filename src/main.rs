use std::{fs, path::PathBuf};

use clap::Parser;
use monkey::repl;

/// monkey is a tree-walking interpreter for the Monkey programming
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a Monkey script. Starts the interactive REPL when omitted.
    script: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    match args.script {
        Some(path) => {
            let source = fs::read_to_string(&path).unwrap_or_else(|_| {
                             eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                       path.display());
                             std::process::exit(1);
                         });
            repl::run(&source);
        },
        None => repl::start(),
    }
}

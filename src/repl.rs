use std::io::{self, BufRead, Write};

use crate::{
    error::ParseError,
    interpreter::{
        environment::Environment,
        evaluator::core::eval_program,
        lexer::tokenize,
        parser::core::Parser,
    },
};

const PROMPT: &str = ">> ";

/// Runs the interactive read-eval-print loop until end of input.
///
/// Every line is lexed, parsed, and evaluated under one persistent
/// environment, so bindings survive between lines. Parser errors print one
/// per line, tab-indented; runtime errors print behind an `ERROR: ` prefix;
/// any other non-nil result prints its inspect form.
pub fn start() {
    println!("This is the Monkey programming language!");
    println!("Feel free to type in commands");

    let stdin = io::stdin();
    let env = Environment::new();
    let mut line = String::new();

    loop {
        print!("{PROMPT}");
        let _ = io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        eval_line(&line, &env);
    }
}

/// Evaluates one source unit and prints its outcome.
///
/// Used by the REPL for each line and by the file runner for a whole
/// script; the two only differ in how long the environment lives.
fn eval_line(source: &str, env: &Environment) {
    let mut parser = Parser::new(tokenize(source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        print_parser_errors(parser.errors());
        return;
    }

    match eval_program(&program, env) {
        Ok(value) => {
            if !value.is_nil() {
                println!("{value}");
            }
        },
        Err(error) => println!("ERROR: {error}"),
    }
}

/// Runs a complete script under a fresh environment.
pub fn run(source: &str) {
    eval_line(source, &Environment::new());
}

fn print_parser_errors(errors: &[ParseError]) {
    for error in errors {
        println!("\t{error}");
    }
}

mod adapter;
mod app;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

use cli::ParseOutcome;
use std::process;

fn main() {
    let outcome = match cli::parse_args(std::env::args().skip(1)) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(64);
        }
    };
    match outcome {
        ParseOutcome::Exit(text) => print!("{}", text),
        ParseOutcome::GenerateCompletion(shell) => cli::print_completion(shell),
        ParseOutcome::Config(config) => process::exit(app::run(config)),
    }
}

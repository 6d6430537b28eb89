//! # pizzeria
//!
//! Entry point. Setup and commands live in lib.rs for testability.

use clap::Parser;
use pizzeria_cli::{init_tracing, run, Cli};

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let json = cli.wants_json();
    match run(cli) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            if json {
                match serde_json::to_string_pretty(&err) {
                    Ok(body) => println!("{body}"),
                    Err(_) => eprintln!("{err}"),
                }
            } else {
                eprintln!("{err}");
            }
            std::process::exit(err.exit_code());
        }
    }
}

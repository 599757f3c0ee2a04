//! linediff binary - streaming line-by-line file comparison.
//!
//! Exit status follows the diff(1) convention: 0 when the inputs match,
//! 1 when differences were found, 2 on trouble.

use clap::Parser;
use linediff::cli::{run, Cli};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(false) => {}
        Ok(true) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    }
}

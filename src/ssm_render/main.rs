//! # ssm-render CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! Exit status is part of the contract with pipeline runners:
//! - `0`: the output file was written with every placeholder resolved
//! - `1`: the run failed; stderr starts with `FAILURE:`
//! - `2`: the command line could not be parsed (reported by clap)

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::print::print_failure(&e);
        std::process::exit(1);
    }
}

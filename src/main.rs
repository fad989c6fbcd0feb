//! `roman` binary: hands the parsed flags to `cli::run` and turns a failed
//! conversion into a logged error, a stderr message and exit status 1.

use clap::Parser;

mod cli;

fn main() {
    let args = cli::CliArgs::parse();
    if let Err(e) = cli::run(args) {
        tracing::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

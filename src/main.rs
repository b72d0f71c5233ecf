//! Binary entrypoint for the `roster` service.

use std::process::ExitCode;

fn main() -> ExitCode {
    match roster::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

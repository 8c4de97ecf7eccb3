//! Shapes - area and perimeter report

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = shapes::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

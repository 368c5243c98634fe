//! Taskdesk - in-memory task tracking

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = taskdesk::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

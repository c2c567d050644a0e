use lush::{PROGRAM_NAME, conf, control, logging};
use std::process::ExitCode;

/// Entry point that starts the control loop.
fn main() -> ExitCode {
    let config = conf::load();
    logging::init(&config);
    tracing::debug!(path = ?config.source_path(), "configuration loaded");

    match control::control_loop(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "control loop aborted");
            eprintln!("{PROGRAM_NAME}: {err}");
            ExitCode::FAILURE
        }
    }
}

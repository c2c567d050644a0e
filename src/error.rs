use rustyline::error::ReadlineError;
use std::io;
use thiserror::Error;

/// Faults that stop the interpreter. Failures of individual commands never end up here.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("readline: {0}")]
    Read(#[source] io::Error),
    #[error("line editor: {0}")]
    Editor(#[from] ReadlineError),
    #[error("unable to write prompt: {0}")]
    Prompt(#[source] io::Error),
}

pub type ShellResult<T> = Result<T, ShellError>;

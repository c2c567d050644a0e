//! `lush`: a line-oriented command interpreter.
//!
//! Lines are read from an input stream, split into arguments, and dispatched either to a
//! builtin or to an external program that runs as a waited-on child process.

pub mod complete;
pub mod conf;
pub mod control;
pub mod control_state;
pub mod error;
pub mod logging;
pub mod process;
pub mod sink;
pub mod token;

/// Prefix for every diagnostic written to the error stream.
pub const PROGRAM_NAME: &str = "lush";

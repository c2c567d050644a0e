//! State machine backing the interactive control loop.

use crate::conf::ConfigurationModel;
use crate::process;
use crate::process::builtin::map::{BUILTINS, BuiltinMap};
use crate::sink::{BuiltinIo, Sink};
use crate::token::tokenize;

/// Signals whether the control loop should continue or exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    /// Keep reading user input.
    Continue,
    /// Terminate the control loop.
    Terminate,
}

/// Default prompt printed before every line is read.
pub const DEFAULT_PROMPT: &str = "lush> ";

/// Shared state that backs the interactive control loop.
pub struct ControlState {
    builtin_map: &'static BuiltinMap,
    prompt: String,
    out: Sink,
    err: Sink,
}

impl ControlState {
    /// Build a new control state with the default builtin set writing to the process streams.
    pub fn new() -> Self {
        Self::with_sinks(Sink::Stdout, Sink::Stderr)
    }

    /// Build a control state whose builtins and diagnostics write to the given sinks.
    pub fn with_sinks(out: Sink, err: Sink) -> Self {
        Self {
            builtin_map: &BUILTINS,
            prompt: DEFAULT_PROMPT.to_string(),
            out,
            err,
        }
    }

    /// Apply the user's configuration on top of the defaults.
    pub fn configure(mut self, config: &ConfigurationModel) -> Self {
        if let Some(text) = config.prompt.text.as_ref() {
            self.prompt = text.clone();
        }
        self
    }

    /// The prompt shown before each line.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Tokenize and execute a single line of user input.
    pub fn handle_line(&mut self, line: &str) -> ControlFlow {
        let tokens = tokenize(line);
        if tokens.is_empty() {
            return ControlFlow::Continue;
        }

        tracing::trace!(?tokens, "dispatching");
        let mut io = BuiltinIo::new(&mut self.out, &mut self.err);
        process::execute(self.builtin_map, &tokens, &mut io)
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}

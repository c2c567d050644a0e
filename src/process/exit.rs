use crate::control_state::ControlFlow;
use crate::process::builtin::Builtin;
use crate::sink::BuiltinIo;

/// Implements the `exit` builtin, allowing the shell to terminate cleanly.
pub struct Exit {}

impl Builtin for Exit {
    /// Ask the control loop to stop. Any operands are ignored.
    fn call(&self, _args: &[String], _io: &mut BuiltinIo<'_>) -> ControlFlow {
        ControlFlow::Terminate
    }
}

impl Exit {
    /// Construct a new exit builtin instance.
    pub fn new() -> Self {
        Exit {}
    }
}

impl Default for Exit {
    fn default() -> Self {
        Self::new()
    }
}

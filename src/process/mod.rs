//! Builtin commands and external program execution.

pub mod builtin;
pub mod cd;
pub mod exit;
pub mod help;
pub mod launch;

use crate::control_state::ControlFlow;
use crate::process::builtin::map::BuiltinMap;
use crate::sink::BuiltinIo;

/// Execute a command, dispatching to builtins or spawning external processes.
///
/// An empty argument vector is a no-op. Builtins shadow external programs of the same name.
pub fn execute(builtin_map: &BuiltinMap, args: &[String], io: &mut BuiltinIo<'_>) -> ControlFlow {
    if args.is_empty() {
        return ControlFlow::Continue;
    }

    // Determine if command is builtin, and call function
    if let Some(flow) = builtin_map.invoke(args, io) {
        tracing::debug!(builtin = %args[0], ?flow, "ran builtin");
        return flow;
    }

    // Attempt to exec external process
    launch::launch(args, &mut *io.err)
}

pub mod map;

use crate::control_state::ControlFlow;
use crate::sink::BuiltinIo;

/// Names of every builtin, in the order `help` lists them.
pub const BUILTIN_NAMES: [&str; 3] = ["cd", "help", "exit"];

/// A command implemented inside the interpreter.
///
/// `args` is the whole argument vector, so `args[0]` is the builtin's own name.
pub trait Builtin: Send + Sync {
    fn call(&self, args: &[String], io: &mut BuiltinIo<'_>) -> ControlFlow;
}

use crate::PROGRAM_NAME;
use crate::control_state::ControlFlow;
use crate::process::builtin::Builtin;
use crate::sink::BuiltinIo;
use std::env;
use std::io::Write;
use std::path::Path;

/// Changes the interpreter's working directory to its first operand.
///
/// Operands after the first are ignored. Every failure leaves the working directory as it
/// was and writes one diagnostic line.
pub struct Cd {}

impl Builtin for Cd {
    fn call(&self, args: &[String], io: &mut BuiltinIo<'_>) -> ControlFlow {
        let Some(target) = args.get(1) else {
            let _ = writeln!(io.err, "{PROGRAM_NAME}: cd: expected argument to \"cd\"");
            return ControlFlow::Continue;
        };

        let path = Path::new(target);
        match env::set_current_dir(path) {
            Ok(()) => tracing::debug!(dir = %path.display(), "changed working directory"),
            Err(e) => {
                let _ = writeln!(io.err, "{PROGRAM_NAME}: cd: {}: {e}", path.display());
            }
        }

        ControlFlow::Continue
    }
}

impl Cd {
    pub fn new() -> Self {
        Cd {}
    }
}

impl Default for Cd {
    fn default() -> Self {
        Self::new()
    }
}

use crate::control_state::ControlFlow;
use crate::process::builtin::{BUILTIN_NAMES, Builtin};
use crate::sink::BuiltinIo;
use std::io::{self, Write};

const BANNER: [&str; 3] = [
    "lush: a line-oriented command interpreter",
    "Type a program name followed by its arguments, separated by spaces.",
    "The following commands are built in:",
];

const FOOTER: &str = "Use the man command for information on other programs.";

/// Builtin that prints a usage banner and the builtin names.
pub struct Help {}

impl Builtin for Help {
    /// Always continues, even when the output stream refuses the text.
    fn call(&self, _args: &[String], io: &mut BuiltinIo<'_>) -> ControlFlow {
        if let Err(e) = write_help(&mut *io.out) {
            tracing::warn!(error = %e, "unable to write help text");
        }
        ControlFlow::Continue
    }
}

impl Help {
    /// Create a new help builtin instance.
    pub fn new() -> Self {
        Help {}
    }
}

impl Default for Help {
    fn default() -> Self {
        Self::new()
    }
}

fn write_help(out: &mut dyn Write) -> io::Result<()> {
    for line in BANNER {
        writeln!(out, "{line}")?;
    }
    for name in BUILTIN_NAMES {
        writeln!(out, "  {name}")?;
    }
    writeln!(out, "{FOOTER}")?;
    out.flush()
}

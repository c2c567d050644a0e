//! Running external programs as waited-on child processes.

use crate::PROGRAM_NAME;
use crate::control_state::ControlFlow;
use nix::errno::Errno;
use nix::sys::wait::{WaitPidFlag, WaitStatus, waitpid};
use nix::unistd::Pid;
use std::io::{self, Write};
use std::process::Command;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("{program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program}: wait failed: {source}")]
    Wait {
        program: String,
        #[source]
        source: Errno,
    },
}

/// Spawn `args[0]` with the remaining arguments and block until it is gone.
///
/// The child inherits the interpreter's standard streams. Launch failures are written to
/// `err` as a single line; the child's exit status is never reported. The result is always
/// [`ControlFlow::Continue`].
pub fn launch(args: &[String], err: &mut dyn Write) -> ControlFlow {
    match spawn_and_wait(args) {
        Ok(status) => tracing::debug!(?status, "child finished"),
        Err(e) => {
            let _ = writeln!(err, "{PROGRAM_NAME}: {e}");
            let _ = err.flush();
        }
    }

    ControlFlow::Continue
}

/// Spawn the program named by `args[0]` and return its terminal wait status.
///
/// Program lookup follows the `PATH` convention of the operating system.
pub fn spawn_and_wait(args: &[String]) -> Result<WaitStatus, LaunchError> {
    let Some(program) = args.first() else {
        return Err(LaunchError::Spawn {
            program: String::new(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "empty command"),
        });
    };

    let child = Command::new(program)
        .args(&args[1..])
        .spawn()
        .map_err(|source| LaunchError::Spawn {
            program: program.clone(),
            source,
        })?;

    let pid = Pid::from_raw(child.id() as i32);
    tracing::debug!(%pid, %program, "spawned child");

    // The child is reaped here rather than through `Child::wait`, dropping the handle
    // afterwards does not touch the process again.
    wait_for_exit(pid).map_err(|source| LaunchError::Wait {
        program: program.clone(),
        source,
    })
}

/// Wait until `pid` exits or is killed by a signal.
///
/// Stop and continue notifications are skipped, so a suspended child keeps the caller
/// blocked until it really terminates.
pub fn wait_for_exit(pid: Pid) -> Result<WaitStatus, Errno> {
    loop {
        match waitpid(pid, Some(WaitPidFlag::WUNTRACED)) {
            Ok(status @ WaitStatus::Exited(..)) | Ok(status @ WaitStatus::Signaled(..)) => {
                return Ok(status);
            }
            Ok(status) => tracing::trace!(?status, "ignoring non-terminal wait status"),
            Err(Errno::EINTR) => continue,
            Err(e) => return Err(e),
        }
    }
}

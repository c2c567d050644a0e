//! The read loop: prompt, read a line, hand it to the [`ControlState`].

use crate::complete::helper::LushHelper;
use crate::conf::ConfigurationModel;
use crate::control_state::{ControlFlow, ControlState};
use crate::error::{ShellError, ShellResult};
use rustyline::error::ReadlineError;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use std::io::{self, BufRead, IsTerminal, Write};

/// A source of input lines.
pub trait LineEditor {
    /// Show `prompt` and read the next line. `Ok(None)` signals the end of input.
    fn readline(&mut self, prompt: &str) -> ShellResult<Option<String>>;
}

/// Reads plain lines from any buffered reader, echoing the prompt to a writer.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than ending the session.
pub struct StreamEditor<R, W> {
    input: R,
    output: W,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> StreamEditor<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: Vec::new(),
        }
    }
}

impl<R: BufRead, W: Write> LineEditor for StreamEditor<R, W> {
    fn readline(&mut self, prompt: &str) -> ShellResult<Option<String>> {
        write!(self.output, "{prompt}").map_err(ShellError::Prompt)?;
        self.output.flush().map_err(ShellError::Prompt)?;

        self.line.clear();
        loop {
            match self.input.read_until(b'\n', &mut self.line) {
                Ok(0) => return Ok(None),
                // Bytes that are not UTF-8 are input, not a read failure
                Ok(_) => return Ok(Some(String::from_utf8_lossy(&self.line).into_owned())),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(ShellError::Read(e)),
            }
        }
    }
}

/// Interactive line editing on a terminal, with in-memory history.
pub struct TerminalEditor {
    editor: rustyline::Editor<LushHelper, DefaultHistory>,
}

impl TerminalEditor {
    pub fn new() -> ShellResult<Self> {
        let mut editor = rustyline::Editor::<LushHelper, DefaultHistory>::new()?;
        editor.set_helper(Some(LushHelper::new(HistoryHinter::new())));
        Ok(Self { editor })
    }
}

impl LineEditor for TerminalEditor {
    fn readline(&mut self, prompt: &str) -> ShellResult<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            // Ctrl-C abandons the current line only
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Io(e)) => Err(ShellError::Read(e)),
            Err(e) => Err(ShellError::Editor(e)),
        }
    }
}

/// Drive `control_state` with lines from `editor` until `exit` or the end of input.
///
/// Only a failure to read input is returned as an error.
pub fn run_loop_with_editor(
    control_state: &mut ControlState,
    editor: &mut dyn LineEditor,
) -> ShellResult<()> {
    loop {
        let Some(line) = editor.readline(control_state.prompt())? else {
            tracing::debug!("end of input");
            return Ok(());
        };

        if control_state.handle_line(&line) == ControlFlow::Terminate {
            tracing::debug!("exit requested");
            return Ok(());
        }
    }
}

/// Main control loop on the process's standard streams.
pub fn control_loop(config: &ConfigurationModel) -> ShellResult<()> {
    let mut control_state = ControlState::new().configure(config);

    let use_line_editor = config.control.line_editor.unwrap_or(true) && io::stdin().is_terminal();
    if use_line_editor {
        let mut editor = TerminalEditor::new()?;
        return run_loop_with_editor(&mut control_state, &mut editor);
    }

    let mut editor = StreamEditor::new(io::stdin().lock(), io::stdout());
    run_loop_with_editor(&mut control_state, &mut editor)
}

use crate::process::builtin::BUILTIN_NAMES;
use rustyline::completion::Completer;
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::Context;
use rustyline_derive::{Helper, Hinter, Validator};
use std::borrow::Cow::{self, Borrowed, Owned};

/// Line editor helper: history hints, a highlighted prompt, and builtin name completion.
#[derive(Helper, Hinter, Validator)]
pub struct LushHelper(#[rustyline(Hinter)] HistoryHinter);

impl LushHelper {
    pub fn new(hinter: HistoryHinter) -> Self {
        Self(hinter)
    }
}

impl Completer for LushHelper {
    type Candidate = String;

    /// Complete the command word against the builtin names.
    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        Ok((0, builtin_candidates(&line[..pos])))
    }
}

impl Highlighter for LushHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Owned(format!("\x1b[1;32m{prompt}\x1b[m"))
        } else {
            Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(format!("\x1b[1m{hint}\x1b[m"))
    }
}

/// Builtin names extending `prefix`, or nothing once the command word is finished.
pub fn builtin_candidates(prefix: &str) -> Vec<String> {
    if prefix.contains(char::is_whitespace) {
        return Vec::new();
    }

    BUILTIN_NAMES
        .iter()
        .filter(|name| name.starts_with(prefix))
        .map(|name| format!("{name} "))
        .collect()
}

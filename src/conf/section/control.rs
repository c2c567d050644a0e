use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ControlConfigSection {
    /// Use the interactive line editor when stdin is a terminal. Defaults to on.
    pub line_editor: Option<bool>,
}

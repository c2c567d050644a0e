use super::super::model::ConfigurationModel;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfigSection {
    /// Tracing filter directive, e.g. `debug` or `lush::process=trace`.
    pub level: Option<String>,
    /// Write log events to this file instead of stderr.
    pub file: Option<String>,
}

impl LoggingConfigSection {
    pub fn resolved_file_path(&self, config: &ConfigurationModel) -> Option<PathBuf> {
        self.file.as_ref().map(|raw| config.resolve_path(raw))
    }
}

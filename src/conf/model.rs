use super::paths::expand_path;
use super::section::{ControlConfigSection, LoggingConfigSection, PromptConfigSection};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigurationModel {
    #[serde(default)]
    pub prompt: PromptConfigSection,
    #[serde(default)]
    pub control: ControlConfigSection,
    #[serde(default)]
    pub logging: LoggingConfigSection,
    #[serde(skip)]
    source_path: Option<PathBuf>,
}

impl ConfigurationModel {
    /// Parse a YAML document. An empty document yields the defaults.
    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub(crate) fn set_source_path(&mut self, path: PathBuf) {
        self.source_path = Some(path);
    }

    /// Expand `~`, and resolve relative paths against the directory of the config file.
    pub fn resolve_path(&self, raw: &str) -> PathBuf {
        let expanded = expand_path(raw);
        if raw == "~" || raw.starts_with("~/") || expanded.is_absolute() {
            return expanded;
        }

        if let Some(parent) = self.source_path.as_ref().and_then(|p| p.parent()) {
            return parent.join(raw);
        }

        expanded
    }
}

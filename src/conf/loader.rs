use super::model::ConfigurationModel;
use super::paths::resolve_config_path;
use crate::PROGRAM_NAME;
use std::fs;
use std::path::Path;

/// Load the user's configuration file, falling back to defaults when absent or invalid.
pub fn load() -> ConfigurationModel {
    match resolve_config_path() {
        Some(path) => load_from(&path),
        None => ConfigurationModel::default(),
    }
}

/// Load the configuration at `path`. Problems are reported once on stderr and the defaults
/// are used instead.
pub fn load_from(path: &Path) -> ConfigurationModel {
    match fs::read_to_string(path) {
        Ok(contents) => match ConfigurationModel::from_yaml(&contents) {
            Ok(mut cfg) => {
                cfg.set_source_path(path.to_path_buf());
                return cfg;
            }
            Err(err) => {
                eprintln!(
                    "{PROGRAM_NAME}: warning: unable to parse config file '{}': {err}",
                    path.display()
                );
            }
        },
        Err(err) => {
            eprintln!(
                "{PROGRAM_NAME}: warning: unable to read config file '{}': {err}",
                path.display()
            );
        }
    }

    ConfigurationModel::default()
}

mod loader;
mod model;
mod paths;
pub mod section;

pub use loader::{load, load_from};
pub use model::ConfigurationModel;
pub use paths::{CONFIG_PATH_ENV, expand_path, resolve_config_path};

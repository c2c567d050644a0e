use std::env;
use std::path::PathBuf;

/// Environment variable naming the config file explicitly.
pub const CONFIG_PATH_ENV: &str = "LUSH_CONFIG";

const RC_FILE_NAME: &str = ".lushrc";

/// The config file named by `LUSH_CONFIG`, else `~/.lushrc` when it exists.
///
/// A path from `LUSH_CONFIG` is returned even if the file is missing, so the loader can
/// warn about it. A blank value counts as unset.
pub fn resolve_config_path() -> Option<PathBuf> {
    let explicit = env::var(CONFIG_PATH_ENV)
        .ok()
        .filter(|raw| !raw.trim().is_empty());
    if let Some(raw) = explicit {
        return Some(expand_path(&raw));
    }

    home_dir()
        .map(|home| home.join(RC_FILE_NAME))
        .filter(|path| path.is_file())
}

/// Replace a leading `~` or `~/` with `$HOME`.
///
/// Other paths, and every path when `HOME` is unset, come back unchanged. `~user` forms are
/// not expanded.
pub fn expand_path(input: &str) -> PathBuf {
    let home_relative = match input {
        "~" => Some(""),
        _ => input.strip_prefix("~/"),
    };

    match (home_relative, home_dir()) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(input),
    }
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}

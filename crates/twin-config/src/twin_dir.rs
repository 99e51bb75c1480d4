//! Discovery of the `.twin/` directory.

use std::path::{Path, PathBuf};

/// The name of the twin settings directory.
pub const TWIN_DIR_NAME: &str = ".twin";

/// Environment variable that overrides discovery.
pub const TWIN_DIR_ENV: &str = "TWIN_DIR";

/// Finds the `.twin/` directory for `start`.
///
/// `TWIN_DIR` wins when it names an existing directory. Otherwise the tree
/// is walked up from `start`; `None` if the filesystem root is reached.
pub fn find_twin_dir(start: &Path) -> Option<PathBuf> {
    if let Ok(env_dir) = std::env::var(TWIN_DIR_ENV) {
        let env_path = PathBuf::from(env_dir);
        if env_path.is_dir() {
            return Some(env_path);
        }
    }
    walk_up(start)
}

/// Walks up from `start` looking for `.twin/`, ignoring the environment.
pub fn walk_up(start: &Path) -> Option<PathBuf> {
    let start = start.canonicalize().ok()?;
    start
        .ancestors()
        .map(|dir| dir.join(TWIN_DIR_NAME))
        .find(|candidate| candidate.is_dir())
}

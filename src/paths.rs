//! Default save locations.

use std::path::{Path, PathBuf};

/// Save locations offered to the user, computed once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePaths {
    pub desktop: PathBuf,
    pub current: PathBuf,
}

impl SavePaths {
    /// Resolve the desktop and working directories for this process.
    pub fn resolve() -> Self {
        Self {
            desktop: desktop_dir(),
            current: current_dir(),
        }
    }
}

/// The platform desktop directory.
///
/// Falls back to `~/Desktop`, then to the working directory when no home
/// directory is known.
pub fn desktop_dir() -> PathBuf {
    dirs::desktop_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Desktop")))
        .unwrap_or_else(current_dir)
}

/// The process working directory, or `.` if it cannot be read.
pub fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) if rest.starts_with('/') || rest.starts_with('\\') => {
            home.join(&rest[1..])
        }
        _ => PathBuf::from(path),
    }
}

/// Full path of the generated file for `name` inside `dir`.
pub fn output_file(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.ts", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_appends_extension() {
        let path = output_file(Path::new("/tmp/types"), "User");
        assert_eq!(path, PathBuf::from("/tmp/types/User.ts"));
    }

    #[test]
    fn test_expand_home_leaves_plain_paths() {
        assert_eq!(expand_home("/var/tmp"), PathBuf::from("/var/tmp"));
        assert_eq!(expand_home("relative/dir"), PathBuf::from("relative/dir"));
        assert_eq!(expand_home("~user/x"), PathBuf::from("~user/x"));
    }

    #[test]
    fn test_expand_home_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~"), home);
            assert_eq!(expand_home("~/types"), home.join("types"));
        }
    }

    #[test]
    fn test_resolve_current_matches_env() {
        let paths = SavePaths::resolve();
        assert_eq!(paths.current, current_dir());
    }
}

//! Platform-specific executable resolution.
//!
//! This module answers one question: where does the driver binary live?
//! Resolution walks the `PATH`-style executable search path of the host
//! OS, the same mechanism a shell would use.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve a binary name on the process's executable search path.
///
/// # Platform Behavior
/// - **Linux/macOS**: each `PATH` entry is checked for a regular file with
///   an execute bit set
/// - **Windows**: each `PATH` entry is checked for the name as-is and with
///   an `.exe` suffix
///
/// Returns the first match in `PATH` order, or `None`.
pub fn resolve_executable(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    resolve_executable_in(name, &path_var)
}

/// Resolution against an explicit search path, for callers and tests that
/// should not depend on the ambient environment.
pub fn resolve_executable_in(name: &str, search_path: &OsStr) -> Option<PathBuf> {
    for dir in std::env::split_paths(search_path) {
        if dir.as_os_str().is_empty() {
            continue;
        }
        for candidate in candidate_names(name) {
            let path = dir.join(&candidate);
            if is_executable_file(&path) {
                debug!("Resolved `{}` to {}", name, path.display());
                return Some(path);
            }
        }
    }
    None
}

#[cfg(unix)]
fn candidate_names(name: &str) -> Vec<String> {
    vec![name.to_string()]
}

#[cfg(windows)]
fn candidate_names(name: &str) -> Vec<String> {
    if name.to_lowercase().ends_with(".exe") {
        vec![name.to_string()]
    } else {
        vec![name.to_string(), format!("{name}.exe")]
    }
}

/// Check that a path is a regular file the current process could execute.
///
/// # Platform Behavior
/// - **Linux/macOS**: any execute bit (user, group, or other) qualifies
/// - **Windows**: existence as a file qualifies (executability is
///   determined by extension)
pub fn is_executable_file(path: &Path) -> bool {
    let Ok(metadata) = std::fs::metadata(path) else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }

    #[cfg(not(unix))]
    {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn make_executable(path: &Path) {
        use std::os::unix::fs::PermissionsExt;
        let mut permissions = std::fs::metadata(path).unwrap().permissions();
        permissions.set_mode(0o755);
        std::fs::set_permissions(path, permissions).unwrap();
    }

    #[test]
    fn test_resolve_in_empty_path() {
        assert_eq!(resolve_executable_in("chromedriver", OsStr::new("")), None);
    }

    #[test]
    fn test_resolve_missing_binary() {
        let temp_dir = TempDir::new().unwrap();
        let search = std::env::join_paths([temp_dir.path()]).unwrap();
        assert_eq!(resolve_executable_in("chromedriver", &search), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_finds_executable_file() {
        let temp_dir = TempDir::new().unwrap();
        let binary = temp_dir.path().join("chromedriver");
        std::fs::write(&binary, "#!/bin/sh\n").unwrap();
        make_executable(&binary);

        let search = std::env::join_paths([temp_dir.path()]).unwrap();
        assert_eq!(
            resolve_executable_in("chromedriver", &search),
            Some(binary)
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_skips_non_executable_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("chromedriver"), "").unwrap();

        let search = std::env::join_paths([temp_dir.path()]).unwrap();
        assert_eq!(resolve_executable_in("chromedriver", &search), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_respects_path_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        for dir in [&first, &second] {
            let binary = dir.path().join("chromedriver");
            std::fs::write(&binary, "#!/bin/sh\n").unwrap();
            make_executable(&binary);
        }

        let search = std::env::join_paths([first.path(), second.path()]).unwrap();
        assert_eq!(
            resolve_executable_in("chromedriver", &search),
            Some(first.path().join("chromedriver"))
        );
    }

    #[test]
    fn test_resolve_from_env_path_finds_a_shell() {
        // `sh` (or `cmd.exe`) is present on every supported platform.
        #[cfg(unix)]
        assert!(resolve_executable("sh").is_some());
        #[cfg(windows)]
        assert!(resolve_executable("cmd").is_some());
    }
}

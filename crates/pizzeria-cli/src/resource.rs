//! Menu resource resolution.
//!
//! Resolution only picks a path; whether a file exists there is the
//! loader's concern, so an absent menu surfaces as a load failure rather
//! than a resolution error.

use std::path::PathBuf;

/// File name of the bundled menu.
pub const MENU_FILE_NAME: &str = "pizzas.json";

/// Resolve the menu file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. PIZZERIA_MENU environment variable (with tilde expansion)
/// 3. Installed copy in the XDG data directory
/// 4. Bundled copy next to the executable
pub fn resolve_menu_path(explicit: Option<&str>) -> PathBuf {
    // Priority 1: Explicit path
    if let Some(path) = explicit {
        return expand_tilde(path);
    }

    // Priority 2: PIZZERIA_MENU environment variable
    if let Ok(env_path) = std::env::var("PIZZERIA_MENU") {
        return expand_tilde(&env_path);
    }

    // Priority 3: Installed copy under the XDG data directory
    if let Some(data_dir) = dirs::data_dir() {
        let installed = data_dir.join("pizzeria").join(MENU_FILE_NAME);
        if installed.exists() {
            return installed;
        }
    }

    // Priority 4: The copy shipped next to the binary
    bundled_menu_path()
}

fn bundled_menu_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(MENU_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(MENU_FILE_NAME))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_menu_path(Some("/tmp/other-menu.json"));
        assert_eq!(path, PathBuf::from("/tmp/other-menu.json"));
    }

    #[test]
    fn test_expand_tilde_with_home() {
        if let Some(home) = std::env::var_os("HOME") {
            let expanded = expand_tilde("~/menu.json");
            assert_eq!(expanded, PathBuf::from(home).join("menu.json"));
        }
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths_alone() {
        assert_eq!(expand_tilde("menu.json"), PathBuf::from("menu.json"));
    }
}

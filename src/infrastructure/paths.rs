//! Path helpers for the Zellij sandbox.

use std::path::PathBuf;

/// Directory for plugin-owned files such as the trace export.
///
/// Resolves to `/host/.local/share/zellij/catalog-browser` inside the
/// sandbox, which is `~/.local/share/zellij/catalog-browser` when Zellij was
/// started from the home directory.
///
/// # Examples
///
/// ```
/// use catalog_browser::infrastructure::get_data_dir;
///
/// assert!(get_data_dir().ends_with("zellij/catalog-browser"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("catalog-browser")
}

/// Maps `~` and `~/...` to the sandbox's `/host` mount.
///
/// # Examples
///
/// ```
/// use catalog_browser::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/catalogs/ui.toml"), "/host/catalogs/ui.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/catalog.json"), "/etc/catalog.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_user_paths_are_left_alone() {
        assert_eq!(expand_tilde("~alice/catalog.toml"), "~alice/catalog.toml");
    }

    #[test]
    fn relative_paths_are_left_alone() {
        assert_eq!(expand_tilde("catalogs/default.toml"), "catalogs/default.toml");
    }
}

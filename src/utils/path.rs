//! Path helpers for user-supplied locations.

use std::path::PathBuf;

/// Expand a leading `~/` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(expand_tilde("/tmp/events.json"), PathBuf::from("/tmp/events.json"));
        assert_eq!(expand_tilde("events.json"), PathBuf::from("events.json"));
    }

    #[test]
    fn tilde_resolves_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/x/events.json"), home.join("x/events.json"));
        }
    }
}

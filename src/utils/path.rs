//! Path utilities: expand ~ in user-supplied paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_plain_paths_alone() {
        assert_eq!(expand_tilde("/tmp/a.json"), PathBuf::from("/tmp/a.json"));
        assert_eq!(expand_tilde("a.json"), PathBuf::from("a.json"));
    }

    #[test]
    fn expands_home_prefix() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/x/y.json"), home.join("x/y.json"));
        }
    }
}

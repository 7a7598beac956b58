//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`
/// Returns the path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/public/news/     ← start
/// /home/user/site/milkyway.toml    ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("public/news");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("milkyway.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("milkyway.toml")).unwrap();
        assert_eq!(found, dir.path().join("milkyway.toml"));
    }

    #[test]
    fn test_find_config_missing() {
        let dir = tempfile::tempdir().unwrap();
        let name = Path::new("definitely-not-a-config-7f3a.toml");
        assert_eq!(find_config_file(dir.path(), name), None);
    }

    #[test]
    fn test_find_config_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        assert_eq!(find_config_file(dir.path(), &path), None);
        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(dir.path(), &path), Some(path));
    }
}

//! Unit tests for file helpers

use super::*;
use std::fs;
use tempfile::TempDir;

#[cfg(test)]
mod files_tests {
    use super::*;

    #[test]
    fn test_config_dir_ends_with_app_dir() {
        let dir = config_dir();
        assert!(dir.ends_with(APP_DIR));
    }

    #[test]
    fn test_try_read_to_string_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("rules.json");
        fs::write(&file_path, "{}").unwrap();

        assert_eq!(try_read_to_string(&file_path).as_deref(), Some("{}"));
    }

    #[test]
    fn test_try_read_to_string_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nonexistent.json");

        assert!(try_read_to_string(&file_path).is_none());
    }

    #[test]
    fn test_write_string_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nested").join("deeper").join("squad.json");

        write_string(&file_path, "Dupont ★").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "Dupont ★");
    }

    #[test]
    fn test_write_string_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.json");

        write_string(&file_path, "first").unwrap();
        write_string(&file_path, "second").unwrap();

        assert_eq!(try_read_to_string(&file_path).unwrap(), "second");
    }
}

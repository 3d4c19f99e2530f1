//! Custom value parsers for CLI arguments.

use std::fs;
use std::path::PathBuf;

use crate::pagination::MIN_RANGE_SIZE;

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{path_str}'"));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{path_str}'"));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!("Cannot read configuration file '{path_str}': {e}")),
    }
}

/// Page sizes must select at least one record
pub fn validate_page_size(size_str: &str) -> Result<u32, String> {
    let size: u32 = size_str
        .parse()
        .map_err(|_| format!("Page size must be a positive number, got: '{size_str}'"))?;

    if size == 0 {
        return Err("Page size must be greater than 0".to_string());
    }

    Ok(size)
}

/// Sliding windows need at least three pages
pub fn validate_range_size(range_str: &str) -> Result<u32, String> {
    let range: u32 = range_str
        .parse()
        .map_err(|_| format!("Range size must be a positive number, got: '{range_str}'"))?;

    if range < MIN_RANGE_SIZE {
        return Err(format!("Range size must be at least {MIN_RANGE_SIZE}, got: {range}"));
    }

    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_page_size() {
        assert_eq!(validate_page_size("25"), Ok(25));
        assert!(validate_page_size("0").is_err());
        assert!(validate_page_size("-5").is_err());
        assert!(validate_page_size("ten").is_err());
    }

    #[test]
    fn test_validate_range_size() {
        assert_eq!(validate_range_size("3"), Ok(3));
        assert_eq!(validate_range_size("10"), Ok(10));
        let err = validate_range_size("2").unwrap_err();
        assert!(err.contains("at least 3"));
        assert!(validate_range_size("x").is_err());
    }

    #[test]
    fn test_validate_config_file_path() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(validate_config_file_path(path), Ok(PathBuf::from(path)));

        let err = validate_config_file_path("/definitely/not/here.toml").unwrap_err();
        assert!(err.contains("does not exist"));

        let dir = tempfile::tempdir().unwrap();
        let err = validate_config_file_path(dir.path().to_str().unwrap()).unwrap_err();
        assert!(err.contains("not a file"));
    }
}

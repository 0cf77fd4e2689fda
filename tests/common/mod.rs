/*!
 * Common test utilities for the lingo-voice test suite
 */

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a config file with a custom language pair for testing
pub fn create_test_config(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = r#"{
    "source_language": "French",
    "target_language": "German",
    "backend": {
        "model": "facebook/nllb-200-distilled-600M",
        "endpoint": "http://localhost:6060",
        "timeout_secs": 30
    },
    "log_level": "debug"
}"#;
    create_test_file(dir, filename, content)
}

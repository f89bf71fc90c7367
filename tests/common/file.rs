use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use serde::Serialize;
use std::path::PathBuf;

/// Serialize `document` as JSON into `name` under `dir`
pub fn write_document<T: Serialize + ?Sized>(dir: &TempDir, name: &str, document: &T) -> PathBuf {
    let json = serde_json::to_string_pretty(document).expect("Failed to serialize document");
    let file = dir.child(name);
    file.write_str(&json).expect("Failed to write document");
    file.path().to_path_buf()
}

pub fn write_raw(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let file = dir.child(name);
    file.write_str(content).expect("Failed to write file");
    file.path().to_path_buf()
}

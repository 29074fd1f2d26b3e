use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Creates (or recreates) an empty, test dedicated directory.
pub fn temp_dir(name: &str) -> PathBuf {
    let path = std::env::temp_dir()
        .join("groundtrack-tests")
        .join(format!("{}-{}", name, std::process::id()));
    if path.exists() {
        std::fs::remove_dir_all(&path).unwrap();
    }
    std::fs::create_dir_all(&path).unwrap();
    path
}

/// Writes given content to a file within given directory
pub fn write_stream(directory: &Path, file_name: &str, content: &str) -> PathBuf {
    let path = directory.join(file_name);
    let mut fd = File::create(&path).unwrap();
    fd.write_all(content.as_bytes()).unwrap();
    path
}

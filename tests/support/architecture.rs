//! Source-tree scanning helpers for layering contracts.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// A matching source line: relative path, 1-based line number, text.
pub type Hit = (String, usize, String);

fn root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn relative_path(path: &Path) -> String {
    path.strip_prefix(root())
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("failed to read dir {}: {e}", dir.display()));

    for entry in entries {
        let path = entry
            .unwrap_or_else(|e| panic!("failed to read dir entry: {e}"))
            .path();
        if path.is_dir() {
            walk(&path, files);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
}

/// Every `.rs` file under `relative_dir`, sorted.
pub fn rust_files(relative_dir: &str) -> Vec<PathBuf> {
    let mut files = Vec::new();
    walk(&root().join(relative_dir), &mut files);
    files.sort();
    files
}

fn scan(relative_dir: &str, mut keep: impl FnMut(&Path, &str) -> bool) -> Vec<Hit> {
    let mut hits = Vec::new();
    for file in rust_files(relative_dir) {
        let content = fs::read_to_string(&file)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", file.display()));
        for (idx, line) in content.lines().enumerate() {
            if keep(&file, line) {
                hits.push((relative_path(&file), idx + 1, line.to_string()));
            }
        }
    }
    hits
}

/// Lines under `relative_dir` containing any of `patterns`, skipping the
/// listed files.
pub fn lines_containing(relative_dir: &str, patterns: &[&str], except: &[&str]) -> Vec<Hit> {
    let except: HashSet<&str> = except.iter().copied().collect();
    scan(relative_dir, |_, line| patterns.iter().any(|p| line.contains(p)))
        .into_iter()
        .filter(|(path, _, _)| !except.contains(path.as_str()))
        .collect()
}

/// Lines of `mod.rs` files that are neither module declarations nor
/// comments, attributes or blank.
pub fn non_export_lines_in_mod_files(relative_dir: &str) -> Vec<Hit> {
    scan(relative_dir, |file, raw| {
        if file.file_name().and_then(|s| s.to_str()) != Some("mod.rs") {
            return false;
        }
        let line = raw.trim();
        !(line.is_empty()
            || line.starts_with("//")
            || line.starts_with("#![")
            || line.starts_with("#[cfg")
            || line.starts_with("pub mod ")
            || line.starts_with("mod ")
            || line.starts_with("pub use ")
            || line.starts_with("};")
            || line.ends_with(',')
            || line.ends_with("::{"))
    })
}

pub fn path_exists(relative_path: &str) -> bool {
    root().join(relative_path).exists()
}

pub fn read_relative(relative_path: &str) -> String {
    fs::read_to_string(root().join(relative_path))
        .unwrap_or_else(|e| panic!("failed to read {relative_path}: {e}"))
}

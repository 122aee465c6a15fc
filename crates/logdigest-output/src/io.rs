//! Pretty JSON serialization and atomic file replacement

use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Two-space indented JSON with non-ASCII text left unescaped
pub fn to_pretty_json<T: Serialize>(value: &T) -> std::io::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(value)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Replace `path` with `data` through a hidden sibling file, so a reader
/// listing the directory only ever sees complete reports
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let staging = staging_path(dir, path)?;
    if let Err(err) = std::fs::write(&staging, data).and_then(|()| std::fs::rename(&staging, path))
    {
        let _ = std::fs::remove_file(&staging);
        return Err(err);
    }
    Ok(())
}

fn staging_path(dir: &Path, path: &Path) -> std::io::Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("report path has no file name: {}", path.display()),
        )
    })?;
    let mut staged = OsString::from(".");
    staged.push(name);
    staged.push(".partial");
    Ok(dir.join(staged))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_json_keeps_unicode() {
        let bytes = to_pretty_json(&json!({"summary": "上周总结"})).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("上周总结"));
        assert!(!text.contains("\\u"));
        assert!(text.contains("\n  \"summary\""));
    }

    #[test]
    fn test_atomic_write_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("daily_2024-01-10.json");

        atomic_write(&path, b"first").unwrap();
        atomic_write(&path, b"second").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"second");
        let leftovers: Vec<_> = std::fs::read_dir(path.parent().unwrap())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("daily_2024-01-10.json")]);
    }

    #[test]
    fn test_atomic_write_failure_leaves_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("weekly_2024-01-10.json");
        std::fs::create_dir(&target).unwrap();

        assert!(atomic_write(&target, b"{}").is_err());
        assert!(!dir.path().join(".weekly_2024-01-10.json.partial").exists());
    }

    #[test]
    fn test_atomic_write_rejects_bare_root() {
        let err = atomic_write(Path::new("/"), b"{}").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}

//! Source discovery (glob), reading and output writing.
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub path: PathBuf,
    /// file name without its directory
    pub name: String,
    pub content: String,
}

#[derive(Debug, thiserror::Error)]
pub enum FsError {
    #[error("invalid glob pattern `{pattern}`: {source}")]
    Pattern { pattern: String, source: glob::PatternError },
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: std::io::Error },
}

/// Expand `patterns` (relative ones against `base_dir`) into a sorted,
/// de-duplicated list of regular files. Matching nothing is not an error.
pub fn scan<I>(patterns: I, base_dir: &Path) -> Result<Vec<PathBuf>, FsError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = BTreeSet::<PathBuf>::new();

    for raw in patterns {
        let raw = raw.as_ref();
        let full = if Path::new(raw).is_absolute() {
            PathBuf::from(raw)
        } else {
            base_dir.join(raw)
        };
        // glob wants forward slashes
        let pattern = full.to_string_lossy().replace('\\', "/");

        let entries = glob::glob(&pattern).map_err(|source| FsError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;
        // unreadable entries are skipped rather than failing the whole scan
        out.extend(entries.flatten().filter(|path| path.is_file()));
    }

    Ok(out.into_iter().collect())
}

pub fn read(path: &Path) -> Result<String, FsError> {
    if !path.exists() {
        return Err(FsError::NotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| FsError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read every file in parallel; results keep the order of `paths`.
pub fn read_multiple(paths: &[PathBuf]) -> Result<Vec<ScanResult>, FsError> {
    paths
        .par_iter()
        .map(|path| -> Result<ScanResult, FsError> {
            let content = read(path)?;
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();
            Ok(ScanResult { path: path.clone(), name, content })
        })
        .collect()
}

/// Write `content`, creating parent directories first. Overwrites.
pub fn write(path: &Path, content: &str) -> Result<(), FsError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory(parent)?;
    }
    std::fs::write(path, content).map_err(|source| FsError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub fn exists(path: &Path) -> bool {
    path.exists()
}

pub fn ensure_directory(path: &Path) -> Result<(), FsError> {
    std::fs::create_dir_all(path).map_err(|source| FsError::Write {
        path: path.to_path_buf(),
        source,
    })
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests")
    }

    #[test]
    fn scan_finds_fixtures_sorted() {
        let files = scan(["fixtures/**/*.cs"], &fixture_dir()).unwrap();
        assert!(files.len() >= 4);
        assert!(files.iter().all(|f| f.extension().is_some_and(|e| e == "cs")));
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }

    #[test]
    fn scan_dedups_overlapping_patterns() {
        let base = fixture_dir();
        let once = scan(["fixtures/*.cs"], &base).unwrap();
        let twice = scan(["fixtures/*.cs", "fixtures/**/*.cs"], &base).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn scan_without_matches_is_empty() {
        let files = scan(["fixtures/NOPE/**/*.cs"], &fixture_dir()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn scan_accepts_absolute_patterns() {
        let absolute = fixture_dir().join("fixtures").join("*.cs");
        let files = scan([absolute.to_string_lossy()], Path::new("/nonexistent")).unwrap();
        assert!(!files.is_empty());
    }

    #[test]
    fn scan_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("Folder.cs")).unwrap();
        std::fs::write(dir.path().join("A.cs"), "class A {}").unwrap();
        let files = scan(["*.cs"], dir.path()).unwrap();
        assert_eq!(files, vec![dir.path().join("A.cs")]);
    }

    #[test]
    fn read_and_read_multiple() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("A.cs");
        let b = dir.path().join("B.cs");
        std::fs::write(&a, "class A { } // ünïcödé").unwrap();
        std::fs::write(&b, "class B { }").unwrap();

        assert!(read(&a).unwrap().contains("ünïcödé"));
        assert!(matches!(read(&dir.path().join("C.cs")), Err(FsError::NotFound(_))));

        let results = read_multiple(&[b.clone(), a.clone()]).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].path, b);
        assert_eq!(results[0].name, "B.cs");
        assert_eq!(results[1].name, "A.cs");
        assert!(read_multiple(&[]).unwrap().is_empty());
    }

    #[test]
    fn write_creates_directories_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("deeper").join("generated.ts");
        write(&out, "first").unwrap();
        write(&out, "second").unwrap();
        assert!(exists(&out));
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "second");
    }

    #[test]
    fn ensure_directory_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_directory(&nested).unwrap();
        ensure_directory(&nested).unwrap();
        assert!(nested.is_dir());
        assert!(!exists(&dir.path().join("missing")));
    }
}

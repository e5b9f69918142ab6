use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::models::song::{RawDocument, SongRecord};

/// File the catalog is read from when nothing else is configured.
pub const DEFAULT_CATALOG_FILE: &str = "db_cleaned.json";

/// Resolve a catalog path so the process can be launched from any working
/// directory. Relative paths are looked up next to the running executable
/// first, then in the crate directory the binary was built from.
pub fn resolve_catalog_path(configured: &str) -> PathBuf {
    let mut bases = Vec::new();
    match std::env::current_exe() {
        Ok(exe) => {
            if let Some(dir) = exe.parent() {
                bases.push(dir.to_path_buf());
            }
        }
        Err(e) => warn!("Could not locate the running executable: {}", e),
    }
    bases.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")));
    resolve_against(configured, &bases)
}

/// First base containing `configured`; the last base when none does.
fn resolve_against(configured: &str, bases: &[PathBuf]) -> PathBuf {
    let path = Path::new(configured);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    bases
        .iter()
        .map(|base| base.join(path))
        .find(|candidate| candidate.is_file())
        .or_else(|| bases.last().map(|base| base.join(path)))
        .unwrap_or_else(|| path.to_path_buf())
}

/// In-memory song catalog. Built once before the listener starts; clones share
/// the same read-only slice.
#[derive(Clone, Debug)]
pub struct Catalog {
    songs: Arc<[SongRecord]>,
}

impl Catalog {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        debug!("CATALOG_PATH={}", path.display());

        let file = File::open(path)
            .with_context(|| format!("failed to open catalog file {}", path.display()))?;
        let raw: Value = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("catalog file {} is not valid JSON", path.display()))?;

        let catalog = Self::from_value(raw);
        info!("Loaded {} songs from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn from_value(raw: Value) -> Self {
        let document = RawDocument::classify(raw);
        if let RawDocument::Other(_) = document {
            warn!(
                "Catalog document has an {} shape, serving an empty list",
                document.shape()
            );
        } else {
            debug!("Catalog document shape: {}", document.shape());
        }
        Self::from(document.into_songs())
    }

    pub fn songs(&self) -> &[SongRecord] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

impl From<Vec<SongRecord>> for Catalog {
    fn from(songs: Vec<SongRecord>) -> Self {
        Catalog {
            songs: songs.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_catalog(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_wrapped_map_in_file_order() {
        let file = write_catalog(
            r#"{"sarkilar": {"b": {"title": "Y"}, "a": {"title": "X"}}}"#,
        );
        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.songs()[0].0["title"], "Y");
        assert_eq!(catalog.songs()[1].0["title"], "X");
    }

    #[test]
    fn loading_twice_is_identical() {
        let file = write_catalog(r#"[{"title": "X"}, {"title": "Y", "year": 1975}]"#);
        let first = Catalog::load(file.path()).unwrap();
        let second = Catalog::load(file.path()).unwrap();
        assert_eq!(first.songs(), second.songs());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = Catalog::load(&path).unwrap_err();
        assert!(err.to_string().contains("failed to open catalog file"));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let file = write_catalog("{\"sarkilar\": [");
        let err = Catalog::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("is not valid JSON"));
    }

    #[test]
    fn scalar_collection_loads_empty() {
        let file = write_catalog(r#"{"sarkilar": "not-a-container"}"#);
        let catalog = Catalog::load(file.path()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn clones_share_songs() {
        let catalog = Catalog::from_value(serde_json::json!([{"title": "X"}]));
        let clone = catalog.clone();
        assert!(std::ptr::eq(catalog.songs(), clone.songs()));
    }

    #[test]
    fn relative_paths_resolve_against_crate_dir() {
        let resolved = resolve_catalog_path(DEFAULT_CATALOG_FILE);
        assert!(resolved.is_absolute());
        assert!(resolved.is_file());
        assert!(resolved.ends_with(DEFAULT_CATALOG_FILE));
    }

    #[test]
    fn absolute_paths_are_used_as_given() {
        let dir = tempfile::tempdir().unwrap();
        let absolute = dir.path().join("songs.json");
        assert_eq!(resolve_catalog_path(absolute.to_str().unwrap()), absolute);
    }

    #[test]
    fn file_next_to_executable_wins() {
        let exe_dir = tempfile::tempdir().unwrap();
        let build_dir = tempfile::tempdir().unwrap();
        std::fs::write(exe_dir.path().join(DEFAULT_CATALOG_FILE), "[]").unwrap();
        std::fs::write(build_dir.path().join(DEFAULT_CATALOG_FILE), "[]").unwrap();

        let bases = [exe_dir.path().to_path_buf(), build_dir.path().to_path_buf()];
        assert_eq!(
            resolve_against(DEFAULT_CATALOG_FILE, &bases),
            exe_dir.path().join(DEFAULT_CATALOG_FILE)
        );
    }

    #[test]
    fn falls_back_to_build_dir_when_executable_dir_lacks_file() {
        let exe_dir = tempfile::tempdir().unwrap();
        let build_dir = tempfile::tempdir().unwrap();
        std::fs::write(build_dir.path().join(DEFAULT_CATALOG_FILE), "[]").unwrap();

        let bases = [exe_dir.path().to_path_buf(), build_dir.path().to_path_buf()];
        assert_eq!(
            resolve_against(DEFAULT_CATALOG_FILE, &bases),
            build_dir.path().join(DEFAULT_CATALOG_FILE)
        );
    }

    #[test]
    fn missing_everywhere_points_at_build_dir() {
        let exe_dir = tempfile::tempdir().unwrap();
        let build_dir = tempfile::tempdir().unwrap();

        let bases = [exe_dir.path().to_path_buf(), build_dir.path().to_path_buf()];
        let resolved = resolve_against("missing.json", &bases);
        assert_eq!(resolved, build_dir.path().join("missing.json"));
        assert!(Catalog::load(&resolved).is_err());
    }
}

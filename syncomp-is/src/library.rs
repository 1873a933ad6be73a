//! Composition library file
//!
//! Recorded compositions can be kept across runs in a single JSON array
//! file. Appends rewrite the whole file through a temporary sibling and a
//! rename so a crash never leaves a half-written library behind.

use crate::error::SenseResult;
use crate::record::SensoryInput;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct Library {
    path: PathBuf,
}

impl Library {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every stored composition, oldest first. A missing file is an empty library.
    pub fn load(&self) -> SenseResult<Vec<SensoryInput>> {
        if !self.path.exists() {
            debug!("Library {} does not exist yet", self.path.display());
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        let entries: Vec<SensoryInput> = serde_json::from_str(&contents)?;
        debug!("Loaded {} compositions from {}", entries.len(), self.path.display());
        Ok(entries)
    }

    /// Append one composition, returning the new library size
    pub fn append(&self, entry: &SensoryInput) -> SenseResult<usize> {
        let mut entries = self.load()?;
        entries.push(entry.clone());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        info!(
            "Saved composition {} to {} ({} total)",
            entry.id(),
            self.path.display(),
            entries.len()
        );
        Ok(entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SenseError;
    use crate::extractors::{EmotionLevels, RawInput, Rgb};
    use crate::record::Analyzer;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let library = Library::new(dir.path().join("library.json"));
        assert!(library.load().unwrap().is_empty());
    }

    #[test]
    fn test_append_creates_parent_dirs_and_preserves_order() {
        let dir = TempDir::new().unwrap();
        let library = Library::new(dir.path().join("nested").join("library.json"));
        let analyzer = Analyzer::default();

        let first = analyzer
            .analyze(RawInput::Emotion(EmotionLevels::default()))
            .unwrap();
        let second = analyzer
            .analyze(RawInput::Color(Rgb::new(0, 0, 0)))
            .unwrap();

        assert_eq!(library.append(&first).unwrap(), 1);
        assert_eq!(library.append(&second).unwrap(), 2);

        let loaded = library.load().unwrap();
        let ids: Vec<_> = loaded.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![first.id(), second.id()]);
        assert_eq!(loaded[0].parameters(), first.parameters());
        assert_eq!(loaded[1].parameters(), second.parameters());

        // No temporary file left behind
        assert!(!library.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_corrupt_library_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library.json");
        fs::write(&path, "{ not json").unwrap();

        let library = Library::new(&path);
        assert!(matches!(library.load(), Err(SenseError::Json(_))));
    }
}

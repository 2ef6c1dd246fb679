//! Stem manifest: explicit stem-name to audio-path mapping
//!
//! The dashboard used to discover cached stems by scanning the working
//! directory for filename prefixes. The manifest keeps that rule available
//! as one constructor but makes the mapping itself explicit data the host
//! passes in, instead of a hidden filesystem convention.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Canonical stem ordering for iteration and directory discovery
pub const STEM_NAMES: [&str; 4] = ["Vocals", "Drums", "Bass", "Other"];

/// Errors from loading a manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Manifest {path} is not a JSON object of stem-to-path entries: {reason}")]
    Parse { path: String, reason: String },

    #[error("Failed to scan directory {path}: {reason}")]
    Scan { path: String, reason: String },
}

/// Mapping from stem names to their rendered audio files
#[derive(Debug, Clone, Default)]
pub struct StemManifest {
    entries: BTreeMap<String, PathBuf>,
}

impl StemManifest {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a stem entry
    pub fn insert(&mut self, stem: impl Into<String>, path: impl Into<PathBuf>) {
        self.entries.insert(stem.into(), path.into());
    }

    /// Path registered for a stem, if any
    pub fn path(&self, stem: &str) -> Option<&Path> {
        self.entries.get(stem).map(PathBuf::as_path)
    }

    /// Number of registered stems
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stem names in canonical order (Vocals, Drums, Bass, Other), with any
    /// extra stems appended alphabetically
    pub fn stems(&self) -> Vec<&str> {
        let mut names: Vec<&str> = STEM_NAMES
            .iter()
            .copied()
            .filter(|stem| self.entries.contains_key(*stem))
            .collect();

        for key in self.entries.keys() {
            if !STEM_NAMES.contains(&key.as_str()) {
                names.push(key);
            }
        }

        names
    }

    /// Iterate entries in canonical stem order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> + '_ {
        self.stems()
            .into_iter()
            .map(move |stem| (stem, self.entries[stem].as_path()))
    }

    /// Load a manifest from a JSON object of `"Stem": "path"` entries
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ManifestError> {
        let display = path.as_ref().display().to_string();

        let text = fs::read_to_string(&path).map_err(|e| ManifestError::Read {
            path: display.clone(),
            reason: e.to_string(),
        })?;

        let entries: BTreeMap<String, String> =
            serde_json::from_str(&text).map_err(|e| ManifestError::Parse {
                path: display,
                reason: e.to_string(),
            })?;

        Ok(Self {
            entries: entries
                .into_iter()
                .map(|(stem, path)| (stem, PathBuf::from(path)))
                .collect(),
        })
    }

    /// Discover stems by filename: for each canonical stem name, the first
    /// file (in lexical order) whose name starts with the stem and ends with
    /// `extension` (e.g. ".mp3")
    pub fn from_directory<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Self, ManifestError> {
        let dir = dir.as_ref();

        let mut listing: Vec<PathBuf> = fs::read_dir(dir)
            .map_err(|e| ManifestError::Scan {
                path: dir.display().to_string(),
                reason: e.to_string(),
            })?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .collect();

        // Directory order is platform-dependent; sort for determinism
        listing.sort();

        let mut manifest = Self::new();
        for stem in STEM_NAMES {
            for path in &listing {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    if name.starts_with(stem) && name.ends_with(extension) {
                        manifest.insert(stem, path.clone());
                        break;
                    }
                }
            }
        }

        log::debug!(
            "Discovered {} stem file(s) under {}",
            manifest.len(),
            dir.display()
        );

        Ok(manifest)
    }
}

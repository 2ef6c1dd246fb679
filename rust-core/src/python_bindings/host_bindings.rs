//! Python bindings for host-side pieces: stem manifest and waveform player

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::manifest::{ManifestError, StemManifest};
use crate::player::WaveformPlayer;

fn manifest_error_to_py(err: ManifestError) -> PyErr {
    match err {
        ManifestError::Parse { .. } => PyErr::new::<PyValueError, _>(err.to_string()),
        _ => PyErr::new::<PyIOError, _>(err.to_string()),
    }
}

/// Stem manifest exposed to Python
#[pyclass(name = "StemManifest")]
pub struct PyStemManifest {
    manifest: StemManifest,
}

#[pymethods]
impl PyStemManifest {
    /// Create an empty manifest
    #[new]
    fn new() -> Self {
        Self {
            manifest: StemManifest::new(),
        }
    }

    /// Load a manifest from a JSON object of "Stem": "path" entries
    #[staticmethod]
    fn from_json_file(path: &str) -> PyResult<Self> {
        let manifest = StemManifest::from_json_file(path).map_err(manifest_error_to_py)?;
        Ok(Self { manifest })
    }

    /// Discover stems by filename prefix and extension in a directory
    ///
    /// Args:
    ///     dir: Directory holding rendered stem audio
    ///     extension: Filename suffix to match, e.g. ".mp3"
    #[staticmethod]
    #[pyo3(signature = (dir, extension=".mp3"))]
    fn from_directory(dir: &str, extension: &str) -> PyResult<Self> {
        let manifest =
            StemManifest::from_directory(dir, extension).map_err(manifest_error_to_py)?;
        Ok(Self { manifest })
    }

    /// Add or replace a stem entry
    fn insert(&mut self, stem: &str, path: &str) {
        self.manifest.insert(stem, path);
    }

    /// Path registered for a stem, or None
    fn path(&self, stem: &str) -> Option<String> {
        self.manifest
            .path(stem)
            .map(|p| p.display().to_string())
    }

    /// Stem names in canonical order (Vocals, Drums, Bass, Other)
    fn stems(&self) -> Vec<String> {
        self.manifest
            .stems()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// (stem, path) pairs in canonical order
    fn items(&self) -> Vec<(String, String)> {
        self.manifest
            .iter()
            .map(|(stem, path)| (stem.to_string(), path.display().to_string()))
            .collect()
    }

    fn __len__(&self) -> usize {
        self.manifest.len()
    }
}

/// Waveform player exposed to Python
#[pyclass(name = "WaveformPlayer")]
pub struct PyWaveformPlayer {
    player: WaveformPlayer,
}

#[pymethods]
impl PyWaveformPlayer {
    /// Create a player with the dashboard's default styling
    ///
    /// Args:
    ///     height: Total widget height in px
    ///     wave_color: Color of the unplayed waveform
    ///     progress_color: Color of the played region
    #[new]
    #[pyo3(signature = (height=100, wave_color="#a1a1aa", progress_color="#6366f1"))]
    fn new(height: u32, wave_color: &str, progress_color: &str) -> Self {
        Self {
            player: WaveformPlayer {
                height,
                wave_color: wave_color.to_string(),
                progress_color: progress_color.to_string(),
            },
        }
    }

    /// Render the self-contained player HTML for one clip
    ///
    /// Args:
    ///     audio_bytes: Raw encoded audio
    ///     mime: MIME type for the data URL
    ///
    /// Returns:
    ///     Complete HTML document as a string
    #[pyo3(signature = (audio_bytes, mime="audio/mp3"))]
    fn render(&self, audio_bytes: &[u8], mime: &str) -> String {
        self.player.render(audio_bytes, mime)
    }
}

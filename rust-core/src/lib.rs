//! StemScope - Spectral Visualization Core for Source-Separation Demos
//!
//! Renders mel spectrograms and before/after spectral-density charts from
//! audio files, plus the waveform-player widget, with Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![allow(non_local_definitions)]

pub mod audio;
pub mod figure;
pub mod manifest;
pub mod player;
pub mod render;
pub mod spectrum;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use audio::{AudioSignal, DecodeError};
pub use figure::{DensityChart, SpectrogramChart, Theme};
pub use manifest::{ManifestError, StemManifest};
pub use player::WaveformPlayer;

//! Python bindings for chart rendering

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::audio::DecodeError;
use crate::figure::Theme;
use crate::render;

use super::chart_bindings::{PyDensityChart, PySpectrogramChart};

/// Map decode failures onto Python exception types: unreadable paths raise
/// IOError, everything else ValueError
fn decode_error_to_py(err: DecodeError) -> PyErr {
    match err {
        DecodeError::Open { .. } => PyErr::new::<PyIOError, _>(err.to_string()),
        _ => PyErr::new::<PyValueError, _>(err.to_string()),
    }
}

/// Render a mel spectrogram chart for one audio file
///
/// Args:
///     path: Audio file to analyze
///     title: Chart title shown above the raster
///
/// Returns:
///     SpectrogramChart with raster and HTML accessors
#[pyfunction]
#[pyo3(signature = (path, title="Spectrogram"))]
pub fn render_mel_spectrogram(path: &str, title: &str) -> PyResult<PySpectrogramChart> {
    let theme = Theme::default();
    let chart = render::mel_spectrogram(path, title, &theme).map_err(decode_error_to_py)?;
    Ok(PySpectrogramChart::from(chart))
}

/// Render a spectral-density comparison between a mix and an isolated stem
///
/// Args:
///     original_path: The full mix
///     stem_path: The isolated stem
///     stem_label: Stem name; drives the trace color and chart title
///
/// Returns:
///     DensityChart with figure JSON and numpy accessors
#[pyfunction]
pub fn render_psd_comparison(
    original_path: &str,
    stem_path: &str,
    stem_label: &str,
) -> PyResult<PyDensityChart> {
    let theme = Theme::default();
    let chart = render::psd_comparison(original_path, stem_path, stem_label, &theme)
        .map_err(decode_error_to_py)?;
    Ok(PyDensityChart::from(chart))
}

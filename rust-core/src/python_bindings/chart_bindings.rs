//! Python bindings for chart objects

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::figure::{DensityChart, SpectrogramChart};

/// Mel spectrogram chart exposed to Python
#[pyclass(name = "SpectrogramChart")]
pub struct PySpectrogramChart {
    chart: SpectrogramChart,
}

impl From<SpectrogramChart> for PySpectrogramChart {
    fn from(chart: SpectrogramChart) -> Self {
        Self { chart }
    }
}

#[pymethods]
impl PySpectrogramChart {
    /// PNG raster of the dB surface encoded as base64
    fn to_png_base64(&self) -> String {
        self.chart.to_png_base64()
    }

    /// Self-contained HTML block with title, raster, and dB legend
    fn to_html(&self) -> String {
        self.chart.to_html()
    }

    /// Loudest cell of the surface in dB
    fn db_max(&self) -> f64 {
        self.chart.db_max()
    }

    /// Surface shape as (n_mels, frames)
    fn shape(&self) -> (usize, usize) {
        self.chart.shape()
    }

    /// Duration of the source audio in seconds
    fn duration_secs(&self) -> f64 {
        self.chart.duration_secs
    }

    /// Chart title
    fn title(&self) -> String {
        self.chart.title.clone()
    }
}

/// Spectral-density comparison chart exposed to Python
#[pyclass(name = "DensityChart")]
pub struct PyDensityChart {
    chart: DensityChart,
}

impl From<DensityChart> for PyDensityChart {
    fn from(chart: DensityChart) -> Self {
        Self { chart }
    }
}

#[pymethods]
impl PyDensityChart {
    /// Plotly figure JSON (traces, layout, config)
    fn to_json(&self) -> String {
        self.chart.to_json()
    }

    /// Write the figure as a standalone HTML file
    ///
    /// Args:
    ///     path: Output file path
    fn write_html(&self, path: &str) {
        self.chart.write_html(path);
    }

    /// Shared frequency axis in Hz
    ///
    /// Returns:
    ///     Bin frequencies as numpy array
    fn frequencies<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f64>> {
        Ok(PyArray1::from_vec(py, self.chart.frequencies.clone()))
    }

    /// Original-mix spectrum in dB
    fn original_db<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f64>> {
        Ok(PyArray1::from_vec(py, self.chart.original_db.clone()))
    }

    /// Isolated-stem spectrum in dB
    fn stem_db<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f64>> {
        Ok(PyArray1::from_vec(py, self.chart.stem_db.clone()))
    }

    /// Stem label the chart was rendered for
    fn label(&self) -> String {
        self.chart.label.clone()
    }

    /// Chart title
    fn title(&self) -> String {
        self.chart.title.clone()
    }

    /// Trace color resolved from the stem palette
    fn stem_color(&self) -> String {
        self.chart.stem_color.clone()
    }

    /// Number of frequency bins
    fn num_bins(&self) -> usize {
        self.chart.num_bins()
    }
}

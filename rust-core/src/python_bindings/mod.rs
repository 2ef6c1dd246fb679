//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod chart_bindings;
mod host_bindings;
mod render_bindings;

/// Python module definition
#[pymodule]
fn stemscope(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(render_bindings::render_mel_spectrogram, m)?)?;
    m.add_function(wrap_pyfunction!(render_bindings::render_psd_comparison, m)?)?;

    m.add_class::<chart_bindings::PySpectrogramChart>()?;
    m.add_class::<chart_bindings::PyDensityChart>()?;
    m.add_class::<host_bindings::PyStemManifest>()?;
    m.add_class::<host_bindings::PyWaveformPlayer>()?;

    Ok(())
}

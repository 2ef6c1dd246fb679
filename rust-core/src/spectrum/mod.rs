//! Spectral transforms: FFT, windows, mel filterbank

pub mod fft;
pub mod mel;
pub mod windows;

pub use fft::FftEngine;
pub use mel::{power_to_db, MelConfig, MelSpectrogram};
pub use windows::{generate_window, WindowType};

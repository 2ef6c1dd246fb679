//! Chart objects and dashboard styling

pub mod colormap;
pub mod density;
pub mod spectrogram;
pub mod theme;

pub use density::DensityChart;
pub use spectrogram::SpectrogramChart;
pub use theme::Theme;

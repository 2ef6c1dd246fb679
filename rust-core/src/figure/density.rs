//! Comparative spectral-density chart
//!
//! Two overlaid line traces on a logarithmic frequency axis: the faded
//! original mix underneath, the isolated stem in its palette color on top.

use std::path::Path;

use plotly::common::{Line, Mode};
use plotly::layout::AxisType;
use plotly::{Plot, Scatter};

use super::theme::Theme;

/// Rendered power-spectral-density comparison
///
/// The three series share one length: one dB value per FFT bin, both files
/// truncated to the same sample count before transforming.
#[derive(Debug, Clone)]
pub struct DensityChart {
    /// Shared frequency axis in Hz
    pub frequencies: Vec<f64>,

    /// Original-mix spectrum in dB
    pub original_db: Vec<f64>,

    /// Isolated-stem spectrum in dB
    pub stem_db: Vec<f64>,

    /// Stem label ("Vocals", "Drums", ...)
    pub label: String,

    /// Chart title
    pub title: String,

    /// Stem trace color resolved from the theme palette
    pub stem_color: String,

    theme: Theme,
}

impl DensityChart {
    /// Assemble a chart from computed spectra
    ///
    /// The title and the stem trace color are derived from `label` here, so
    /// downstream consumers only deal with a finished figure description.
    pub fn new(
        frequencies: Vec<f64>,
        original_db: Vec<f64>,
        stem_db: Vec<f64>,
        label: &str,
        theme: &Theme,
    ) -> Self {
        Self {
            frequencies,
            original_db,
            stem_db,
            label: label.to_string(),
            title: format!("Spectral Analysis: {} Isolation", label),
            stem_color: theme.stem_color(label),
            theme: theme.clone(),
        }
    }

    /// Number of frequency bins
    pub fn num_bins(&self) -> usize {
        self.frequencies.len()
    }

    /// Build the plotly figure: mix underneath, stem on top, log-x axis
    pub fn to_plot(&self) -> Plot {
        let original = Scatter::new(self.frequencies.clone(), self.original_db.clone())
            .mode(Mode::Lines)
            .name("Original Mix")
            .opacity(self.theme.mix_opacity)
            .line(
                Line::new()
                    .color(self.theme.mix_color.clone())
                    .width(self.theme.mix_width),
            );

        let stem = Scatter::new(self.frequencies.clone(), self.stem_db.clone())
            .mode(Mode::Lines)
            .name(&format!("Isolated {}", self.label))
            .line(
                Line::new()
                    .color(self.stem_color.clone())
                    .width(self.theme.stem_width),
            );

        let layout = self
            .theme
            .to_layout(&self.title)
            .x_axis(
                self.theme
                    .create_axis("Frequency (Hz)")
                    .type_(AxisType::Log),
            )
            .y_axis(self.theme.create_axis("Power (dB)"));

        let mut plot = Plot::new();
        plot.add_trace(original);
        plot.add_trace(stem);
        plot.set_layout(layout);
        plot
    }

    /// Figure JSON (traces, layout, config) for a plotly-speaking host
    pub fn to_json(&self) -> String {
        self.to_plot().to_json()
    }

    /// Write the figure as a standalone HTML file
    pub fn write_html<P: AsRef<Path>>(&self, path: P) {
        self.to_plot().write_html(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_chart(label: &str) -> DensityChart {
        let theme = Theme::default();
        DensityChart::new(
            vec![0.0, 10.0, 20.0, 30.0],
            vec![-20.0, -10.0, -15.0, -40.0],
            vec![-60.0, -12.0, -30.0, -80.0],
            label,
            &theme,
        )
    }

    #[test]
    fn test_title_and_color_derivation() {
        let chart = sample_chart("Drums");
        assert_eq!(chart.title, "Spectral Analysis: Drums Isolation");
        assert_eq!(chart.stem_color, "#ef4444");
        assert_eq!(chart.num_bins(), 4);

        // Unknown stems keep the chart working with the fallback color
        let unknown = sample_chart("Piano");
        assert_eq!(unknown.stem_color, "white");
    }

    #[test]
    fn test_figure_json_contents() {
        let json = sample_chart("Vocals").to_json();

        assert!(json.contains("Original Mix"));
        assert!(json.contains("Isolated Vocals"));
        assert!(json.contains("#3b82f6"));
        assert!(json.contains("Spectral Analysis: Vocals Isolation"));
        assert!(json.contains("log"));
        assert!(json.contains("#09090b"));
    }
}

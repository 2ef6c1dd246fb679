//! Dashboard chart theme
//!
//! Set-once styling shared by every chart in one dashboard run: the host
//! builds a `Theme` (or deserializes one from its config) before rendering
//! and passes it by reference to each render call.

use std::collections::BTreeMap;

use plotly::common::{Font, Title};
use plotly::layout::{Axis, Layout};
use serde::{Deserialize, Serialize};

/// Chart styling for the dark dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Figure and plot-area background
    pub background: String,

    /// Text and tick color
    pub foreground: String,

    /// Grid line color
    pub grid: String,

    /// Font stack applied to every label
    pub font_family: String,

    /// Base font size in px
    pub font_size: usize,

    /// Title font size in px
    pub title_font_size: usize,

    /// Line color of the original-mix trace in density charts
    pub mix_color: String,

    /// Line width of the original-mix trace
    pub mix_width: f64,

    /// Opacity of the original-mix trace, so the stem reads on top
    pub mix_opacity: f64,

    /// Line width of the isolated-stem trace
    pub stem_width: f64,

    /// Stem name to trace color
    pub stem_palette: BTreeMap<String, String>,

    /// Trace color for stems missing from the palette
    pub fallback_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        let mut stem_palette = BTreeMap::new();
        stem_palette.insert("Vocals".to_string(), "#3b82f6".to_string()); // Blue
        stem_palette.insert("Drums".to_string(), "#ef4444".to_string()); // Red
        stem_palette.insert("Bass".to_string(), "#eab308".to_string()); // Yellow
        stem_palette.insert("Other".to_string(), "#22c55e".to_string()); // Green

        Self {
            background: "#09090b".to_string(), // Zinc-950
            foreground: "white".to_string(),
            grid: "#27272a".to_string(), // Zinc-800
            font_family: "Figtree, sans-serif".to_string(),
            font_size: 12,
            title_font_size: 14,
            mix_color: "gray".to_string(),
            mix_width: 1.0,
            mix_opacity: 0.5,
            stem_width: 2.0,
            stem_palette,
            fallback_color: "white".to_string(),
        }
    }
}

impl Theme {
    /// Trace color for a stem label; unknown labels get the fallback color
    pub fn stem_color(&self, label: &str) -> String {
        self.stem_palette
            .get(label)
            .cloned()
            .unwrap_or_else(|| self.fallback_color.clone())
    }

    /// Plotly layout with the dashboard colors and fonts applied
    pub fn to_layout(&self, title: &str) -> Layout {
        Layout::new()
            .title(
                Title::with_text(title).font(
                    Font::new()
                        .family(&self.font_family)
                        .size(self.title_font_size)
                        .color(self.foreground.clone()),
                ),
            )
            .paper_background_color(self.background.clone())
            .plot_background_color(self.background.clone())
            .font(
                Font::new()
                    .family(&self.font_family)
                    .size(self.font_size)
                    .color(self.foreground.clone()),
            )
    }

    /// Themed plotly axis with a label and subdued grid
    pub fn create_axis(&self, title: &str) -> Axis {
        Axis::new()
            .title(
                Title::with_text(title).font(
                    Font::new()
                        .family(&self.font_family)
                        .size(self.font_size)
                        .color(self.foreground.clone()),
                ),
            )
            .tick_font(
                Font::new()
                    .family(&self.font_family)
                    .size(self.font_size)
                    .color(self.foreground.clone()),
            )
            .grid_color(self.grid.clone())
            .show_grid(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_palette() {
        let theme = Theme::default();

        assert_eq!(theme.stem_color("Vocals"), "#3b82f6");
        assert_eq!(theme.stem_color("Drums"), "#ef4444");
        assert_eq!(theme.stem_color("Bass"), "#eab308");
        assert_eq!(theme.stem_color("Other"), "#22c55e");

        // Anything outside the four known stems falls back to white
        assert_eq!(theme.stem_color("Piano"), "white");
        assert_eq!(theme.stem_color(""), "white");
    }

    #[test]
    fn test_default_dashboard_colors() {
        let theme = Theme::default();
        assert_eq!(theme.background, "#09090b");
        assert_eq!(theme.foreground, "white");
        assert!(theme.font_family.starts_with("Figtree"));
        assert_eq!(theme.mix_opacity, 0.5);
    }

    #[test]
    fn test_theme_roundtrips_through_json() {
        // Hosts may keep the theme in a JSON config file
        let theme = Theme::default();
        let json = serde_json::to_string(&theme).unwrap();
        let restored: Theme = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.background, theme.background);
        assert_eq!(restored.stem_color("Bass"), theme.stem_color("Bass"));
    }
}

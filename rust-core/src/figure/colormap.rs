//! Magma colormap for spectrogram rasters
//!
//! Piecewise-linear ramp over the ten published Magma anchor colors, the
//! same scale matplotlib and plotly ship.

/// Magma anchor colors, evenly spaced over [0, 1] from near-black to pale yellow
const MAGMA_ANCHORS: [[u8; 3]; 10] = [
    [0x00, 0x00, 0x04],
    [0x18, 0x0f, 0x3d],
    [0x45, 0x10, 0x77],
    [0x72, 0x1f, 0x81],
    [0x9f, 0x2f, 0x7f],
    [0xcd, 0x40, 0x71],
    [0xf1, 0x60, 0x5d],
    [0xfd, 0x95, 0x67],
    [0xfe, 0xca, 0x8d],
    [0xfc, 0xfd, 0xbf],
];

/// Map a normalized value in [0, 1] to a Magma RGB color
///
/// Values outside the range clamp to the endpoints.
pub fn magma(t: f64) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let scaled = t * (MAGMA_ANCHORS.len() - 1) as f64;
    let index = (scaled.floor() as usize).min(MAGMA_ANCHORS.len() - 2);
    let frac = scaled - index as f64;

    let low = MAGMA_ANCHORS[index];
    let high = MAGMA_ANCHORS[index + 1];

    let mut rgb = [0u8; 3];
    for (channel, value) in rgb.iter_mut().enumerate() {
        let mixed = low[channel] as f64 + (high[channel] as f64 - low[channel] as f64) * frac;
        *value = mixed.round() as u8;
    }
    rgb
}

/// CSS linear-gradient over the anchor colors, for HTML color legends
pub fn magma_css_gradient() -> String {
    let stops: Vec<String> = MAGMA_ANCHORS
        .iter()
        .map(|[r, g, b]| format!("#{:02x}{:02x}{:02x}", r, g, b))
        .collect();
    format!("linear-gradient(to right, {})", stops.join(", "))
}

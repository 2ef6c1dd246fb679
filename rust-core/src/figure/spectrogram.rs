//! Static mel-spectrogram chart
//!
//! Holds the dB surface plus axis metadata, and rasterizes it to a
//! magma-mapped PNG or a self-contained dark HTML block for embedding.

use base64::Engine;
use image::codecs::png::PngEncoder;
use image::{ImageBuffer, ImageEncoder, Rgb, RgbImage};
use ndarray::Array2;

use super::colormap::{magma, magma_css_gradient};

/// Rendered mel spectrogram
///
/// The surface is indexed (mel_band, time_frame) and referenced to its own
/// peak, so the maximum is exactly 0 dB.
#[derive(Debug, Clone)]
pub struct SpectrogramChart {
    /// dB values, shape (n_mels, frames)
    pub db: Array2<f64>,

    /// Caller-supplied chart title
    pub title: String,

    /// Duration of the source audio in seconds
    pub duration_secs: f64,

    /// Sample rate of the source audio in Hz
    pub sample_rate: u32,

    /// Upper filterbank frequency in Hz
    pub fmax: f64,

    /// Color range of the legend as (min_db, max_db)
    pub db_range: (f64, f64),

    /// Background color carried from the theme
    pub background: String,

    /// Text color carried from the theme
    pub foreground: String,

    /// Font stack carried from the theme
    pub font_family: String,
}

impl SpectrogramChart {
    /// Surface shape as (n_mels, frames)
    pub fn shape(&self) -> (usize, usize) {
        self.db.dim()
    }

    /// Loudest cell of the surface in dB
    pub fn db_max(&self) -> f64 {
        self.db.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Rasterize the surface to a magma-mapped RGB image
    ///
    /// One pixel per cell: width is the frame count, height the band count,
    /// with low bands at the bottom of the image.
    pub fn to_image(&self) -> RgbImage {
        let (n_mels, frames) = self.db.dim();
        let mut img = ImageBuffer::new(frames as u32, n_mels as u32);

        let (low, high) = self.db_range;
        let span = if high > low { high - low } else { 1.0 };

        for (band, row) in self.db.outer_iter().enumerate() {
            let y = (n_mels - 1 - band) as u32;
            for (frame, &value) in row.iter().enumerate() {
                let t = (value - low) / span;
                img.put_pixel(frame as u32, y, Rgb(magma(t)));
            }
        }

        img
    }

    /// PNG raster encoded as base64, ready for a data URL
    ///
    /// Encoding failures are logged and yield an empty string rather than
    /// poisoning the host page.
    pub fn to_png_base64(&self) -> String {
        let img = self.to_image();
        let mut png_bytes: Vec<u8> = Vec::new();
        let encoder = PngEncoder::new(&mut png_bytes);

        if let Err(e) =
            encoder.write_image(img.as_raw(), img.width(), img.height(), image::ColorType::Rgb8)
        {
            log::error!("PNG encoding failed for '{}': {}", self.title, e);
            return String::new();
        }

        base64::engine::general_purpose::STANDARD.encode(&png_bytes)
    }

    /// Self-contained HTML block: title, raster, time axis, and dB legend
    pub fn to_html(&self) -> String {
        let (n_mels, _) = self.db.dim();
        let (low, high) = self.db_range;

        format!(
            concat!(
                "<div style=\"background-color:{bg};color:{fg};font-family:{font};",
                "padding:16px;border-radius:8px;\">\n",
                "  <div style=\"font-size:14px;margin-bottom:8px;\">{title}</div>\n",
                "  <img src=\"data:image/png;base64,{png}\" alt=\"{title}\" ",
                "style=\"width:100%;display:block;border-radius:4px;\"/>\n",
                "  <div style=\"display:flex;justify-content:space-between;",
                "font-size:11px;color:#a1a1aa;margin-top:4px;\">\n",
                "    <span>0.0 s</span><span>{bands} mel bands &middot; 0&ndash;{fmax:.0} Hz</span>",
                "<span>{duration:.1} s</span>\n",
                "  </div>\n",
                "  <div style=\"display:flex;align-items:center;gap:8px;",
                "font-size:11px;color:#a1a1aa;margin-top:8px;\">\n",
                "    <span>{low:+.0} dB</span>\n",
                "    <div style=\"flex:1;height:10px;border-radius:2px;background:{gradient};\"></div>\n",
                "    <span>{high:+.0} dB</span>\n",
                "  </div>\n",
                "</div>"
            ),
            bg = self.background,
            fg = self.foreground,
            font = self.font_family,
            title = self.title,
            png = self.to_png_base64(),
            bands = n_mels,
            fmax = self.fmax,
            duration = self.duration_secs,
            low = low,
            high = high,
            gradient = magma_css_gradient(),
        )
    }
}

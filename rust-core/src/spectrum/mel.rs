//! Mel-scaled spectrogram computation
//!
//! STFT power spectra folded through a Slaney-style mel filterbank. Scale,
//! normalization, framing, and dB conversion follow librosa's
//! `melspectrogram` / `power_to_db` defaults so charts match the reference
//! notebooks pixel for pixel.

use ndarray::Array2;

use super::fft::FftEngine;
use super::windows::{generate_window, WindowType};

/// Smallest power considered non-silent in dB conversion
const AMIN: f64 = 1e-10;

/// Convert frequency in Hz to mels (Slaney scale: linear below 1 kHz, log above)
pub fn hz_to_mel(hz: f64) -> f64 {
    if hz < 1000.0 {
        3.0 * hz / 200.0
    } else {
        15.0 + 27.0 * (hz / 1000.0).ln() / 6.4_f64.ln()
    }
}

/// Convert mels back to frequency in Hz
pub fn mel_to_hz(mel: f64) -> f64 {
    if mel < 15.0 {
        200.0 * mel / 3.0
    } else {
        1000.0 * ((mel - 15.0) * 6.4_f64.ln() / 27.0).exp()
    }
}

/// Build a triangular mel filterbank, shape (n_mels, n_fft/2 + 1)
///
/// # Arguments
/// * `n_mels` - Number of mel bands
/// * `n_fft` - FFT size the filterbank will be applied to
/// * `sample_rate` - Sample rate of the analyzed signal in Hz
/// * `fmin` - Lowest band edge in Hz
/// * `fmax` - Highest band edge in Hz
pub fn mel_filterbank(
    n_mels: usize,
    n_fft: usize,
    sample_rate: f64,
    fmin: f64,
    fmax: f64,
) -> Array2<f64> {
    let num_bins = n_fft / 2 + 1;
    let mut filterbank = Array2::<f64>::zeros((n_mels, num_bins));

    let mel_min = hz_to_mel(fmin);
    let mel_max = hz_to_mel(fmax);

    // n_mels + 2 band edges, equally spaced on the mel scale
    let hz_points: Vec<f64> = (0..n_mels + 2)
        .map(|i| mel_to_hz(mel_min + (mel_max - mel_min) * i as f64 / (n_mels + 1) as f64))
        .collect();

    for m in 0..n_mels {
        let f_left = hz_points[m];
        let f_center = hz_points[m + 1];
        let f_right = hz_points[m + 2];

        // Slaney normalization: each triangle integrates to the same area
        let enorm = 2.0 / (f_right - f_left);

        for bin in 0..num_bins {
            let freq = bin as f64 * sample_rate / n_fft as f64;
            let lower = (freq - f_left) / (f_center - f_left);
            let upper = (f_right - freq) / (f_right - f_center);
            let weight = lower.min(upper).max(0.0);
            filterbank[[m, bin]] = weight * enorm;
        }
    }

    filterbank
}

/// Mel spectrogram configuration
#[derive(Debug, Clone)]
pub struct MelConfig {
    /// Sample rate of the input signal in Hz
    pub sample_rate: u32,

    /// FFT size per analysis frame
    pub n_fft: usize,

    /// Hop between frame starts, in samples; zero is treated as one
    pub hop_length: usize,

    /// Number of mel bands
    pub n_mels: usize,

    /// Lowest filterbank frequency in Hz
    pub fmin: f64,

    /// Highest filterbank frequency in Hz (clamped to Nyquist at build time)
    pub fmax: f64,

    /// Analysis window applied to each frame
    pub window_type: WindowType,
}

impl Default for MelConfig {
    fn default() -> Self {
        Self {
            sample_rate: 22050,
            n_fft: 2048,
            hop_length: 512,
            n_mels: 128,
            fmin: 0.0,
            fmax: 8000.0,
            window_type: WindowType::Hann,
        }
    }
}

/// Mel spectrogram processor
///
/// Owns the window, filterbank, and FFT plan so repeated frames reuse the
/// same buffers.
pub struct MelSpectrogram {
    config: MelConfig,
    fmax: f64,
    window: Vec<f64>,
    filterbank: Array2<f64>,
    fft_engine: FftEngine,
}

impl MelSpectrogram {
    /// Create a processor for the given configuration
    pub fn new(config: MelConfig) -> Self {
        // A band edge past Nyquist would leave the top filters without
        // support, so the effective fmax is clamped
        let nyquist = config.sample_rate as f64 / 2.0;
        let fmax = config.fmax.min(nyquist);

        let window = generate_window(config.window_type, config.n_fft);
        let filterbank = mel_filterbank(
            config.n_mels,
            config.n_fft,
            config.sample_rate as f64,
            config.fmin,
            fmax,
        );
        let fft_engine = FftEngine::new(config.n_fft);

        Self {
            config,
            fmax,
            window,
            filterbank,
            fft_engine,
        }
    }

    /// Effective upper filterbank frequency after the Nyquist clamp
    pub fn fmax(&self) -> f64 {
        self.fmax
    }

    /// Compute the mel power spectrogram, shape (n_mels, frames)
    ///
    /// Frames are centered on their hop positions: the signal is padded with
    /// n_fft/2 zeros on each side, giving 1 + len/hop frames. An empty signal
    /// yields a single all-zero frame rather than an error.
    pub fn compute(&mut self, samples: &[f32]) -> Array2<f64> {
        let n_fft = self.config.n_fft;
        // A zero hop would never advance the frame cursor; treat it as one
        let hop = self.config.hop_length.max(1);

        let pad = n_fft / 2;
        let mut padded = vec![0.0f64; samples.len() + 2 * pad];
        for (i, &sample) in samples.iter().enumerate() {
            padded[pad + i] = sample as f64;
        }

        let num_frames = 1 + samples.len() / hop;
        let num_bins = self.fft_engine.num_bins();

        let mut power = Array2::<f64>::zeros((num_bins, num_frames));
        let mut frame = vec![0.0f64; n_fft];

        for t in 0..num_frames {
            let start = t * hop;
            for (i, value) in frame.iter_mut().enumerate() {
                let sample = padded.get(start + i).copied().unwrap_or(0.0);
                *value = sample * self.window[i];
            }

            let spectrum = self.fft_engine.compute_power(&frame);
            for (bin, &p) in spectrum.iter().enumerate() {
                power[[bin, t]] = p;
            }
        }

        log::debug!(
            "Mel spectrogram: {} samples -> {} bands x {} frames",
            samples.len(),
            self.config.n_mels,
            num_frames
        );

        self.filterbank.dot(&power)
    }
}

/// Convert a power spectrogram to decibels referenced to its own maximum
///
/// Matches librosa's `power_to_db(S, ref=np.max)`: the loudest cell maps to
/// exactly 0 dB, values are floored at `amin` before the log, and anything
/// more than `top_db` below the peak is clamped. An all-zero input comes out
/// all-zero (finite), never -inf.
pub fn power_to_db(power: &Array2<f64>, top_db: f64) -> Array2<f64> {
    let ref_power = power.iter().cloned().fold(0.0_f64, f64::max).max(AMIN);
    let ref_db = 10.0 * ref_power.log10();

    let mut db = power.mapv(|p| 10.0 * p.max(AMIN).log10() - ref_db);

    let max_db = db.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let floor = max_db - top_db;
    db.mapv_inplace(|v| v.max(floor));

    db
}

//! FFT engine using realfft for real-valued signals
//!
//! Computes one-sided spectra for chart rendering. Engines are sized per
//! signal, so a whole clip can be transformed in a single pass.

use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

/// FFT engine for real-valued signals
pub struct FftEngine {
    /// FFT size (number of samples)
    fft_size: usize,

    /// Real FFT processor
    r2c: Arc<dyn RealToComplex<f64>>,

    /// Reusable input buffer
    input_buffer: Vec<f64>,

    /// Reusable output buffer (complex spectrum)
    output_buffer: Vec<num_complex::Complex<f64>>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size (number of samples); any positive length works,
    ///   power of two or not
    pub fn new(fft_size: usize) -> Self {
        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(fft_size);

        let input_buffer = vec![0.0; fft_size];
        let output_buffer = vec![num_complex::Complex::new(0.0, 0.0); fft_size / 2 + 1];

        Self {
            fft_size,
            r2c,
            input_buffer,
            output_buffer,
        }
    }

    /// Compute FFT and return magnitude spectrum
    ///
    /// # Arguments
    /// * `signal` - Input signal (zero-padded if shorter than fft_size)
    ///
    /// # Returns
    /// Magnitude spectrum |X[k]| for k = 0..fft_size/2 (positive frequencies only)
    pub fn compute_magnitude(&mut self, signal: &[f64]) -> Vec<f64> {
        // Copy signal to input buffer with zero-padding
        let copy_len = signal.len().min(self.fft_size);
        self.input_buffer[..copy_len].copy_from_slice(&signal[..copy_len]);
        if copy_len < self.fft_size {
            self.input_buffer[copy_len..].fill(0.0);
        }

        // Compute FFT
        self.r2c
            .process(&mut self.input_buffer, &mut self.output_buffer)
            .expect("FFT processing failed");

        // Calculate magnitude
        self.output_buffer.iter().map(|c| c.norm()).collect()
    }

    /// Compute power spectrum (magnitude squared)
    pub fn compute_power(&mut self, signal: &[f64]) -> Vec<f64> {
        self.compute_magnitude(signal)
            .iter()
            .map(|&mag| mag * mag)
            .collect()
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Get number of frequency bins (fft_size/2 + 1 for real FFT)
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2 + 1
    }

    /// Get the frequency of each bin in Hz: f[k] = k * sample_rate / fft_size
    pub fn frequency_bins(&self, sample_rate: f64) -> Vec<f64> {
        (0..self.num_bins())
            .map(|bin| bin as f64 * sample_rate / self.fft_size as f64)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_fft_dc_signal() {
        let mut fft = FftEngine::new(1024);

        // Constant signal filling the whole window
        let signal = vec![1.0; 1024];
        let spectrum = fft.compute_magnitude(&signal);

        // All energy lands in the DC bin
        assert!(spectrum[0] > 1000.0);  // ~1024
        assert!(spectrum[10] < 1.0);
    }

    #[test]
    fn test_fft_zero_padded_pulse() {
        let mut fft = FftEngine::new(1024);

        // 100 ones zero-padded to 1024 form a rectangular pulse: the DC bin
        // sums the pulse, and off-DC bins follow the Dirichlet kernel
        // |sin(100*pi*k/N) / sin(pi*k/N)| rather than dropping to zero
        let signal = vec![1.0; 100];
        let spectrum = fft.compute_magnitude(&signal);

        assert!((spectrum[0] - 100.0).abs() < 1e-9);

        let k = 10.0 * PI / 1024.0;
        let expected = ((100.0 * k).sin() / k.sin()).abs();
        assert!((spectrum[10] - expected).abs() < 1e-9);
    }

    #[test]
    fn test_fft_sine_wave() {
        let sample_rate = 44100.0;
        let mut fft = FftEngine::new(1024);

        // 440 Hz sine sampled at 44.1 kHz
        let freq = 440.0;
        let signal: Vec<f64> = (0..1024)
            .map(|n| (2.0 * PI * freq * n as f64 / sample_rate).sin())
            .collect();

        let spectrum = fft.compute_magnitude(&signal);

        // Find peak bin
        let (peak_bin, &peak_mag) = spectrum
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .unwrap();

        // Peak should land on the bin nearest 440 Hz
        let expected_bin = (freq * 1024.0 / sample_rate).round() as usize;
        assert!((peak_bin as i32 - expected_bin as i32).abs() <= 1);

        // Peak magnitude should be roughly N/2 for a full-scale sine
        assert!(peak_mag > 400.0 && peak_mag < 600.0);
    }

    #[test]
    fn test_non_power_of_two_length() {
        // Clip lengths are arbitrary, so odd sizes must work too
        let mut fft = FftEngine::new(44100);
        let signal = vec![1.0; 44100];
        let spectrum = fft.compute_magnitude(&signal);

        assert_eq!(spectrum.len(), 44100 / 2 + 1);
        assert!(spectrum[0] > 44000.0);
    }

    #[test]
    fn test_frequency_bins() {
        let fft = FftEngine::new(1024);
        let freqs = fft.frequency_bins(44100.0);

        assert_eq!(freqs.len(), 513);  // 1024/2 + 1
        assert_eq!(freqs[0], 0.0);     // DC
        assert!((freqs[512] - 22050.0).abs() < 1e-9);  // Nyquist
        assert!((freqs[1] - 44100.0 / 1024.0).abs() < 1e-9);
    }
}

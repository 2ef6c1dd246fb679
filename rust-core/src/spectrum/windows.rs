//! Window functions for STFT framing
//!
//! Periodic (DFT-even) windows: the denominator is N rather than N-1, so the
//! implied continuation w[N] = w[0] tiles seamlessly across hops.

use std::f64::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    /// Hann window: w[n] = 0.5 - 0.5*cos(2πn/N)
    Hann,

    /// Hamming window: w[n] = 0.54 - 0.46*cos(2πn/N)
    Hamming,

    /// Blackman window: w[n] = 0.42 - 0.5*cos(2πn/N) + 0.08*cos(4πn/N)
    Blackman,

    /// Rectangular window (no windowing)
    Rectangular,
}

/// Generate periodic window coefficients
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (N)
///
/// # Returns
/// Vector of window coefficients w[n] for n = 0..N-1
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f64> {
    let n_total = length as f64;
    let mut window = Vec::with_capacity(length);

    match window_type {
        WindowType::Hann => {
            // w[n] = 0.5 - 0.5*cos(2πn/N)
            for n in 0..length {
                let angle = 2.0 * PI * n as f64 / n_total;
                window.push(0.5 - 0.5 * angle.cos());
            }
        }

        WindowType::Hamming => {
            // w[n] = 0.54 - 0.46*cos(2πn/N)
            for n in 0..length {
                let angle = 2.0 * PI * n as f64 / n_total;
                window.push(0.54 - 0.46 * angle.cos());
            }
        }

        WindowType::Blackman => {
            // w[n] = 0.42 - 0.5*cos(2πn/N) + 0.08*cos(4πn/N)
            for n in 0..length {
                let angle1 = 2.0 * PI * n as f64 / n_total;
                let angle2 = 4.0 * PI * n as f64 / n_total;
                window.push(0.42 - 0.5 * angle1.cos() + 0.08 * angle2.cos());
            }
        }

        WindowType::Rectangular => {
            // w[n] = 1 for all n
            window.resize(length, 1.0);
        }
    }

    window
}

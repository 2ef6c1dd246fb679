//! Sample-rate conversion via rubato
//!
//! FFT-based synchronous resampling in fixed-size chunks. Used to bring an
//! isolated stem onto the mix's rate before the two share a frequency axis.

use rubato::{FftFixedInOut, Resampler};

use super::decode::DecodeError;

/// Requested input chunk size; rubato may adjust it for the rate ratio
const CHUNK_SIZE: usize = 1024;

/// Resample a mono signal from one rate to another
///
/// The final partial chunk is zero-padded through the resampler and the
/// output is truncated to round(len * to_rate / from_rate) samples. Equal
/// rates and empty inputs pass through unchanged.
///
/// # Arguments
/// * `samples` - Input signal
/// * `from_rate` - Input sample rate in Hz
/// * `to_rate` - Output sample rate in Hz
pub fn resample(samples: &[f32], from_rate: u32, to_rate: u32) -> Result<Vec<f32>, DecodeError> {
    if from_rate == to_rate || samples.is_empty() {
        return Ok(samples.to_vec());
    }

    let mut resampler =
        FftFixedInOut::<f64>::new(from_rate as usize, to_rate as usize, CHUNK_SIZE, 1).map_err(
            |e| DecodeError::Resample {
                from: from_rate,
                to: to_rate,
                reason: e.to_string(),
            },
        )?;

    let chunk_len = resampler.input_frames_next();
    let expected_len =
        (samples.len() as f64 * to_rate as f64 / from_rate as f64).round() as usize;

    let input: Vec<f64> = samples.iter().map(|&s| s as f64).collect();
    let mut chunk = vec![vec![0.0_f64; chunk_len]];
    let mut output: Vec<f32> = Vec::with_capacity(expected_len + chunk_len);

    for block in input.chunks(chunk_len) {
        chunk[0][..block.len()].copy_from_slice(block);
        chunk[0][block.len()..].fill(0.0);

        let processed = resampler
            .process(&chunk, None)
            .map_err(|e| DecodeError::Resample {
                from: from_rate,
                to: to_rate,
                reason: e.to_string(),
            })?;
        output.extend(processed[0].iter().map(|&s| s as f32));
    }

    // Zero padding in the tail chunk produces extra samples past the
    // rate-scaled length
    output.truncate(expected_len);

    log::debug!(
        "Resampled {} samples at {} Hz to {} samples at {} Hz",
        samples.len(),
        from_rate,
        output.len(),
        to_rate
    );

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_same_rate_passthrough() {
        let samples = vec![0.1, -0.2, 0.3];
        let out = resample(&samples, 44100, 44100).unwrap();
        assert_eq!(out, samples);
    }

    #[test]
    fn test_empty_input() {
        let out = resample(&[], 48000, 44100).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_halving_rate_halves_length() {
        let samples: Vec<f32> = (0..44100)
            .map(|n| (2.0 * PI * 440.0 * n as f64 / 44100.0).sin() as f32)
            .collect();

        let out = resample(&samples, 44100, 22050).unwrap();
        assert_eq!(out.len(), 22050);
        assert!(out.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_48k_to_44k_length() {
        let samples = vec![0.5_f32; 48000];
        let out = resample(&samples, 48000, 44100).unwrap();
        assert_eq!(out.len(), 44100);
    }

    #[test]
    fn test_tone_survives_resampling() {
        // A 1 kHz tone resampled 44.1k -> 48k keeps its amplitude envelope
        let samples: Vec<f32> = (0..44100)
            .map(|n| (2.0 * PI * 1000.0 * n as f64 / 44100.0).sin() as f32)
            .collect();

        let out = resample(&samples, 44100, 48000).unwrap();
        assert_eq!(out.len(), 48000);

        // Skip the filter warmup at both edges before measuring
        let interior = &out[4800..43200];
        let peak = interior.iter().fold(0.0_f32, |acc, &s| acc.max(s.abs()));
        assert!(peak > 0.9 && peak < 1.1, "peak was {}", peak);
    }
}

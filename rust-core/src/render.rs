//! Chart rendering entry points
//!
//! The two dashboard operations: a mel spectrogram for a single file, and a
//! power-spectral-density comparison between the original mix and one
//! isolated stem.

use std::path::Path;

use crate::audio;
use crate::figure::{DensityChart, SpectrogramChart, Theme};
use crate::spectrum::fft::FftEngine;
use crate::spectrum::mel::{power_to_db, MelConfig, MelSpectrogram};

/// dB below the peak where the spectrogram color range bottoms out
const SPECTROGRAM_TOP_DB: f64 = 80.0;

/// Additive epsilon keeping density magnitudes finite for silent bins
const DB_EPSILON: f64 = 1e-6;

/// Render a mel spectrogram chart for one audio file
///
/// The file is decoded at its native rate and analyzed with the fixed
/// dashboard parameters (128 mel bands up to 8 kHz). The surface is
/// referenced to its own peak, so the loudest cell is exactly 0 dB and the
/// color range spans [-80, 0] dB.
///
/// # Arguments
/// * `path` - Audio file to analyze
/// * `title` - Chart title shown above the raster
/// * `theme` - Dashboard styling
pub fn mel_spectrogram<P: AsRef<Path>>(
    path: P,
    title: &str,
    theme: &Theme,
) -> Result<SpectrogramChart, audio::DecodeError> {
    let signal = audio::decode(&path)?;

    let config = MelConfig {
        sample_rate: signal.sample_rate,
        ..MelConfig::default()
    };
    let mut mel = MelSpectrogram::new(config);
    let fmax = mel.fmax();

    let power = mel.compute(&signal.samples);
    let db = power_to_db(&power, SPECTROGRAM_TOP_DB);
    let db_max = db.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    log::debug!(
        "Spectrogram '{}': {:.2} s -> {:?} cells, peak {:.1} dB",
        title,
        signal.duration_secs(),
        db.dim(),
        db_max
    );

    Ok(SpectrogramChart {
        db,
        title: title.to_string(),
        duration_secs: signal.duration_secs(),
        sample_rate: signal.sample_rate,
        fmax,
        db_range: (db_max - SPECTROGRAM_TOP_DB, db_max),
        background: theme.background.clone(),
        foreground: theme.foreground.clone(),
        font_family: theme.font_family.clone(),
    })
}

/// Render a spectral-density comparison between a mix and an isolated stem
///
/// Both files are decoded in full; if their rates differ the stem is
/// resampled to the mix's rate so the two spectra share one frequency axis.
/// The signals are then truncated to the shorter length and transformed in a
/// single FFT each, giving `min_len / 2 + 1` bins at `sample_rate / min_len`
/// Hz spacing. Magnitudes map to dB as `20*log10(mag + 1e-6)`, keeping
/// silent bins finite at -120 dB.
///
/// An empty pair (either file decoding to zero samples) produces a chart
/// with empty traces rather than an error.
///
/// # Arguments
/// * `original_path` - The full mix
/// * `stem_path` - The isolated stem to compare against it
/// * `stem_label` - Stem name; drives the trace color and chart title
/// * `theme` - Dashboard styling
pub fn psd_comparison<P: AsRef<Path>, Q: AsRef<Path>>(
    original_path: P,
    stem_path: Q,
    stem_label: &str,
    theme: &Theme,
) -> Result<DensityChart, audio::DecodeError> {
    let mut mix = audio::decode(&original_path)?;
    let mut stem = audio::decode(&stem_path)?;

    // One frequency axis requires one sample rate
    if stem.sample_rate != mix.sample_rate {
        log::debug!(
            "Stem rate {} Hz differs from mix rate {} Hz, resampling stem",
            stem.sample_rate,
            mix.sample_rate
        );
        stem.samples = audio::resample(&stem.samples, stem.sample_rate, mix.sample_rate)?;
        stem.sample_rate = mix.sample_rate;
    }

    // Equal lengths give equal bin counts and identical bin spacing
    let min_len = mix.len().min(stem.len());
    mix.samples.truncate(min_len);
    stem.samples.truncate(min_len);

    let (frequencies, original_db, stem_db) = if min_len == 0 {
        (Vec::new(), Vec::new(), Vec::new())
    } else {
        let mut fft = FftEngine::new(min_len);

        let mix_f64: Vec<f64> = mix.samples.iter().map(|&s| s as f64).collect();
        let stem_f64: Vec<f64> = stem.samples.iter().map(|&s| s as f64).collect();

        let original_db = magnitude_to_db(&fft.compute_magnitude(&mix_f64));
        let stem_db = magnitude_to_db(&fft.compute_magnitude(&stem_f64));
        let frequencies = fft.frequency_bins(mix.sample_rate as f64);

        (frequencies, original_db, stem_db)
    };

    log::debug!(
        "Density comparison '{}': {} samples -> {} bins",
        stem_label,
        min_len,
        frequencies.len()
    );

    Ok(DensityChart::new(
        frequencies,
        original_db,
        stem_db,
        stem_label,
        theme,
    ))
}

fn magnitude_to_db(magnitudes: &[f64]) -> Vec<f64> {
    magnitudes
        .iter()
        .map(|&mag| 20.0 * (mag + DB_EPSILON).log10())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    use std::path::PathBuf;

    /// Write a mono 16-bit WAV fixture and return its path
    fn write_wav(name: &str, samples: &[f32], sample_rate: u32) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "stemscope_render_{}_{}.wav",
            name,
            std::process::id()
        ));
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for &s in samples {
            writer.write_sample((s * i16::MAX as f32) as i16).unwrap();
        }
        writer.finalize().unwrap();
        path
    }

    fn sine(freq: f64, len: usize, sample_rate: u32) -> Vec<f32> {
        (0..len)
            .map(|n| (2.0 * PI * freq * n as f64 / sample_rate as f64).sin() as f32 * 0.8)
            .collect()
    }

    #[test]
    fn test_spectrogram_peak_is_zero_db() {
        let path = write_wav("peak", &sine(440.0, 22050, 22050), 22050);
        let chart = mel_spectrogram(&path, "Mix Spectrogram", &Theme::default()).unwrap();

        assert_eq!(chart.db_max(), 0.0);
        assert_eq!(chart.db_range, (-80.0, 0.0));
        assert!(chart.db.iter().all(|&v| v.is_finite() && v <= 0.0));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_spectrogram_dimensions_and_metadata() {
        let path = write_wav("dims", &sine(440.0, 22050, 22050), 22050);
        let chart = mel_spectrogram(&path, "Mix", &Theme::default()).unwrap();

        // 128 bands, 1 + 22050/512 = 44 centered frames
        assert_eq!(chart.shape(), (128, 44));
        assert_eq!(chart.sample_rate, 22050);
        assert_eq!(chart.fmax, 8000.0);
        assert!((chart.duration_secs - 1.0).abs() < 1e-9);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_spectrogram_is_deterministic() {
        let path = write_wav("determinism", &sine(880.0, 11025, 22050), 22050);
        let theme = Theme::default();

        let first = mel_spectrogram(&path, "A", &theme).unwrap();
        let second = mel_spectrogram(&path, "A", &theme).unwrap();
        assert_eq!(first.db, second.db);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_spectrogram_of_silence_is_finite() {
        let path = write_wav("silence", &vec![0.0; 22050], 22050);
        let chart = mel_spectrogram(&path, "Silence", &Theme::default()).unwrap();

        // All-zero power references itself: a flat 0 dB surface, never -inf
        assert!(chart.db.iter().all(|&v| v.is_finite()));
        assert_eq!(chart.db_max(), 0.0);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_spectrogram_of_empty_file() {
        let path = write_wav("empty", &[], 22050);
        let chart = mel_spectrogram(&path, "Empty", &Theme::default()).unwrap();

        assert_eq!(chart.shape(), (128, 1));
        assert!(chart.db.iter().all(|&v| v.is_finite()));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = mel_spectrogram("/nonexistent/mix.mp3", "Mix", &Theme::default());
        assert!(matches!(result, Err(audio::DecodeError::Open { .. })));

        let result = psd_comparison(
            "/nonexistent/mix.mp3",
            "/nonexistent/stem.mp3",
            "Vocals",
            &Theme::default(),
        );
        assert!(matches!(result, Err(audio::DecodeError::Open { .. })));
    }

    #[test]
    fn test_psd_identical_inputs_overlay_exactly() {
        let path = write_wav("overlay", &sine(440.0, 8192, 44100), 44100);
        let chart = psd_comparison(&path, &path, "Vocals", &Theme::default()).unwrap();

        assert_eq!(chart.original_db, chart.stem_db);
        assert_eq!(chart.stem_color, "#3b82f6");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_psd_truncates_to_shorter_input() {
        // 44100 vs 48000 samples at the same rate: analysis runs at 44100,
        // so both spectra get 22051 bins spaced 1 Hz apart
        let long = write_wav("longer", &sine(1000.0, 48000, 44100), 44100);
        let short = write_wav("shorter", &sine(440.0, 44100, 44100), 44100);

        let chart = psd_comparison(&long, &short, "Drums", &Theme::default()).unwrap();

        assert_eq!(chart.num_bins(), 44100 / 2 + 1);
        assert_eq!(chart.original_db.len(), chart.stem_db.len());
        assert_eq!(chart.frequencies[0], 0.0);
        assert!((chart.frequencies[1] - 1.0).abs() < 1e-9);
        assert!((chart.frequencies[22050] - 22050.0).abs() < 1e-6);

        std::fs::remove_file(long).ok();
        std::fs::remove_file(short).ok();
    }

    #[test]
    fn test_psd_resamples_mismatched_rates() {
        let mix = write_wav("mix_44k", &sine(440.0, 44100, 44100), 44100);
        let stem = write_wav("stem_48k", &sine(440.0, 48000, 48000), 48000);

        let chart = psd_comparison(&mix, &stem, "Bass", &Theme::default()).unwrap();

        // The 48 kHz stem lands on the mix's rate: one second on both sides
        assert_eq!(chart.num_bins(), 44100 / 2 + 1);
        assert!(chart.stem_db.iter().all(|v| v.is_finite()));

        std::fs::remove_file(mix).ok();
        std::fs::remove_file(stem).ok();
    }

    #[test]
    fn test_psd_is_deterministic() {
        // Mismatched rates force the resample path; repeated renders must
        // still agree bin for bin
        let mix = write_wav("det_mix", &sine(440.0, 22050, 22050), 22050);
        let stem = write_wav("det_stem", &sine(880.0, 48000, 48000), 48000);
        let theme = Theme::default();

        let first = psd_comparison(&mix, &stem, "Drums", &theme).unwrap();
        let second = psd_comparison(&mix, &stem, "Drums", &theme).unwrap();

        assert_eq!(first.frequencies, second.frequencies);
        assert_eq!(first.original_db, second.original_db);
        assert_eq!(first.stem_db, second.stem_db);

        std::fs::remove_file(mix).ok();
        std::fs::remove_file(stem).ok();
    }

    #[test]
    fn test_psd_of_silence_sits_at_floor() {
        let path = write_wav("flatline", &vec![0.0; 4096], 44100);
        let chart = psd_comparison(&path, &path, "Other", &Theme::default()).unwrap();

        // Every magnitude is zero, so every bin is 20*log10(1e-6) = -120 dB
        assert!(chart
            .original_db
            .iter()
            .all(|&v| (v + 120.0).abs() < 1e-9));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_psd_of_empty_files_yields_empty_traces() {
        let path = write_wav("void", &[], 44100);
        let chart = psd_comparison(&path, &path, "Vocals", &Theme::default()).unwrap();

        assert_eq!(chart.num_bins(), 0);
        assert!(chart.original_db.is_empty());
        assert!(chart.stem_db.is_empty());

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_psd_sine_peaks_at_its_frequency() {
        let path = write_wav("tone", &sine(1000.0, 44100, 44100), 44100);
        let chart = psd_comparison(&path, &path, "Vocals", &Theme::default()).unwrap();

        let peak_bin = chart
            .stem_db
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .map(|(bin, _)| bin)
            .unwrap();

        // One second at 44.1 kHz gives 1 Hz bins: the peak sits at bin 1000
        assert!((peak_bin as i64 - 1000).abs() <= 1, "peak at bin {}", peak_bin);

        std::fs::remove_file(path).ok();
    }
}

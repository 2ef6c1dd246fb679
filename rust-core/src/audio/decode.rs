//! Audio file decoding via symphonia
//!
//! Turns encoded demo audio (mp3, flac, wav, ogg, ...) into mono sample
//! buffers at the file's native rate. Multi-channel sources are downmixed by
//! averaging each frame.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::probe::Hint;
use thiserror::Error;

/// Errors from decoding or resampling audio files
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to open audio file {path}: {reason}")]
    Open { path: String, reason: String },

    #[error("Unsupported or corrupt audio container {path}: {reason}")]
    Probe { path: String, reason: String },

    #[error("No default audio track in {path}")]
    NoTrack { path: String },

    #[error("Missing sample rate metadata in {path}")]
    NoSampleRate { path: String },

    #[error("Failed to create decoder for {path}: {reason}")]
    Codec { path: String, reason: String },

    #[error("Failed to decode packet in {path}: {reason}")]
    Packet { path: String, reason: String },

    #[error("Resampling from {from} Hz to {to} Hz failed: {reason}")]
    Resample { from: u32, to: u32, reason: String },
}

/// Decoded mono audio signal
#[derive(Debug, Clone)]
pub struct AudioSignal {
    /// Mono samples, nominally in [-1, 1]
    pub samples: Vec<f32>,

    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl AudioSignal {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the signal holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Decode an audio file to a mono signal at its native sample rate
///
/// The container format is probed from content with the file extension as a
/// hint. A file with zero decodable frames yields an empty signal, not an
/// error.
///
/// # Arguments
/// * `path` - Path to the audio file
pub fn decode<P: AsRef<Path>>(path: P) -> Result<AudioSignal, DecodeError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let file = File::open(path).map_err(|e| DecodeError::Open {
        path: display.clone(),
        reason: e.to_string(),
    })?;
    let stream = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(extension) = path.extension().and_then(|ext| ext.to_str()) {
        hint.with_extension(extension);
    }

    let probed = symphonia::default::get_probe()
        .format(&hint, stream, &FormatOptions::default(), &Default::default())
        .map_err(|e| DecodeError::Probe {
            path: display.clone(),
            reason: e.to_string(),
        })?;
    let mut format = probed.format;

    let track = format.default_track().ok_or(DecodeError::NoTrack {
        path: display.clone(),
    })?;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or(DecodeError::NoSampleRate {
            path: display.clone(),
        })?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| DecodeError::Codec {
            path: display.clone(),
            reason: e.to_string(),
        })?;

    let mut samples = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            // End of stream surfaces as an unexpected-EOF I/O error
            Err(SymphoniaError::IoError(e)) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(e) => {
                return Err(DecodeError::Packet {
                    path: display,
                    reason: e.to_string(),
                })
            }
        };

        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            Err(e) => {
                return Err(DecodeError::Packet {
                    path: display,
                    reason: e.to_string(),
                })
            }
        };

        let spec = *decoded.spec();
        let channels = spec.channels.count();
        if channels == 0 {
            continue;
        }

        let mut sample_buffer = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
        sample_buffer.copy_interleaved_ref(decoded);

        // Downmix interleaved frames to mono by averaging channels
        let interleaved = sample_buffer.samples();
        samples.reserve(interleaved.len() / channels);
        for frame in interleaved.chunks_exact(channels) {
            let sum: f32 = frame.iter().sum();
            samples.push(sum / channels as f32);
        }
    }

    log::debug!(
        "Decoded {}: {} mono samples at {} Hz",
        display,
        samples.len(),
        sample_rate
    );

    Ok(AudioSignal {
        samples,
        sample_rate,
    })
}

/// Decode an audio file and resample it to a fixed rate
///
/// Files already at `target_rate` are returned untouched.
pub fn decode_at<P: AsRef<Path>>(path: P, target_rate: u32) -> Result<AudioSignal, DecodeError> {
    let signal = decode(path)?;
    if signal.sample_rate == target_rate {
        return Ok(signal);
    }

    let samples = super::resample::resample(&signal.samples, signal.sample_rate, target_rate)?;
    Ok(AudioSignal {
        samples,
        sample_rate: target_rate,
    })
}

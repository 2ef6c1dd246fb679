//! Audio file decoding and resampling with symphonia and rubato

pub mod decode;
pub mod resample;

pub use decode::{decode, decode_at, AudioSignal, DecodeError};
pub use resample::resample;

// lib.rs - Raw float PCM to AAC-LC converter
//! Converts headerless little-endian f32 interleaved PCM into an AAC-LC
//! bitstream using the FDK-AAC encoder.
//!
//! The whole input is read into memory, fed to the encoder in fixed-size
//! windows, and the encoder is drained at end of stream. Every step reports
//! failure through [`ConvertError`].

pub mod config;
pub mod error;
pub mod backend;
pub mod fdk;
pub mod pcm;
pub mod session;
pub mod converter;
pub mod utils;


// Re-export main public API
pub use config::{AlignmentPolicy, ConverterConfig, Profile, Transport};
pub use error::{ConvertError, ErrorKind, Result};
pub use backend::{BackendError, EncodeInfo, EncoderBackend, EncoderParam};
pub use fdk::FdkEncoder;
pub use pcm::PcmBuffer;
pub use session::{EncoderSession, SessionStats};
pub use converter::{convert_file, convert_with, encode_stream, ConversionReport};
pub use utils::{generate_stereo_signal, generate_test_signal, audio_utils};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const LIBRARY_NAME: &str = "pcm2aac";

/// Default input path used by the binary
pub const DEFAULT_INPUT: &str = "input.pcm";
/// Default output path used by the binary
pub const DEFAULT_OUTPUT: &str = "output.aac";

/// Get library version and build information
pub fn version_info() -> String {
    format!("{} v{}", LIBRARY_NAME, VERSION)
}

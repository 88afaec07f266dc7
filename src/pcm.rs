// pcm.rs - Raw float PCM file reader
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};

use crate::config::{AlignmentPolicy, ConverterConfig};
use crate::error::{ConvertError, Result};
use crate::utils::audio_utils::decode_f32_le;

/// Interleaved f32 samples loaded in full from disk
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PcmBuffer {
    samples: Vec<f32>,
    channels: u8,
}

impl PcmBuffer {
    pub fn new(samples: Vec<f32>, channels: u8) -> Self {
        Self { samples, channels }
    }

    /// Read a whole headerless little-endian f32 file.
    pub fn read_file(path: &Path, config: &ConverterConfig) -> Result<Self> {
        let mut file = File::open(path).map_err(|source| ConvertError::InputOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|source| ConvertError::InputRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        Self::from_le_bytes(bytes, config)
    }

    /// Decode raw bytes, applying the configured policy to a trailing partial frame.
    pub fn from_le_bytes(mut bytes: Vec<u8>, config: &ConverterConfig) -> Result<Self> {
        let unit = config.frame_bytes();
        let excess = bytes.len() % unit;
        if excess != 0 {
            match config.alignment {
                AlignmentPolicy::Reject => {
                    return Err(ConvertError::MisalignedInput { len: bytes.len(), unit });
                }
                AlignmentPolicy::Truncate => {
                    warn!("Dropping {} trailing bytes of partial PCM frame", excess);
                    bytes.truncate(bytes.len() - excess);
                }
                AlignmentPolicy::Pad => {
                    warn!("Zero-padding partial PCM frame with {} bytes", unit - excess);
                    bytes.resize(bytes.len() + unit - excess, 0);
                }
            }
        }

        Ok(Self::new(decode_f32_le(&bytes), config.channels))
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Samples per channel.
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            return 0;
        }
        self.samples.len() / self.channels as usize
    }

    pub fn duration_secs(&self, sample_rate: u32) -> f32 {
        self.frames() as f32 / sample_rate as f32
    }
}

// config.rs - Converter configuration
use crate::error::{ConvertError, Result};

/// Largest AAC frame per channel: 6144 bits.
pub const MAX_FRAME_BYTES_PER_CHANNEL: usize = 768;

/// Default feed window, 512 f32 samples.
pub const DEFAULT_WINDOW_BYTES: usize = 2048;

const SUPPORTED_SAMPLE_RATES: [u32; 12] = [
    96000, 88200, 64000, 48000, 44100, 32000, 24000, 22050, 16000, 12000, 11025, 8000,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    AacLc,
}

impl Profile {
    /// MPEG-4 audio object type.
    pub fn audio_object_type(self) -> u32 {
        match self {
            Profile::AacLc => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Raw access units, no framing.
    Raw,
    /// ADTS headers in front of every frame.
    Adts,
}

/// What to do with trailing bytes that do not form a whole interleaved frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentPolicy {
    Reject,
    Truncate,
    Pad,
}

/// Converter configuration with validation
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    pub sample_rate: u32,
    pub channels: u8,
    pub bitrate: u32,
    pub profile: Profile,
    pub transport: Transport,
    pub window_bytes: usize, // input window and output buffer size
    pub alignment: AlignmentPolicy,
}

impl ConverterConfig {
    pub fn new(sample_rate: u32, channels: u8, bitrate: u32) -> Result<Self> {
        let config = Self {
            sample_rate,
            channels,
            bitrate,
            profile: Profile::AacLc,
            transport: Transport::Raw,
            window_bytes: DEFAULT_WINDOW_BYTES,
            alignment: AlignmentPolicy::Reject,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_alignment(mut self, alignment: AlignmentPolicy) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_window_bytes(mut self, window_bytes: usize) -> Result<Self> {
        self.window_bytes = window_bytes;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if !SUPPORTED_SAMPLE_RATES.contains(&self.sample_rate) {
            return Err(ConvertError::InvalidConfig(
                format!("Unsupported sample rate: {}", self.sample_rate)
            ));
        }
        if self.channels == 0 || self.channels > 2 {
            return Err(ConvertError::InvalidConfig("Invalid channel count".to_string()));
        }
        if self.bitrate < 8000 || self.bitrate > 320000 {
            return Err(ConvertError::InvalidConfig("Invalid bitrate".to_string()));
        }
        if self.window_bytes == 0 || self.window_bytes % self.frame_bytes() != 0 {
            return Err(ConvertError::InvalidConfig(format!(
                "Window size {} is not a multiple of the {}-byte interleaved frame",
                self.window_bytes,
                self.frame_bytes()
            )));
        }
        if self.window_bytes < MAX_FRAME_BYTES_PER_CHANNEL * self.channels as usize {
            return Err(ConvertError::InvalidConfig(format!(
                "Window size {} cannot hold one AAC frame for {} channels",
                self.window_bytes, self.channels
            )));
        }
        Ok(())
    }

    /// Bytes in one interleaved sample frame (one f32 per channel).
    pub fn frame_bytes(&self) -> usize {
        std::mem::size_of::<f32>() * self.channels as usize
    }

    /// Samples submitted to the encoder per main-loop call.
    pub fn window_samples(&self) -> usize {
        self.window_bytes / std::mem::size_of::<f32>()
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            channels: 2,
            bitrate: 128000,
            profile: Profile::AacLc,
            transport: Transport::Raw,
            window_bytes: DEFAULT_WINDOW_BYTES,
            alignment: AlignmentPolicy::Reject,
        }
    }
}

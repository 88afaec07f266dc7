// session.rs - Configured encoder session
use log::{debug, info};

use crate::backend::{BackendError, EncodeInfo, EncoderBackend, EncoderParam};
use crate::config::{ConverterConfig, Transport};
use crate::error::{ConvertError, Result};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub encode_calls: u64,
    pub flush_calls: u64,
    pub samples_consumed: u64,
    pub bytes_produced: u64,
}

/// An encoder backend that has been fully configured and primed.
///
/// Only [`EncoderSession::open`] builds one, so every encode or flush call on
/// a session happens after the complete parameter sequence. The backend
/// handle is released when the session is dropped.
pub struct EncoderSession<B: EncoderBackend> {
    backend: B,
    stats: SessionStats,
}

impl<B: EncoderBackend> EncoderSession<B> {
    /// Apply the configuration in fixed order, then prime the encoder.
    pub fn open(mut backend: B, config: &ConverterConfig) -> Result<Self> {
        config.validate()?;

        for param in Self::parameters(config) {
            debug!("Setting encoder parameter {:?}", param);
            backend
                .set_param(param)
                .map_err(|source| ConvertError::Configure { param, source })?;
        }

        backend.prime().map_err(ConvertError::Prime)?;
        info!(
            "AAC encoder ready: {} Hz, {} channels, {} bps",
            config.sample_rate, config.channels, config.bitrate
        );

        Ok(Self {
            backend,
            stats: SessionStats::default(),
        })
    }

    /// The setter sequence for `config`, in the order it is applied.
    pub fn parameters(config: &ConverterConfig) -> [EncoderParam; 5] {
        let transport = match config.transport {
            Transport::Raw => 0,
            Transport::Adts => 2,
        };
        [
            EncoderParam::AudioObjectType(config.profile.audio_object_type()),
            EncoderParam::SampleRate(config.sample_rate),
            // Channel mode N = N front channels for mono and stereo
            EncoderParam::ChannelMode(config.channels as u32),
            EncoderParam::Bitrate(config.bitrate),
            EncoderParam::Transport(transport),
        ]
    }

    pub fn encode(&mut self, input: &[f32], output: &mut [u8]) -> std::result::Result<EncodeInfo, BackendError> {
        let info = self.backend.encode(input, output)?;
        self.stats.encode_calls += 1;
        self.stats.samples_consumed += info.input_consumed as u64;
        self.stats.bytes_produced += info.output_size as u64;
        Ok(info)
    }

    pub fn flush(&mut self, output: &mut [u8]) -> std::result::Result<usize, BackendError> {
        let produced = self.backend.flush(output)?;
        self.stats.flush_calls += 1;
        self.stats.bytes_produced += produced as u64;
        Ok(produced)
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Release the session, returning the backend (mainly for inspection in tests).
    pub fn into_backend(self) -> B {
        self.backend
    }
}

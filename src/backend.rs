// backend.rs - Interface to the external AAC encoder library
use std::fmt;

/// Error code returned by the encoder library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendError(pub u32);

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "encoder error code {:#06x}", self.0)
    }
}

impl std::error::Error for BackendError {}

/// One encoder parameter setter call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderParam {
    AudioObjectType(u32),
    SampleRate(u32),
    ChannelMode(u32),
    Bitrate(u32),
    Transport(u32),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeInfo {
    /// Samples taken from the input slice.
    pub input_consumed: usize,
    /// Bytes written to the front of the output buffer.
    pub output_size: usize,
}

/// An open encoder handle.
///
/// Implementations release the underlying handle when dropped. Callers must
/// issue every `set_param` before `prime`, and `prime` before `encode` or `flush`.
pub trait EncoderBackend {
    fn set_param(&mut self, param: EncoderParam) -> Result<(), BackendError>;

    /// Initialisation call with no buffers, applying the parameters set so far.
    fn prime(&mut self) -> Result<(), BackendError>;

    fn encode(&mut self, input: &[f32], output: &mut [u8]) -> Result<EncodeInfo, BackendError>;

    /// End-of-stream call with no input. `Ok(0)` means nothing is buffered anymore.
    fn flush(&mut self, output: &mut [u8]) -> Result<usize, BackendError>;
}

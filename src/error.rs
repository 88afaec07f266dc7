// error.rs - Error handling types
use std::path::PathBuf;
use thiserror::Error;

use crate::backend::{BackendError, EncoderParam};

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Failed to open PCM file {}: {source}", path.display())]
    InputOpen { path: PathBuf, source: std::io::Error },
    #[error("Failed to read PCM file {}: {source}", path.display())]
    InputRead { path: PathBuf, source: std::io::Error },
    #[error("PCM input is {len} bytes, not a multiple of {unit}")]
    MisalignedInput { len: usize, unit: usize },
    #[error("Failed to open AAC encoder: {0}")]
    SessionCreate(BackendError),
    #[error("Failed to set AAC encoder parameter {param:?}: {source}")]
    Configure { param: EncoderParam, source: BackendError },
    #[error("Failed to initialize AAC encoder: {0}")]
    Prime(BackendError),
    #[error("Failed to open AAC file {}: {source}", path.display())]
    OutputOpen { path: PathBuf, source: std::io::Error },
    #[error("Failed to write AAC data: {0}")]
    OutputWrite(#[from] std::io::Error),
    #[error("Failed to encode PCM window {window} ({bytes_written} bytes written): {source}")]
    Encode { window: usize, bytes_written: u64, source: BackendError },
    #[error("Failed to flush remaining AAC data ({bytes_written} bytes written): {source}")]
    Flush { bytes_written: u64, source: BackendError },
    #[error("Encoder accepted no input at sample offset {offset}")]
    Stalled { offset: usize },
}

/// Flat discriminant of [`ConvertError`], for callers that only branch on the step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidConfig,
    InputOpen,
    InputRead,
    MisalignedInput,
    SessionCreate,
    Configure,
    Prime,
    OutputOpen,
    OutputWrite,
    Encode,
    Flush,
    Stalled,
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::InvalidConfig(_) => ErrorKind::InvalidConfig,
            ConvertError::InputOpen { .. } => ErrorKind::InputOpen,
            ConvertError::InputRead { .. } => ErrorKind::InputRead,
            ConvertError::MisalignedInput { .. } => ErrorKind::MisalignedInput,
            ConvertError::SessionCreate(_) => ErrorKind::SessionCreate,
            ConvertError::Configure { .. } => ErrorKind::Configure,
            ConvertError::Prime(_) => ErrorKind::Prime,
            ConvertError::OutputOpen { .. } => ErrorKind::OutputOpen,
            ConvertError::OutputWrite(_) => ErrorKind::OutputWrite,
            ConvertError::Encode { .. } => ErrorKind::Encode,
            ConvertError::Flush { .. } => ErrorKind::Flush,
            ConvertError::Stalled { .. } => ErrorKind::Stalled,
        }
    }

    /// Bytes already appended to the output when the run stopped.
    pub fn bytes_written(&self) -> Option<u64> {
        match self {
            ConvertError::Encode { bytes_written, .. } | ConvertError::Flush { bytes_written, .. } => {
                Some(*bytes_written)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

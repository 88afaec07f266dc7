// converter.rs - PCM to AAC conversion routine
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use log::{debug, error, info};

use crate::backend::{BackendError, EncoderBackend};
use crate::config::ConverterConfig;
use crate::error::{ConvertError, Result};
use crate::fdk::FdkEncoder;
use crate::pcm::PcmBuffer;
use crate::session::EncoderSession;

/// Outcome of a successful conversion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionReport {
    pub bytes_written: u64,
    pub samples_read: usize,
    pub encode_calls: u64,
    pub flush_calls: u64,
    pub elapsed: Duration,
}

impl ConversionReport {
    /// Achieved bitrate in kbps over the input duration.
    pub fn bitrate_kbps(&self, config: &ConverterConfig) -> f32 {
        let frames = self.samples_read / config.channels.max(1) as usize;
        if frames == 0 {
            return 0.0;
        }
        let seconds = frames as f32 / config.sample_rate as f32;
        (self.bytes_written as f32 * 8.0) / seconds / 1000.0
    }
}

/// Convert `input` to `output` with the FDK-AAC encoder.
pub fn convert_file(input: &Path, output: &Path, config: &ConverterConfig) -> Result<ConversionReport> {
    convert_with(input, output, config, FdkEncoder::open)
}

/// Convert `input` to `output`, opening the encoder through `open_backend`.
///
/// The backend is opened only after the input has been read, and the output
/// file is created only after the encoder is configured and primed. On an
/// encode or flush failure the bytes already written stay in the output file.
pub fn convert_with<B, F>(
    input: &Path,
    output: &Path,
    config: &ConverterConfig,
    open_backend: F,
) -> Result<ConversionReport>
where
    B: EncoderBackend,
    F: FnOnce(u8) -> std::result::Result<B, BackendError>,
{
    let result = run(input, output, config, open_backend);
    match &result {
        Ok(report) => info!(
            "PCM successfully encoded to AAC. Bytes written: {} ({:.1} kbps, {:.2?})",
            report.bytes_written,
            report.bitrate_kbps(config),
            report.elapsed
        ),
        Err(e) => error!("{}", e),
    }
    result
}

fn run<B, F>(input: &Path, output: &Path, config: &ConverterConfig, open_backend: F) -> Result<ConversionReport>
where
    B: EncoderBackend,
    F: FnOnce(u8) -> std::result::Result<B, BackendError>,
{
    let start_time = Instant::now();
    config.validate()?;

    let pcm = PcmBuffer::read_file(input, config)?;
    info!(
        "Loaded {} samples ({:.2}s) from {}",
        pcm.len(),
        pcm.duration_secs(config.sample_rate),
        input.display()
    );

    let backend = open_backend(config.channels).map_err(ConvertError::SessionCreate)?;
    let mut session = EncoderSession::open(backend, config)?;

    let file = File::create(output).map_err(|source| ConvertError::OutputOpen {
        path: output.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let bytes_written = encode_stream(&mut session, pcm.samples(), config, &mut writer)?;
    writer.flush()?;

    let stats = session.stats();
    Ok(ConversionReport {
        bytes_written,
        samples_read: pcm.len(),
        encode_calls: stats.encode_calls,
        flush_calls: stats.flush_calls,
        elapsed: start_time.elapsed(),
    })
}

/// Feed `samples` through `session` window by window, then drain it.
///
/// Returns the number of bytes appended to `writer`.
pub fn encode_stream<B, W>(
    session: &mut EncoderSession<B>,
    samples: &[f32],
    config: &ConverterConfig,
    writer: &mut W,
) -> Result<u64>
where
    B: EncoderBackend,
    W: Write,
{
    let window_samples = config.window_samples();
    let mut buffer = vec![0u8; config.window_bytes];
    let mut bytes_written = 0u64;
    let mut offset = 0;
    let mut window = 0;

    while offset < samples.len() {
        let end = (offset + window_samples).min(samples.len());
        let info = session
            .encode(&samples[offset..end], &mut buffer)
            .map_err(|source| ConvertError::Encode {
                window,
                bytes_written,
                source,
            })?;

        if info.input_consumed == 0 && info.output_size == 0 {
            return Err(ConvertError::Stalled { offset });
        }

        writer.write_all(&buffer[..info.output_size])?;
        bytes_written += info.output_size as u64;
        debug!(
            "Window {}: consumed {} samples, wrote {} bytes",
            window, info.input_consumed, info.output_size
        );

        offset += info.input_consumed.min(end - offset);
        window += 1;
    }

    loop {
        let produced = session
            .flush(&mut buffer)
            .map_err(|source| ConvertError::Flush { bytes_written, source })?;
        if produced == 0 {
            break;
        }
        writer.write_all(&buffer[..produced])?;
        bytes_written += produced as u64;
        debug!("Flushed {} bytes", produced);
    }

    Ok(bytes_written)
}

// utils.rs - Utility functions and sample format conversion
use std::f32::consts::PI;

/// Generate a test sine wave signal
pub fn generate_test_signal(frequency: f32, sample_rate: u32, samples: usize) -> Vec<f32> {
    let mut signal = Vec::with_capacity(samples);
    for i in 0..samples {
        let t = i as f32 / sample_rate as f32;
        signal.push((2.0 * PI * frequency * t).sin() * 0.5);
    }
    signal
}

/// Generate an interleaved stereo test signal, one tone per channel
pub fn generate_stereo_signal(left_hz: f32, right_hz: f32, sample_rate: u32, frames: usize) -> Vec<f32> {
    let planar = vec![
        generate_test_signal(left_hz, sample_rate, frames),
        generate_test_signal(right_hz, sample_rate, frames),
    ];
    audio_utils::planar_to_interleaved(&planar)
}

/// Sample format conversion utilities
pub mod audio_utils {
    /// Convert planar f32 samples to interleaved format
    pub fn planar_to_interleaved(input: &[Vec<f32>]) -> Vec<f32> {
        if input.is_empty() {
            return Vec::new();
        }

        let channels = input.len();
        let samples_per_channel = input[0].len();
        let mut output = Vec::with_capacity(channels * samples_per_channel);

        for i in 0..samples_per_channel {
            for channel in input {
                output.push(channel.get(i).copied().unwrap_or(0.0)); // Pad with silence if channel is shorter
            }
        }

        output
    }

    /// Convert f32 normalized samples to i16 PCM, clamping out-of-range input
    pub fn f32_to_i16_into(input: &[f32], output: &mut Vec<i16>) {
        output.clear();
        output.extend(input.iter().map(|&x| (x.clamp(-1.0, 1.0) * 32767.0) as i16));
    }

    /// Convert f32 normalized samples to i16 PCM
    pub fn f32_to_i16(input: &[f32]) -> Vec<i16> {
        let mut output = Vec::with_capacity(input.len());
        f32_to_i16_into(input, &mut output);
        output
    }

    /// Decode little-endian f32 samples. Trailing bytes short of a full sample are ignored.
    pub fn decode_f32_le(bytes: &[u8]) -> Vec<f32> {
        bytes
            .chunks_exact(4)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect()
    }

    /// Encode f32 samples as little-endian bytes
    pub fn encode_f32_le(samples: &[f32]) -> Vec<u8> {
        samples.iter().flat_map(|s| s.to_le_bytes()).collect()
    }
}

// main.rs - Convert input.pcm to output.aac with the default settings
use std::path::Path;

use log::info;
use pcm2aac::{convert_file, version_info, ConverterConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("{}", version_info());

    let config = ConverterConfig::default();

    // Failures are already logged by the converter; the exit status stays zero.
    let _ = convert_file(Path::new(DEFAULT_INPUT), Path::new(DEFAULT_OUTPUT), &config);
}

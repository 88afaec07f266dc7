// fdk.rs - FDK-AAC encoder backend
use std::mem;
use std::os::raw::{c_int, c_uint, c_void};
use std::ptr;

use fdk_aac_sys as sys;
use log::debug;

use crate::backend::{BackendError, EncodeInfo, EncoderBackend, EncoderParam};
use crate::utils::audio_utils::f32_to_i16_into;

fn check(code: sys::AACENC_ERROR) -> Result<(), BackendError> {
    if code == sys::AACENC_ERROR_AACENC_OK {
        Ok(())
    } else {
        Err(BackendError(code as u32))
    }
}

/// Owned `HANDLE_AACENCODER`, closed on drop.
pub struct FdkEncoder {
    handle: sys::HANDLE_AACENCODER,
    // FDK takes 16-bit PCM
    scratch: Vec<i16>,
}

impl FdkEncoder {
    pub fn open(max_channels: u8) -> Result<Self, BackendError> {
        let mut handle: sys::HANDLE_AACENCODER = ptr::null_mut();
        // 0 = allocate all encoder modules
        check(unsafe { sys::aacEncOpen(&mut handle as *mut _, 0, max_channels as c_uint) })?;
        debug!("Opened FDK-AAC encoder for {} channels", max_channels);
        Ok(Self {
            handle,
            scratch: Vec::new(),
        })
    }

    fn call_encode(
        &mut self,
        samples: Option<&mut [i16]>,
        output: &mut [u8],
    ) -> Result<EncodeInfo, BackendError> {
        let mut in_ident: c_int = sys::AACENC_BufferIdentifier_IN_AUDIO_DATA as c_int;
        let mut in_el_size: c_int = mem::size_of::<i16>() as c_int;
        let (mut in_ptr, mut in_size, num_in_samples) = match samples {
            Some(samples) => {
                let len = samples.len().min(c_int::MAX as usize) as c_int;
                (samples.as_mut_ptr() as *mut c_void, len * in_el_size, len)
            }
            // numInSamples = -1 signals end of stream
            None => (ptr::null_mut(), 0, -1),
        };
        let in_desc = sys::AACENC_BufDesc {
            numBufs: if num_in_samples < 0 { 0 } else { 1 },
            bufs: &mut in_ptr as *mut *mut c_void,
            bufferIdentifiers: &mut in_ident as *mut c_int,
            bufSizes: &mut in_size as *mut c_int,
            bufElSizes: &mut in_el_size as *mut c_int,
        };

        let mut out_ptr = output.as_mut_ptr() as *mut c_void;
        let mut out_ident: c_int = sys::AACENC_BufferIdentifier_OUT_BITSTREAM_DATA as c_int;
        let mut out_size: c_int = output.len().min(c_int::MAX as usize) as c_int;
        let mut out_el_size: c_int = 1;
        let out_desc = sys::AACENC_BufDesc {
            numBufs: 1,
            bufs: &mut out_ptr as *mut *mut c_void,
            bufferIdentifiers: &mut out_ident as *mut c_int,
            bufSizes: &mut out_size as *mut c_int,
            bufElSizes: &mut out_el_size as *mut c_int,
        };

        let in_args = sys::AACENC_InArgs {
            numInSamples: num_in_samples,
            numAncBytes: 0,
        };
        let mut out_args: sys::AACENC_OutArgs = unsafe { mem::zeroed() };

        let code = unsafe {
            sys::aacEncEncode(self.handle, &in_desc, &out_desc, &in_args, &mut out_args)
        };
        if num_in_samples < 0 && code == sys::AACENC_ERROR_AACENC_ENCODE_EOF {
            return Ok(EncodeInfo::default());
        }
        check(code)?;

        Ok(EncodeInfo {
            input_consumed: out_args.numInSamples.max(0) as usize,
            output_size: out_args.numOutBytes.max(0) as usize,
        })
    }
}

impl EncoderBackend for FdkEncoder {
    fn set_param(&mut self, param: EncoderParam) -> Result<(), BackendError> {
        let (id, value) = match param {
            EncoderParam::AudioObjectType(v) => (sys::AACENC_PARAM_AACENC_AOT, v),
            EncoderParam::SampleRate(v) => (sys::AACENC_PARAM_AACENC_SAMPLERATE, v),
            EncoderParam::ChannelMode(v) => (sys::AACENC_PARAM_AACENC_CHANNELMODE, v),
            EncoderParam::Bitrate(v) => (sys::AACENC_PARAM_AACENC_BITRATE, v),
            EncoderParam::Transport(v) => (sys::AACENC_PARAM_AACENC_TRANSMUX, v),
        };
        check(unsafe { sys::aacEncoder_SetParam(self.handle, id, value as c_uint) })
    }

    fn prime(&mut self) -> Result<(), BackendError> {
        check(unsafe {
            sys::aacEncEncode(self.handle, ptr::null(), ptr::null(), ptr::null(), ptr::null_mut())
        })
    }

    fn encode(&mut self, input: &[f32], output: &mut [u8]) -> Result<EncodeInfo, BackendError> {
        let mut scratch = mem::take(&mut self.scratch);
        f32_to_i16_into(input, &mut scratch);
        let result = self.call_encode(Some(scratch.as_mut_slice()), output);
        self.scratch = scratch;
        result
    }

    fn flush(&mut self, output: &mut [u8]) -> Result<usize, BackendError> {
        self.call_encode(None, output).map(|info| info.output_size)
    }
}

impl Drop for FdkEncoder {
    fn drop(&mut self) {
        unsafe {
            sys::aacEncClose(&mut self.handle as *mut _);
        }
        debug!("Closed FDK-AAC encoder");
    }
}

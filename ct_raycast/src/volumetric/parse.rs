//! Decoding of raw 16-bit sample data

use nom::{
    multi::count,
    number::complete::{be_i16, le_i16},
    IResult,
};

use crate::error::{Result, VolumeError};

use super::{Endianness, VolumeMetadata};

/// Decode all samples described by `meta` from `slice`.
/// `slice` starts at the first sample (offset already applied).
/// Trailing bytes are ignored.
pub fn decode_samples(slice: &[u8], meta: &VolumeMetadata) -> Result<Vec<i16>> {
    let expected = meta.data_len();
    if slice.len() < expected {
        return Err(VolumeError::SizeMismatch {
            expected,
            actual: slice.len(),
        });
    }

    let n = expected / 2;
    let parse_res: IResult<&[u8], Vec<i16>> = match meta.endianness {
        Endianness::Big => count(be_i16, n)(slice),
        Endianness::Little => count(le_i16, n)(slice),
    };

    match parse_res {
        Ok((_rest, samples)) => Ok(samples),
        Err(e) => Err(VolumeError::Parse(e.to_string())),
    }
}

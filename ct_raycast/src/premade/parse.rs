use nalgebra::{vector, Vector3};

use crate::{
    error::{Result, VolumeError},
    volumetric::{Endianness, VolumeMetadata},
};

/// Dimensions of the classic `CThead` dataset
pub const CT_HEAD_SIZE: Vector3<usize> = vector![256, 256, 113];

/// Parser for headerless grids of known size and byte order.
/// Checks that the data holds at least `size` samples.
pub fn raw_parser(
    size: Vector3<usize>,
    endianness: Endianness,
) -> impl FnOnce(&[u8]) -> Result<VolumeMetadata> {
    move |slice| {
        let meta = VolumeMetadata {
            size,
            endianness,
            data_offset: 0,
        };

        let expected = meta.data_len();
        if slice.len() < expected {
            return Err(VolumeError::SizeMismatch {
                expected,
                actual: slice.len(),
            });
        }

        Ok(meta)
    }
}

// Little endian 2 byte values
// 256x256x113, values <-1117;2248>
pub fn ct_head_parser(slice: &[u8]) -> Result<VolumeMetadata> {
    raw_parser(CT_HEAD_SIZE, Endianness::Little)(slice)
}

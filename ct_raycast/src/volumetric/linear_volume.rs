use log::info;
use nalgebra::Vector3;

use crate::{
    common::ValueRange,
    error::{Result, VolumeError},
};

use super::{parse::decode_samples, BuildVolume, DataSource, Volume, VolumeMetadata};

/// Volume stored as one continuous vector.
/// `x` grows fastest, then `y`, then `z` (same as the order of raw CT files).
pub struct LinearVolume {
    size: Vector3<usize>,
    data: Vec<i16>,
    min: i16,
    max: i16,
}

impl std::fmt::Debug for LinearVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Volume")
            .field("size", &self.size)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("data len ", &self.data.len())
            .finish()
    }
}

impl LinearVolume {
    /// Build volume from samples in linear order.
    /// Computes extremes of the data.
    pub fn from_samples(size: Vector3<usize>, data: Vec<i16>) -> Result<LinearVolume> {
        if size.iter().any(|&d| d == 0) {
            return Err(VolumeError::EmptyDimensions(size));
        }

        let elements = size.x * size.y * size.z;
        if data.len() != elements {
            return Err(VolumeError::SizeMismatch {
                expected: elements * 2,
                actual: data.len() * 2,
            });
        }

        let range = ValueRange::from_samples(data.iter().copied())
            .ok_or(VolumeError::EmptyDimensions(size))?;
        let (min, max) = (range.low as i16, range.high as i16);

        info!(
            "New linear volume, size {:?}, samples <{min};{max}>",
            size.as_slice()
        );

        Ok(LinearVolume {
            size,
            data,
            min,
            max,
        })
    }

    fn get_3d_index(&self, x: usize, y: usize, z: usize) -> usize {
        x + self.size.x * (y + self.size.y * z)
    }
}

impl Volume for LinearVolume {
    fn get_size(&self) -> Vector3<usize> {
        self.size
    }

    fn get_data(&self, x: usize, y: usize, z: usize) -> Option<i16> {
        if !self.is_in(x, y, z) {
            return None;
        }
        self.data.get(self.get_3d_index(x, y, z)).copied()
    }

    fn min(&self) -> i16 {
        self.min
    }

    fn max(&self) -> i16 {
        self.max
    }
}

impl BuildVolume<VolumeMetadata> for LinearVolume {
    fn build(metadata: VolumeMetadata, data: DataSource) -> Result<LinearVolume> {
        let slice = data.get_slice();
        let slice = slice.get(metadata.data_offset..).ok_or_else(|| {
            VolumeError::Parse(format!(
                "data offset {} past end of data ({} bytes)",
                metadata.data_offset,
                slice.len()
            ))
        })?;

        let samples = decode_samples(slice, &metadata)?;
        LinearVolume::from_samples(metadata.size, samples)
    }
}

#[cfg(test)]
mod test {
    use nalgebra::vector;

    use super::*;
    use crate::volumetric::Endianness;

    #[test]
    fn linear_order() {
        let data = (0..24).collect();
        let vol = LinearVolume::from_samples(vector![2, 3, 4], data).unwrap();

        assert_eq!(vol.sample(0, 0, 0), 0);
        assert_eq!(vol.sample(1, 0, 0), 1);
        assert_eq!(vol.sample(0, 1, 0), 2);
        assert_eq!(vol.sample(0, 0, 1), 6);
        assert_eq!(vol.sample(1, 2, 3), 23);
    }

    #[test]
    fn extremes_cached() {
        let data = vec![5, -1117, 2248, 0, 7, 7, 7, 7];
        let vol = LinearVolume::from_samples(vector![2, 2, 2], data).unwrap();

        assert_eq!(vol.min(), -1117);
        assert_eq!(vol.max(), 2248);
        assert_eq!(vol.get_range().low, -1117.0);
    }

    #[test]
    fn out_of_range_is_none() {
        let vol = LinearVolume::from_samples(vector![2, 2, 2], vec![0; 8]).unwrap();

        assert_eq!(vol.get_data(2, 0, 0), None);
        assert_eq!(vol.get_data(0, 2, 0), None);
        assert_eq!(vol.get_data(0, 0, 2), None);
        assert_eq!(vol.get_data(1, 1, 1), Some(0));
    }

    #[test]
    #[should_panic]
    fn out_of_range_sample_panics() {
        let vol = LinearVolume::from_samples(vector![2, 2, 2], vec![0; 8]).unwrap();
        // x wraps into the next row if not checked per axis
        vol.sample(2, 0, 0);
    }

    #[test]
    fn bad_dimensions() {
        let res = LinearVolume::from_samples(vector![2, 0, 2], vec![]);
        assert!(matches!(res, Err(VolumeError::EmptyDimensions(_))));

        let res = LinearVolume::from_samples(vector![2, 2, 2], vec![0; 7]);
        assert!(matches!(
            res,
            Err(VolumeError::SizeMismatch {
                expected: 16,
                actual: 14
            })
        ));
    }

    #[test]
    fn build_from_metadata() {
        let meta = VolumeMetadata {
            size: vector![2, 1, 1],
            endianness: Endianness::Big,
            data_offset: 2,
        };
        // two garbage bytes, then 0x0190 (400) and 0xFC00 (-1024)
        let bytes = vec![0xAA, 0xBB, 0x01, 0x90, 0xFC, 0x00];
        let vol = LinearVolume::build(meta, DataSource::from_vec(bytes)).unwrap();

        assert_eq!(vol.sample(0, 0, 0), 400);
        assert_eq!(vol.sample(1, 0, 0), -1024);
    }
}

use std::{fs::File, path::Path};

use memmap::{Mmap, MmapOptions};
use nalgebra::Vector3;

use crate::error::{Result, VolumeError};

use super::Volume;

pub trait BuildVolume<M>
where
    Self: Sized,
{
    fn build(metadata: M, data: DataSource) -> Result<Self>;
}

/// Common pattern: map file, parse metadata, build volume
pub fn from_file<P, T, M, PF>(path: P, parser: PF) -> Result<T>
where
    P: AsRef<Path>,
    T: BuildVolume<M> + Volume,
    PF: FnOnce(&[u8]) -> Result<M>,
{
    let ds = DataSource::from_file(path)?;
    let metadata = parser(ds.get_slice())?;
    BuildVolume::<M>::build(metadata, ds)
}

/// Byte order of 16-bit samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Big,
    Little,
}

/// Description of a raw sample grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeMetadata {
    /// Dimensions `(Nx, Ny, Nz)`
    pub size: Vector3<usize>,
    pub endianness: Endianness,
    /// Samples start at this byte
    pub data_offset: usize,
}

impl VolumeMetadata {
    /// Length of sample data in bytes
    pub fn data_len(&self) -> usize {
        self.size.x * self.size.y * self.size.z * 2
    }
}

pub enum DataSource {
    Vec(Vec<u8>),
    Mmap(Mmap),
}

impl DataSource {
    pub fn get_slice(&self) -> &[u8] {
        match self {
            DataSource::Vec(v) => v.as_slice(),
            DataSource::Mmap(m) => &m[..],
        }
    }

    pub fn from_vec(vec: Vec<u8>) -> DataSource {
        DataSource::Vec(vec)
    }

    pub fn from_file<P>(path: P) -> Result<DataSource>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(VolumeError::NotAFile(path.display().to_string()));
        }

        let file = File::open(path)?;

        // Safety: file is only read, mapping lives as long as the volume is being built
        let mmap = unsafe { MmapOptions::new().map(&file) }?;

        Ok(DataSource::Mmap(mmap))
    }
}

#[cfg(test)]
mod test {
    use nalgebra::vector;

    use super::*;

    #[test]
    fn missing_file() {
        let res = DataSource::from_file("this/file/does/not/exist.raw");
        assert!(matches!(res, Err(VolumeError::NotAFile(_))));
    }

    #[test]
    fn data_len() {
        let meta = VolumeMetadata {
            size: vector![256, 256, 113],
            endianness: Endianness::Little,
            data_offset: 0,
        };
        assert_eq!(meta.data_len(), 256 * 256 * 113 * 2);
    }
}

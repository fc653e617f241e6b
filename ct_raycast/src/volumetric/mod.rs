mod linear_volume;
pub mod parse;
mod vol_builder;
mod volume;

pub use linear_volume::LinearVolume;
pub use vol_builder::{from_file, BuildVolume, DataSource, Endianness, VolumeMetadata};
pub use volume::Volume;

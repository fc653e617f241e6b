use nalgebra::Vector3;

use crate::common::ValueRange;

/// Read-only 3D grid of signed 16-bit samples.
///
/// Coordinates are `(x, y, z)` with `0 <= x < size.x` etc.
/// Extremes are computed once when the volume is built and never change.
pub trait Volume: Send + Sync {
    /// Get data dimensions `(Nx, Ny, Nz)`
    fn get_size(&self) -> Vector3<usize>;

    /// Sample at integer position, `None` if outside
    fn get_data(&self, x: usize, y: usize, z: usize) -> Option<i16>;

    /// Smallest sample of the whole grid
    fn min(&self) -> i16;

    /// Largest sample of the whole grid
    fn max(&self) -> i16;

    /// Sample at integer position.
    ///
    /// # Panics
    /// Out of range coordinates are a programming error and panic.
    fn sample(&self, x: usize, y: usize, z: usize) -> i16 {
        match self.get_data(x, y, z) {
            Some(v) => v,
            None => panic!(
                "voxel ({x}, {y}, {z}) outside of volume {:?}",
                self.get_size().as_slice()
            ),
        }
    }

    /// Range of samples, used for grayscale normalization
    fn get_range(&self) -> ValueRange {
        ValueRange::new(self.min().into(), self.max().into())
    }

    fn is_in(&self, x: usize, y: usize, z: usize) -> bool {
        let size = self.get_size();
        x < size.x && y < size.y && z < size.z
    }
}

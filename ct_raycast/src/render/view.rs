use std::fmt;

use nalgebra::{vector, Vector3};

use crate::volumetric::Volume;

// Volume axes
const X: usize = 0;
const Y: usize = 1;
const Z: usize = 2;

/// Direction the volume is viewed from.
/// Rays always run along one of the volume axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewAxis {
    /// Looking down the `z` axis, image is the `x`,`y` plane
    Top,
    /// Looking along the `y` axis, image is the `x`,`z` plane
    Front,
    /// Looking along the `x` axis, image is the `y`,`z` plane
    Side,
}

impl ViewAxis {
    pub const ALL: [ViewAxis; 3] = [ViewAxis::Top, ViewAxis::Front, ViewAxis::Side];

    /// Permutation table.
    /// Entry `k` is the volume axis that receives logical coordinate `k`
    /// of `(horizontal pixel, vertical pixel, ray depth)`.
    pub const fn axes(self) -> [usize; 3] {
        match self {
            ViewAxis::Top => [X, Y, Z],
            ViewAxis::Front => [X, Z, Y],
            ViewAxis::Side => [Y, Z, X],
        }
    }

    /// Map logical `(i, j, depth)` to volume `(x, y, z)`
    pub fn to_volume(self, i: usize, j: usize, depth: usize) -> Vector3<usize> {
        let axes = self.axes();
        let mut coords = vector![0, 0, 0];
        coords[axes[0]] = i;
        coords[axes[1]] = j;
        coords[axes[2]] = depth;
        coords
    }

    /// `(width, height, ray length)` of this view for a volume of `size`
    pub fn extents(self, size: Vector3<usize>) -> Vector3<usize> {
        let axes = self.axes();
        vector![size[axes[0]], size[axes[1]], size[axes[2]]]
    }

    pub fn name(self) -> &'static str {
        match self {
            ViewAxis::Top => "top",
            ViewAxis::Front => "front",
            ViewAxis::Side => "side",
        }
    }
}

impl fmt::Display for ViewAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Volume seen from one `ViewAxis`.
/// The only place that knows how views permute volume axes,
/// everything downstream works in `(i, j, depth)`.
pub struct ViewProjector<'a, V>
where
    V: Volume,
{
    volume: &'a V,
    view: ViewAxis,
    extents: Vector3<usize>,
}

// Manual impls, derive would require `V: Clone`
impl<V: Volume> Clone for ViewProjector<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Volume> Copy for ViewProjector<'_, V> {}

impl<'a, V> ViewProjector<'a, V>
where
    V: Volume,
{
    pub fn new(volume: &'a V, view: ViewAxis) -> Self {
        let extents = view.extents(volume.get_size());
        Self {
            volume,
            view,
            extents,
        }
    }

    pub fn view(&self) -> ViewAxis {
        self.view
    }

    pub fn volume(&self) -> &'a V {
        self.volume
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.extents.x
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.extents.y
    }

    /// Number of samples along a ray
    pub fn ray_length(&self) -> usize {
        self.extents.z
    }

    /// Sample seen at pixel `(i, j)` at ray position `depth`.
    ///
    /// # Panics
    /// Panics if the position is outside the volume.
    pub fn sample(&self, i: usize, j: usize, depth: usize) -> i16 {
        let c = self.view.to_volume(i, j, depth);
        self.volume.sample(c.x, c.y, c.z)
    }
}

//! Sampling between voxels along the ray axis.

use crate::volumetric::Volume;

use super::ViewProjector;

/// Position along a ray.
/// Integer positions read voxels directly, fractional ones interpolate
/// between the two neighbouring voxels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RayDepth {
    Voxel(usize),
    Between(f64),
}

impl RayDepth {
    pub fn value(self) -> f64 {
        match self {
            RayDepth::Voxel(d) => d as f64,
            RayDepth::Between(d) => d,
        }
    }
}

impl From<usize> for RayDepth {
    fn from(d: usize) -> Self {
        RayDepth::Voxel(d)
    }
}

impl From<f64> for RayDepth {
    fn from(d: f64) -> Self {
        RayDepth::Between(d)
    }
}

/// Value at `x` on the line through `(x0, v0)` and `(x1, v1)`.
/// Weight is zero if `x0 == x1`.
pub fn interpolate(v0: f64, v1: f64, x0: f64, x: f64, x1: f64) -> f64 {
    let span = x1 - x0;
    let t = if span == 0.0 { 0.0 } else { (x - x0) / span };
    v0 + (v1 - v0) * t
}

/// Position between `x0` and `x1` where the line through `(x0, v0)` and `(x1, v1)`
/// reaches `target`. Flat line (`v0 == v1`) gives `x0`.
pub fn invert(target: f64, v0: f64, v1: f64, x0: f64, x1: f64) -> f64 {
    let dv = v1 - v0;
    if dv == 0.0 {
        return x0;
    }
    x0 + (x1 - x0) * ((target - v0) / dv)
}

impl<'a, V> ViewProjector<'a, V>
where
    V: Volume,
{
    /// Sample at fractional ray position, linear along the ray.
    ///
    /// # Panics
    /// Panics if `depth` is negative, not finite or past the last sample.
    pub fn sample_at(&self, i: usize, j: usize, depth: f64) -> f64 {
        assert!(
            depth.is_finite() && depth >= 0.0,
            "ray depth {depth} out of range"
        );

        let d0 = depth.floor();
        let d1 = depth.ceil();
        let v0 = self.sample(i, j, d0 as usize);
        if d0 == d1 {
            return v0.into();
        }
        let v1 = self.sample(i, j, d1 as usize);

        interpolate(v0.into(), v1.into(), d0, depth, d1)
    }

    /// Sample at either kind of ray position
    pub fn sample_depth(&self, i: usize, j: usize, depth: RayDepth) -> f64 {
        match depth {
            RayDepth::Voxel(d) => self.sample(i, j, d).into(),
            RayDepth::Between(d) => self.sample_at(i, j, d),
        }
    }
}

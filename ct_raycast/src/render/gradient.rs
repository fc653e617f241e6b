//! Finite difference gradient estimation.
//!
//! Each component is estimated independently:
//! central difference inside the axis, forward difference at the lower end
//! and backward difference at the upper end.

use nalgebra::vector;

use crate::{common::Vector3, volumetric::Volume};

use super::{RayDepth, ViewProjector};

/// Difference along one axis at position `p`.
///
/// Central difference is used for `lower < p < upper`.
/// `last` is the last valid position on the axis, one-sided differences
/// reaching past it (or below zero) give 0.
fn finite_difference<F>(p: f64, lower: f64, upper: f64, last: f64, at: F) -> f64
where
    F: Fn(f64) -> f64,
{
    if p > lower && p < upper {
        at(p + 1.0) - at(p - 1.0)
    } else if p <= lower {
        if p + 1.0 <= last {
            at(p + 1.0) - at(p)
        } else {
            0.0
        }
    } else if p - 1.0 >= 0.0 {
        at(p) - at(p - 1.0)
    } else {
        0.0
    }
}

impl<'a, V> ViewProjector<'a, V>
where
    V: Volume,
{
    /// Gradient of the sampled field at pixel `(i, j)`, ray position `depth`.
    /// Components are `(horizontal, vertical, ray)`.
    ///
    /// Fractional positions interpolate along the ray; the central difference
    /// region of the ray axis then shrinks by one sample on each end,
    /// so interpolated neighbours stay inside the volume.
    pub fn gradient(&self, i: usize, j: usize, depth: impl Into<RayDepth>) -> Vector3 {
        let depth = depth.into();

        let last_x = self.width() as f64 - 1.0;
        let last_y = self.height() as f64 - 1.0;
        let last_ray = self.ray_length() as f64 - 1.0;

        let dx = finite_difference(i as f64, 0.0, last_x, last_x, |x| {
            self.sample_depth(x as usize, j, depth)
        });

        let dy = finite_difference(j as f64, 0.0, last_y, last_y, |y| {
            self.sample_depth(i, y as usize, depth)
        });

        let dz = match depth {
            RayDepth::Voxel(d) => finite_difference(d as f64, 0.0, last_ray, last_ray, |z| {
                self.sample(i, j, z as usize).into()
            }),
            RayDepth::Between(d) => {
                finite_difference(d, 1.0, last_ray - 1.0, last_ray, |z| self.sample_at(i, j, z))
            }
        };

        vector![dx, dy, dz]
    }
}

use nalgebra::vector;

use crate::{
    common::{normalized, Vector3},
    volumetric::Volume,
};

use super::{RayDepth, ViewProjector};

/// Lambertian term: cosine between `normal` and the direction from `hit_point`
/// to `light_position`, clamped to `<0;1>`.
/// Zero-length normal or direction gives 0.
pub fn diffuse_intensity(hit_point: Vector3, normal: Vector3, light_position: Vector3) -> f64 {
    let light_dir = normalized(light_position - hit_point);
    let n = normalized(normal);
    n.dot(&light_dir).clamp(0.0, 1.0)
}

impl<'a, V> ViewProjector<'a, V>
where
    V: Volume,
{
    /// Light sits at `light_source_x` horizontally, a quarter of the volume
    /// depth up and `Nx` along the ray, independent of the view.
    pub fn light_position(&self, light_source_x: f64) -> Vector3 {
        let size = self.volume().get_size();
        vector![light_source_x, size.z as f64 / 4.0, size.x as f64]
    }

    /// Diffuse intensity of the surface at pixel `(i, j)`, ray position `depth`.
    /// Normal is the local gradient.
    pub fn diffuse_lighting(
        &self,
        i: usize,
        j: usize,
        depth: impl Into<RayDepth>,
        light_source_x: f64,
    ) -> f64 {
        let depth = depth.into();
        let normal = self.gradient(i, j, depth);
        let hit_point = vector![i as f64, j as f64, depth.value()];
        diffuse_intensity(hit_point, normal, self.light_position(light_source_x))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{render::ViewAxis, test_helpers::volume_from_fn};

    #[test]
    fn orthogonal_is_zero() {
        let l = diffuse_intensity(
            vector![0.0, 0.0, 0.0],
            vector![1.0, 0.0, 0.0],
            vector![0.0, 5.0, 0.0],
        );
        assert_eq!(l, 0.0);
    }

    #[test]
    fn parallel_is_one() {
        let l = diffuse_intensity(
            vector![1.0, 1.0, 1.0],
            vector![0.0, 0.0, 1.0],
            vector![1.0, 1.0, 11.0],
        );
        assert_eq!(l, 1.0);

        // normal does not have to be unit length
        let l = diffuse_intensity(
            vector![0.0, 0.0, 0.0],
            vector![0.0, 300.0, 0.0],
            vector![0.0, 2.0, 0.0],
        );
        assert_eq!(l, 1.0);
    }

    #[test]
    fn facing_away_is_zero() {
        let l = diffuse_intensity(
            vector![0.0, 0.0, 0.0],
            vector![0.0, 0.0, -1.0],
            vector![0.0, 0.0, 10.0],
        );
        assert_eq!(l, 0.0);
    }

    #[test]
    fn zero_normal_is_zero() {
        let l = diffuse_intensity(
            vector![0.0, 0.0, 0.0],
            vector![0.0, 0.0, 0.0],
            vector![0.0, 0.0, 10.0],
        );
        assert_eq!(l, 0.0);
    }

    #[test]
    fn light_position_from_volume() {
        let vol = volume_from_fn(vector![8, 6, 12], |_, _, _| 0);
        let proj = ViewProjector::new(&vol, ViewAxis::Front);
        assert_eq!(proj.light_position(83.0), vector![83.0, 3.0, 8.0]);
    }

    #[test]
    fn lit_surface() {
        // Density grows along the ray, normal points along the ray towards the light
        let vol = volume_from_fn(vector![3, 3, 8], |_, _, z| (z * 100) as i16);
        let proj = ViewProjector::new(&vol, ViewAxis::Top);

        // light at (1, 2, 3), surface at (1, 1, 2): light is off-axis
        let l = proj.diffuse_lighting(1, 1, 2, 1.0);
        let expected = 1.0 / f64::sqrt(2.0);
        assert!((l - expected).abs() < 1e-9);
    }
}

use nalgebra::{vector, Vector3};

use super::{SampleGenerator, AIR};

pub const SKIN: i16 = -100;
pub const BONE: i16 = 1000;
pub const BRAIN: i16 = 30;

/// Shells of the phantom, as fractions of the outer radius
const BONE_OUTER: f32 = 0.92;
const BONE_INNER: f32 = 0.82;

/// Ellipsoid head phantom
/// Skin on the surface, a shell of bone, brain tissue inside
pub struct HeadGenerator {
    center: Vector3<f32>,
    radii: Vector3<f32>,
}

impl HeadGenerator {
    pub fn new(dims: Vector3<u32>) -> HeadGenerator {
        let dims = dims.map(|d| d as f32);
        HeadGenerator {
            center: (dims - vector![1.0, 1.0, 1.0]) / 2.0,
            radii: dims * 0.45,
        }
    }

    /// Distance from center, 1.0 on the surface of the head
    fn relative_distance(&self, coords: Vector3<u32>) -> f32 {
        let pos = coords.map(|c| c as f32);
        (pos - self.center).component_div(&self.radii).norm()
    }
}

impl SampleGenerator for HeadGenerator {
    fn sample_at(&self, coords: Vector3<u32>) -> i16 {
        let r = self.relative_distance(coords);
        if r > 1.0 {
            AIR
        } else if r > BONE_OUTER {
            SKIN
        } else if r > BONE_INNER {
            BONE
        } else {
            BRAIN
        }
    }
}

//! Module with helper functions
//! Saves repetition in unit tests, integration tests and benchmarks

use nalgebra::{vector, Vector3};

use crate::volumetric::LinearVolume;

/// Air in Hounsfield-like units
pub const AIR: i16 = -1000;
/// Inside of the skin band of the default transfer function
pub const SKIN: i16 = 0;
/// Well above the bone threshold
pub const BONE: i16 = 1000;

/// Volume with samples given by `f(x, y, z)`
pub fn volume_from_fn<F>(size: Vector3<usize>, f: F) -> LinearVolume
where
    F: Fn(usize, usize, usize) -> i16,
{
    let mut data = Vec::with_capacity(size.x * size.y * size.z);
    for z in 0..size.z {
        for y in 0..size.y {
            for x in 0..size.x {
                data.push(f(x, y, z));
            }
        }
    }
    LinearVolume::from_samples(size, data).unwrap()
}

/// Every sample holds its own linear index, so all samples are distinct
pub fn index_volume(size: Vector3<usize>) -> LinearVolume {
    volume_from_fn(size, |x, y, z| (x + size.x * (y + size.y * z)) as i16)
}

/// Volume with one constant value
pub fn uniform_volume(size: Vector3<usize>, value: i16) -> LinearVolume {
    volume_from_fn(size, |_, _, _| value)
}

/// `1 × 1 × n` volume, in top view a single ray with `samples`
pub fn ray_volume(samples: &[i16]) -> LinearVolume {
    volume_from_fn(vector![1, 1, samples.len()], |_, _, z| samples[z])
}

/// Cube of side `n` holding a ball of bone wrapped in skin, air around.
/// Bone radius is `0.3 n`, skin layer reaches `0.4 n`.
pub fn head_phantom(n: usize) -> LinearVolume {
    let center = (n as f32 - 1.0) / 2.0;
    let bone_r = 0.3 * n as f32;
    let skin_r = 0.4 * n as f32;

    volume_from_fn(vector![n, n, n], |x, y, z| {
        let d = vector![x as f32, y as f32, z as f32] - vector![center, center, center];
        let r = d.norm();
        if r <= bone_r {
            BONE
        } else if r <= skin_r {
            SKIN
        } else {
            AIR
        }
    })
}

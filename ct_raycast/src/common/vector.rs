use nalgebra::vector;

/// Position, normal or light direction.
/// Components are `(horizontal, vertical, ray)` in view coordinates.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Unit vector in the direction of `v`.
/// Zero-length (or non-finite) input gives a zero vector instead of NaNs.
pub fn normalized(v: Vector3) -> Vector3 {
    v.try_normalize(0.0)
        .filter(|n| n.iter().all(|c| c.is_finite()))
        .unwrap_or_else(|| vector![0.0, 0.0, 0.0])
}

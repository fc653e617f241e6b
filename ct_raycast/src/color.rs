use nalgebra::{vector, Vector4};

/// R G B A, all channels <0;1>
pub type RGBA = Vector4<f32>;

pub fn new(r: f32, g: f32, b: f32, a: f32) -> RGBA {
    vector![r, g, b, a]
}

pub fn zero() -> RGBA {
    vector![0.0, 0.0, 0.0, 0.0]
}

pub fn mono(v: f32, opacity: f32) -> RGBA {
    vector![v, v, v, opacity]
}

/// Opaque color, channels clamped to <0;1>
pub fn opaque(r: f32, g: f32, b: f32) -> RGBA {
    vector![r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0), 1.0]
}

/// Convert channel from <0;1> to byte
pub fn channel_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn opaque_clamps() {
        let c = opaque(1.5, -0.2, 0.5);
        assert_eq!(c, vector![1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn channel_bytes() {
        assert_eq!(channel_to_u8(0.0), 0);
        assert_eq!(channel_to_u8(1.0), 255);
        assert_eq!(channel_to_u8(2.0), 255);
        assert_eq!(channel_to_u8(0.5), 128);
    }
}

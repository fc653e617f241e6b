use crate::{
    color::{self, RGBA},
    transfer_functions::TransferFunction,
};

/// Default opacity of the skin band
pub const SOFT_TISSUE_OPACITY: f32 = 0.12;

const SKIN_RGB: (f32, f32, f32) = (1.0, 0.79, 0.6);
const BONE_OPACITY: f32 = 0.8;

fn is_skin(sample: i16) -> bool {
    sample > -299 && sample < 50
}

fn skin(opacity: f32) -> RGBA {
    color::new(SKIN_RGB.0, SKIN_RGB.1, SKIN_RGB.2, opacity)
}

/// "TF1"
/// Skin band (-299;50) with configurable opacity, opaque-ish white bone above 300.
/// Tuned for CT data in Hounsfield-like units.
#[derive(Debug, Clone, Copy)]
pub struct SkinBoneTf {
    pub skin_opacity: f32,
}

impl TransferFunction for SkinBoneTf {
    fn classify(&self, sample: i16) -> RGBA {
        if is_skin(sample) {
            skin(self.skin_opacity)
        } else if sample > 300 {
            color::new(1.0, 1.0, 1.0, BONE_OPACITY)
        } else {
            color::zero()
        }
    }
}

/// "TF2"
/// Same skin band as `SkinBoneTf`, bone is hidden.
#[derive(Debug, Clone, Copy)]
pub struct SkinTf {
    pub skin_opacity: f32,
}

impl TransferFunction for SkinTf {
    fn classify(&self, sample: i16) -> RGBA {
        if is_skin(sample) {
            skin(self.skin_opacity)
        } else {
            color::zero()
        }
    }
}

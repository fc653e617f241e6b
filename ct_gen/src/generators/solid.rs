use nalgebra::{vector, Vector3};

use crate::config::{Config, GeneratorConfig};

use super::{SampleGenerator, AIR};

/// Generate solid volume
/// All sample values inside the padding are the same
pub struct SolidGenerator {
    /// The sample value
    sample: i16,
    pad: u32,
    dims: Vector3<u32>,
}

impl SolidGenerator {
    pub fn new(sample: i16, pad: u32, dims: Vector3<u32>) -> SolidGenerator {
        SolidGenerator { sample, pad, dims }
    }

    pub fn from_config(config: &Config) -> Result<SolidGenerator, String> {
        match config.generator {
            GeneratorConfig::Solid { sample } => Ok(SolidGenerator::new(sample, 5, config.dims)),
            _ => Err("Bad generator config".into()),
        }
    }
}

impl SampleGenerator for SolidGenerator {
    fn sample_at(&self, coords: Vector3<u32>) -> i16 {
        let pad_end = self
            .dims
            .map(|d| d.saturating_sub(self.pad + 1));
        let pad = vector![self.pad, self.pad, self.pad];

        let inside = coords.iter().zip(pad.iter()).all(|(c, p)| c >= p)
            && coords.iter().zip(pad_end.iter()).all(|(c, e)| c <= e);

        if inside {
            self.sample
        } else {
            AIR
        }
    }
}

use std::{
    error::Error,
    io::{BufWriter, Write},
};

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use ct_raycast::{
    premade::parse::raw_parser,
    volumetric::{from_file, Endianness, LinearVolume, Volume},
};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use nalgebra::{vector, Vector3};
use rayon::prelude::*;

use crate::{
    config::{Config, GeneratorConfig},
    file::open_create_file,
};

mod head;
mod solid;

pub use head::HeadGenerator;
pub use solid::SolidGenerator;

/// Value of empty space
pub const AIR: i16 = -1000;

// Generates one sample at a time, at any location
pub trait SampleGenerator: Sync {
    fn sample_at(&self, coords: Vector3<u32>) -> i16;
}

pub fn get_sample_generator(config: &Config) -> Result<Box<dyn SampleGenerator>, String> {
    let gen: Box<dyn SampleGenerator> = match config.generator {
        GeneratorConfig::Head => Box::new(HeadGenerator::new(config.dims)),
        GeneratorConfig::Solid { .. } => Box::new(SolidGenerator::from_config(config)?),
    };
    Ok(gen)
}

/// Uniform noise in range `<-amplitude;amplitude>`
/// Every slice gets its own RNG so slices can be generated in parallel
fn slice_noise(seed: u64, z: u32, amplitude: u16) -> impl FnMut() -> i32 {
    let rng = fastrand::Rng::new();
    rng.seed(seed.wrapping_add(z as u64));
    let amplitude = amplitude as i32;
    move || {
        if amplitude == 0 {
            0
        } else {
            rng.i32(-amplitude..=amplitude)
        }
    }
}

fn write_sample(buf: &mut Vec<u8>, sample: i16, endianness: Endianness) -> std::io::Result<()> {
    match endianness {
        Endianness::Big => buf.write_i16::<BigEndian>(sample),
        Endianness::Little => buf.write_i16::<LittleEndian>(sample),
    }
}

/// Add noise to a sample, saturating at the ends of the i16 range
fn add_noise(sample: i16, noise: i32) -> i16 {
    (sample as i32 + noise).clamp(i16::MIN as i32, i16::MAX as i32) as i16
}

/// Encode one z slice, x changes fastest
pub fn generate_slice(
    sg: &dyn SampleGenerator,
    config: &Config,
    seed: u64,
    z: u32,
) -> std::io::Result<Vec<u8>> {
    let dims = config.dims;
    let mut noise = slice_noise(seed, z, config.noise);
    let mut buf = Vec::with_capacity(dims.x as usize * dims.y as usize * 2);

    for y in 0..dims.y {
        for x in 0..dims.x {
            let sample = add_noise(sg.sample_at(vector![x, y, z]), noise());
            write_sample(&mut buf, sample, config.endianness)?;
        }
    }
    Ok(buf)
}

pub fn generate_linear_order(
    sg: &dyn SampleGenerator,
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    let seed = config.seed.unwrap_or_else(|| fastrand::u64(..));
    info!("Using seed {seed}");

    let progress = ProgressBar::new(config.dims.z as u64);
    progress.set_style(
        ProgressStyle::default_bar().template("{bar:40} {pos}/{len} slices [{elapsed_precise}]"),
    );

    let slices = (0..config.dims.z)
        .into_par_iter()
        .map(|z| {
            let slice = generate_slice(sg, config, seed, z);
            progress.inc(1);
            slice
        })
        .collect::<Result<Vec<_>, _>>()?;
    progress.finish();

    let file = open_create_file(&config.file_name)?;
    let mut writer = BufWriter::new(file);
    for slice in slices {
        writer.write_all(&slice)?;
    }
    writer.flush()?;

    Ok(())
}

/// Load the generated file back and log what the renderer will see
pub fn verify(config: &Config) -> Result<(), Box<dyn Error>> {
    let size = config.dims.map(|d| d as usize);
    let volume: LinearVolume =
        from_file(&config.file_name, raw_parser(size, config.endianness))?;

    let dims = volume.get_size();
    info!(
        "Verified {:?}: {}x{}x{}, samples <{};{}>",
        config.file_name,
        dims.x,
        dims.y,
        dims.z,
        volume.min(),
        volume.max()
    );
    Ok(())
}

pub fn generate_vol(config: &Config) -> Result<(), Box<dyn Error>> {
    let gen = get_sample_generator(config)?;

    generate_linear_order(gen.as_ref(), config)?;
    info!(
        "Generating finished, result in {:?} ({} bytes)",
        config.file_name,
        config.file_len()
    );

    if config.verify {
        verify(config)?;
    }
    Ok(())
}

use std::{ffi::OsString, str::FromStr};

use clap::ArgMatches;
use ct_raycast::volumetric::Endianness;
use nalgebra::{vector, Scalar, Vector3};

/// Transform `Values` into `Vector`
fn values_to_vector3<T>(args: &ArgMatches, key: &str) -> Result<Vector3<T>, String>
where
    T: FromStr + Scalar + Copy,
{
    let vals = args
        .values_of(key)
        .ok_or_else(|| format!("Missing {key}"))?
        .map(|v| v.parse::<T>().map_err(|_| format!("Cannot parse {key} value '{v}'")))
        .collect::<Result<Vec<T>, String>>()?;

    match vals[..] {
        [x, y, z] => Ok(vector![x, y, z]),
        _ => Err(format!("{key} needs 3 values")),
    }
}

/// Parse optional value of argument `key`
fn parse_value<T>(args: &ArgMatches, key: &str) -> Result<Option<T>, String>
where
    T: FromStr,
{
    args.value_of(key)
        .map(|v| v.parse::<T>().map_err(|_| format!("Cannot parse {key} value '{v}'")))
        .transpose()
}

/// App configuration
/// Config is built from args parsed by `clap`
#[derive(Debug)]
pub struct Config {
    /// Dimensions of volume
    pub dims: Vector3<u32>,
    /// Type of generator to be used
    pub generator: GeneratorConfig,
    /// Byte order of samples in file
    pub endianness: Endianness,
    /// Amplitude of noise, 0 for none
    pub noise: u16,
    // Output file name
    pub file_name: OsString,
    /// Optional seed for RNG, to replicate results
    pub seed: Option<u64>,
    /// Read file back after writing
    pub verify: bool,
}

impl Config {
    pub fn from_args(args: ArgMatches) -> Result<Config, String> {
        // Dims
        let dims = values_to_vector3(&args, "dims")?;
        // Generator
        let generator = GeneratorConfig::from_args(&args)?;
        // Byte order
        let endianness = match args.value_of("endianness") {
            Some("little") => Endianness::Little,
            _ => Endianness::Big,
        };
        let noise = parse_value(&args, "noise")?.unwrap_or(0);
        // File name
        let file_name = args
            .value_of_os("output-file")
            .ok_or("Missing output file")?
            .into();
        let seed = parse_value(&args, "seed")?;
        let verify = args.is_present("verify");

        Ok(Config {
            dims,
            generator,
            endianness,
            noise,
            file_name,
            seed,
            verify,
        })
    }

    /// Number of bytes of the generated file
    pub fn file_len(&self) -> u64 {
        self.dims.iter().map(|&d| d as u64).product::<u64>() * 2
    }
}

/// Settings specific to generator variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeneratorConfig {
    /// Ellipsoid head phantom
    Head,
    /// Generate solid volume
    Solid { sample: i16 },
}

impl GeneratorConfig {
    pub fn from_args(args: &ArgMatches) -> Result<GeneratorConfig, String> {
        match args.value_of("generator") {
            Some("head") => Ok(GeneratorConfig::Head),
            Some("solid") => {
                let sample = parse_value(args, "sample")?.ok_or("Solid generator needs --sample")?;
                Ok(GeneratorConfig::Solid { sample })
            }
            Some(other) => Err(format!("Unknown generator {other}")),
            None => Err("Missing generator".into()),
        }
    }
}

//! Argument parsing and validation
//! Uses library `clap`

use std::ffi::OsStr;

use clap::{Arg, Command, ValueHint};

// up to 32bit value
pub fn is_positive_number(num: &str) -> Result<(), String> {
    let n = num.parse::<u32>();
    match n {
        Ok(n) => {
            if n > 0 {
                Ok(())
            } else {
                Err("Number must be greater than 0".into())
            }
        }
        Err(_) => Err("Number required".into()),
    }
}

pub fn can_fit_i16(num: &str) -> Result<(), String> {
    let n = num.parse::<i16>();
    match n {
        Ok(_) => Ok(()),
        Err(_) => Err("Number does not fit in range <-32768;32767>".into()),
    }
}

// noise is added to i16 samples, so the amplitude is capped at i16::MAX
pub fn is_noise_amplitude(num: &str) -> Result<(), String> {
    let n = num.parse::<u16>();
    match n {
        Ok(n) if n <= i16::MAX as u16 => Ok(()),
        _ => Err("Number does not fit in range <0;32767>".into()),
    }
}

pub fn is_seed(num: &str) -> Result<(), String> {
    match num.parse::<u64>() {
        Ok(_) => Ok(()),
        Err(_) => Err("Seed must be a number in range <0;18446744073709551615>".into()),
    }
}

const GENERATOR_NAMES: &[&str] = &["head", "solid"];
const ENDIANNESS_NAMES: &[&str] = &["big", "little"];

pub fn get_command<'a>() -> Command<'a> {
    Command::new("ct-gen")
        .version("0.1.0")
        .about("Synthetic CT volume generator")
        .arg(
            Arg::new("dims")
                .help("Dimensions of volume")
                .long("dims")
                .short('d')
                .number_of_values(3)
                .value_names(&["X", "Y", "Z"])
                .use_value_delimiter(true)
                .require_value_delimiter(true)
                .require_equals(true)
                .default_values(&["256", "256", "113"])
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("generator")
                .help("Type of generator")
                .long("generator")
                .short('g')
                .required(true)
                .requires_ifs(&[
                    ("solid", "sample"), // if solid is set, require option sample
                ])
                .takes_value(true)
                .value_name("NAME")
                .possible_values(GENERATOR_NAMES),
        )
        .arg(
            Arg::new("endianness")
                .help("Byte order of samples")
                .long("endianness")
                .short('e')
                .default_value("big")
                .value_name("ORDER")
                .possible_values(ENDIANNESS_NAMES),
        )
        .arg(
            Arg::new("seed")
                .help("Seed for RNG, leave out for random seed")
                .long("seed")
                .value_name("SEED")
                .validator(is_seed),
        )
        .arg(
            Arg::new("noise")
                .help("Amplitude of uniform noise added to samples")
                .long("noise")
                .value_name("AMPLITUDE")
                .default_value("0")
                .validator(is_noise_amplitude),
        )
        .arg(
            Arg::new("sample")
                .help("Value of the solid block")
                .long("sample")
                .value_name("VALUE")
                .allow_hyphen_values(true)
                .hide(true) // Hide from help
                .validator(can_fit_i16),
        )
        .arg(
            Arg::new("output-file")
                .help("File name to output")
                .long("output-file")
                .short('o')
                .value_name("FILE")
                .allow_invalid_utf8(true)
                .value_hint(ValueHint::FilePath)
                .default_value_os(OsStr::new("a.raw")),
        )
        .arg(
            Arg::new("verify")
                .help("Load the written file back and report its extremes")
                .long("verify"),
        )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validators() {
        assert!(is_positive_number("12").is_ok());
        assert!(is_positive_number("0").is_err());
        assert!(is_positive_number("-3").is_err());

        assert!(can_fit_i16("-1024").is_ok());
        assert!(can_fit_i16("40000").is_err());

        assert!(is_noise_amplitude("32767").is_ok());
        assert!(is_noise_amplitude("40000").is_err());
        assert!(is_noise_amplitude("-1").is_err());

        assert!(is_seed("0").is_ok());
        assert!(is_seed("18446744073709551615").is_ok());
        assert!(is_seed("-5").is_err());
    }

    #[test]
    fn command_is_valid() {
        get_command().debug_assert();
    }

    #[test]
    fn noise_and_seed_ranges() {
        let res = get_command().try_get_matches_from(["ct-gen", "-g", "head", "--noise", "40000"]);
        assert!(res.is_err());

        let res = get_command().try_get_matches_from([
            "ct-gen",
            "-g",
            "head",
            "--noise",
            "32767",
            "--seed",
            "0",
        ]);
        assert!(res.is_ok());

        let res = get_command().try_get_matches_from(["ct-gen", "-g", "head", "--seed", "5000000000"]);
        assert!(res.is_ok());
    }

    #[test]
    fn solid_requires_sample() {
        let res = get_command().try_get_matches_from(["ct-gen", "-g", "solid"]);
        assert!(res.is_err());

        let res = get_command().try_get_matches_from(["ct-gen", "-g", "solid", "--sample", "-500"]);
        assert!(res.is_ok());
    }
}

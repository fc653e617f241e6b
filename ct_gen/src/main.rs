use config::Config;
use log::{error, info};

mod args;
mod config;
mod file;
mod generators;

use crate::{args::get_command, generators::generate_vol};

pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cmd = get_command();
    let args = cmd.get_matches();

    let cfg = match Config::from_args(args) {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            std::process::exit(2);
        }
    };

    info!("Generating volume...");
    info!("{:?}", cfg);

    if let Err(e) = generate_vol(&cfg) {
        error!("{e}");
        std::process::exit(1);
    }
}

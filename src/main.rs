mod args;
mod equity;

use clap::Parser;
use log::{info, warn};
use snafu::ErrorCompat;

use crate::args::Args;
use crate::equity::loader::ResourceLocation;
use crate::equity::{run_report, RunSettings};

fn main() {
    let args = Args::parse();
    let default_level = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
    info!("args: {:?}", args);

    let settings = RunSettings {
        location: ResourceLocation {
            directory: args.directory,
            raw_data_file: args.input,
        },
        out: args.out,
        reference: args.reference,
    };

    if let Err(e) = run_report(&settings) {
        warn!("Error occurred {:?}", e);
        for (idx, cause) in ErrorCompat::iter_chain(&e).enumerate() {
            if idx == 0 {
                eprintln!("{}", cause);
            } else {
                eprintln!("  caused by: {}", cause);
            }
        }
        std::process::exit(1);
    }
}

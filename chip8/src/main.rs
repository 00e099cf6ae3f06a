use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{App, Arg, ArgMatches};
use log::error;

mod keymap;
mod run;

use run::{run, Config};

/// Configures the command-line interface
fn get_cli_config<'a>() -> ArgMatches<'a> {
    App::new("Emu-8")
        .version("0.1")
        .about("Chip-8 interpreter")
        .arg(
            Arg::with_name("scale")
                .help("Size multiplier for each Chip-8 pixel")
                .required(true)
                .validator(|s| positive(&s)),
        )
        .arg(
            Arg::with_name("delay")
                .help("Milliseconds between two cycles")
                .required(true)
                .validator(|s| s.parse::<u64>().map(|_| ()).map_err(|e| e.to_string())),
        )
        .arg(
            Arg::with_name("rom")
                .help("Path to the ROM to run")
                .required(true),
        )
        .get_matches()
}

fn positive(value: &str) -> Result<(), String> {
    match value.parse::<u32>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(_) => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

fn main() {
    env_logger::init();

    let matches = get_cli_config();
    // Presence and format are enforced by the validators above
    let config = Config {
        rom: PathBuf::from(matches.value_of("rom").unwrap_or_default()),
        scale: matches.value_of("scale").and_then(|s| s.parse().ok()).unwrap_or(10),
        cycle_time: Duration::from_millis(
            matches.value_of("delay").and_then(|s| s.parse().ok()).unwrap_or(2),
        ),
    };

    if let Err(e) = run(config) {
        error!("{}", e);
        eprintln!("emu8: {}", e);
        process::exit(1);
    }
}

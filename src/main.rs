use std::process;
use log::{error, LevelFilter};

use geokit::commands::cli::build_cli;
use geokit::commands::{CommandFactory, GeoKitCommandFactory};
use geokit::utils::config::{GeoKitConfig, DEFAULT_CONFIG_FILE};
use geokit::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let config_result = match matches.get_one::<String>("config") {
        Some(path) => GeoKitConfig::from_file(path),
        None => GeoKitConfig::load_or_default(DEFAULT_CONFIG_FILE),
    };
    let config = match config_result {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        config.log_level
    };

    let logger = match Logger::with_level(&config.log_file, level) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    match &config.global_log_file {
        Some(global_log_file) => {
            if let Err(e) = Logger::init_global_logger(global_log_file, level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        },
        None => {
            // Console only; RUST_LOG overrides the configured level
            let _ = env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .try_init();
        }
    }

    let factory = GeoKitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}

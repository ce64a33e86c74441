use clap::Parser;
use network_address::cli::{run, Args};
use network_address::config::Config;
use std::error::Error;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = Args::parse();
    let config = Config::from_env()?;
    if Path::new(&config.log_config).exists() {
        if let Err(e) = log4rs::init_file(&config.log_config, Default::default()) {
            eprintln!("Error initializing log4rs from {}: {e}", config.log_config);
        }
    }
    log::info!("#Start main()");

    if !run(&args, &config)? {
        std::process::exit(1);
    }
    Ok(())
}

use clap::Parser;
use most_active_cookie::utils::{logger, validation::Validate};
use most_active_cookie::{find_most_active_in_file, CliConfig};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting most-active-cookie");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Run with --help for usage.");
        std::process::exit(e.exit_code());
    }

    match find_most_active_in_file(&config.file, config.date) {
        Ok(cookies) => {
            tracing::info!(
                "Found {} most active cookie(s) for {}",
                cookies.len(),
                config.date
            );
            // Zero matching cookies is a valid outcome: no output, exit 0.
            for cookie in &cookies {
                println!("{}", cookie);
            }
        }
        Err(e) => {
            tracing::error!("Query failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}

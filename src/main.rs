mod api;
mod cli;
mod config;
mod error;
mod updater;

#[cfg(test)]
mod tests;

use api::CloudflareClient;
use cli::Args;
use log::{error, warn};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match Args::parse_from_env() {
        Ok(args) => args,
        Err(e) => {
            let code = cli::parse_error_exit_code(&e);
            let _ = e.print();
            if code != 0 {
                println!("{}", cli::usage());
            }
            return ExitCode::from(code);
        }
    };
    if !args.rest.is_empty() {
        warn!("Ignoring positional arguments: {:?}", args.rest);
    }

    match updater::run(&args, |config| {
        CloudflareClient::new(&config.api_token, &config.api_url)
    })
    .await
    {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            if e.is_missing_parameters() {
                println!("Missing required parameters.");
                println!("Usage:");
                println!("{}", cli::usage());
                println!("All parameters are required.");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

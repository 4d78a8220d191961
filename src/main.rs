use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;

use taskdesk::api::HttpApi;
use taskdesk::config::Config;
use taskdesk::logger::Logger;
use taskdesk::service::TaskService;
use taskdesk::session::SessionStore;
use taskdesk::{constants, ui};

const USAGE: &str = "\
Usage: taskdesk [OPTIONS]

Options:
  --generate-config [PATH]  Write a default configuration file and exit
  --logout                  Forget the stored session and exit
  -h, --help                Print this help";

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);

    if let Some(arg) = args.next() {
        match arg.as_str() {
            "--generate-config" => {
                let path = match args.next() {
                    Some(path) => PathBuf::from(path),
                    None => Config::get_default_config_path()?,
                };
                return Config::generate_default_config(path);
            }
            "--logout" => {
                SessionStore::open_default()?.clear()?;
                println!("{}", constants::SUCCESS_LOGOUT);
                return Ok(());
            }
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            other => {
                eprintln!("❌ Unknown argument: {}\n\n{}", other, USAGE);
                std::process::exit(2);
            }
        }
    }

    let config = Config::load().context("Failed to load configuration")?;

    let logger = Logger::from_config(config.logging.enabled)?;
    logger.install(log::LevelFilter::Debug)?;
    log::info!("taskdesk starting against {}", config.api.base_url);

    let api = HttpApi::new(config.api.base_url.clone())?;
    let store = SessionStore::open_default()?;
    let service = TaskService::new(Arc::new(api), store);

    // Run the TUI application
    ui::run_app(service, config, logger).await?;

    Ok(())
}

mod actions;
mod config;
mod github;
mod grouping;
mod http;
mod logger;
mod runner;
mod wait;

use config::Config;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = Config::load();

    if let Err(err) = logger::init(config.debug) {
        eprintln!("Cannot initialize the logger: {:#}", err);
    }

    log::info!("Starting");
    match runner::run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            actions::set_failed(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

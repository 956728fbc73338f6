//! Deposit feed console - Main executable
//!
//! Loads deposits from the configured store and drives the list, detail and
//! notification screens from line commands on stdin.
use anyhow::Context;
use depositos::view::stdout_output;
use depositos::{AppConfig, Command, Flow, Router, ServiceContainer};
use dotenv::dotenv;
use log::{error, info};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!("Starting depositos v{}", depositos::VERSION);

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    info!(
        "Configuration: backend={:?}, table={}, notification capacity={}",
        config.backend, config.table, config.notification_capacity
    );

    let services = ServiceContainer::from_config(config)
        .await
        .context("Failed to initialize services")?;

    let router = services.create_router(stdout_output());
    let watcher = router.watch_notifications();

    // A failed first load still leaves the screen usable; `refresh` retries
    router.mount().await?;
    router.print("Escribe `help` para ver los comandos.\n")?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                router.print(&format!("{}\n", e))?;
                continue;
            }
        };

        match router.handle(command).await {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => error!("Command failed: {:#}", e),
        }
    }

    watcher.abort();
    info!("Bye");

    Ok(())
}

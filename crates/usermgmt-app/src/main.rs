//! # usermgmt
//!
//! Entry point for the terminal user-management application.

use clap::Parser;
use tokio::io::{stdin, stdout, BufReader};
use tracing::{error, info};
use usermgmt_app::startup::{print_banner, print_startup_info};
use usermgmt_app::{Cli, Session, TextCatalog};
use usermgmt_config::ConfigLoader;
use usermgmt_core::{init_tracing, UserMgmtResult};
use usermgmt_navigation::NavigationController;
use usermgmt_repository::DaoFactory;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("Application error: {}", e);
        eprintln!("usermgmt: {} ({})", e, e.error_code());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> UserMgmtResult<()> {
    let loader = ConfigLoader::new(&cli.config_dir)?;
    let config = loader.get().await;
    init_tracing(&config.logging)?;

    print_banner();
    info!("Starting usermgmt...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: {}", loader.config_dir().display());

    let factory = DaoFactory::from_config(&config).await?;
    print_startup_info(&config, factory.kind());

    let catalog = TextCatalog::embedded()?;
    let controller = NavigationController::start(factory.user_dao()).await?;
    let mut session = Session::new(controller, catalog);

    let result = usermgmt_app::run(&mut session, BufReader::new(stdin()), stdout()).await;

    factory.close().await;
    info!("Shutdown complete");
    result
}

//! Startup utilities.

use tracing::info;
use usermgmt_config::{AppConfig, DaoKind};

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
                                                    _
  _   _ ___  ___ _ __ _ __ ___   __ _ _ __ ___ | |_
 | | | / __|/ _ \ '__| '_ ` _ \ / _` | '_ ` _ \| __|
 | |_| \__ \  __/ |  | | | | | | (_| | | | | | | |_
  \__,_|___/\___|_|  |_| |_| |_|\__, |_| |_| |_|\__|
                                |___/
    "#);
}

/// Prints startup information for the selected storage.
pub fn print_startup_info(config: &AppConfig, kind: DaoKind) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("Application: {} {}", config.app.name, config.app.version);
    info!("Environment: {}", config.app.environment);
    info!("DAO:         {}", kind);
    if kind.needs_database() {
        info!("Database:    {}", config.database.url);
    } else if let Some(fixture) = &config.dao.fixture {
        info!("Fixture:     {}", fixture.display());
    }
    info!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;
    use usermgmt_config::DaoConfig;

    #[test]
    fn test_print_banner_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_banner();
    }

    #[test]
    fn test_print_startup_info_sqlite() {
        let _ = tracing_subscriber::fmt::try_init();
        print_startup_info(&AppConfig::default(), DaoKind::Sqlite);
    }

    #[test]
    fn test_print_startup_info_memory_with_fixture() {
        let _ = tracing_subscriber::fmt::try_init();
        let config = AppConfig {
            dao: DaoConfig {
                fixture: Some("fixtures/users.json".into()),
                ..DaoConfig::for_kind(DaoKind::Memory)
            },
            ..AppConfig::default()
        };
        print_startup_info(&config, DaoKind::Memory);
    }
}

//! Startup wiring: configuration directory to a running session.

use std::fs;
use tempfile::TempDir;
use usermgmt_app::{run, Session, TextCatalog};
use usermgmt_config::{ConfigLoader, DaoKind};
use usermgmt_navigation::{NavigationController, PanelKind};
use usermgmt_repository::DaoFactory;

async fn start(config_toml: &str) -> (DaoFactory, Session) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("default.toml"), config_toml).unwrap();

    let loader = ConfigLoader::new(dir.path()).unwrap();
    let factory = DaoFactory::from_config(&loader.get().await).await.unwrap();
    let controller = NavigationController::start(factory.user_dao()).await.unwrap();
    let session = Session::new(controller, TextCatalog::embedded().unwrap());
    (factory, session)
}

#[tokio::test]
async fn test_memory_config_without_fixture_starts_empty() {
    let (factory, mut session) = start("[dao]\nfactory = \"memory\"\n").await;
    assert_eq!(factory.kind(), DaoKind::Memory);
    assert_eq!(session.controller().kind(), PanelKind::Browse);
    assert!(session.controller().panel().rows().is_empty());

    let script = "add\nfirst Jerry\nlast Smith\ndob 2000-01-01\nok\nquit\n";
    let mut out = Vec::new();
    run(&mut session, script.as_bytes(), &mut out).await.unwrap();

    let users = factory.user_dao().find_all().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].full_name(), "Jerry Smith");
    factory.close().await;
}

#[tokio::test]
async fn test_sqlite_config_starts_on_migrated_database() {
    let (factory, session) = start(
        "[dao]\nfactory = \"sqlite\"\n\n[database]\nurl = \"sqlite::memory:\"\nmax_connections = 1\nrun_migrations = true\n",
    )
    .await;
    assert_eq!(factory.kind(), DaoKind::Sqlite);
    assert!(session.controller().panel().rows().is_empty());
    factory.close().await;
}

#[tokio::test]
async fn test_missing_factory_fails_startup() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("default.toml"), "[logging]\nfilter = \"info\"\n").unwrap();

    let loader = ConfigLoader::new(dir.path()).unwrap();
    let err = DaoFactory::from_config(&loader.get().await).await.unwrap_err();
    assert!(err.is_fatal());
}

//! DAO (Data Access Object) layer.
//!
//! DAOs provide single-source data access abstractions. The trait lives
//! here; implementations are organized by technology under `impl/`.

pub mod r#impl;
pub mod user_dao;

pub use r#impl::{InMemoryUserDao, SqliteUserDao};
pub use user_dao::UserDao;

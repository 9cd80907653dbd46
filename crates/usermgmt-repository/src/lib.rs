//! # usermgmt Repository
//!
//! Data access for users:
//!
//! ```text
//! Navigation
//!   ↓  Arc<dyn UserDao>   (DAO interface)
//! DaoFactory              (picks the strategy from `dao.factory`)
//!   ├─ SqliteUserDao      (SQLx / SQLite, pool injected through Shaku)
//!   └─ InMemoryUserDao    (in-process, optionally seeded from a fixture)
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   factory.rs                  ← DaoFactory + Shaku modules
//!   pool.rs                     ← DatabasePool
//!   dao/
//!     user_dao.rs               ← UserDao trait
//!     impl/
//!       sqlite/user_dao_impl.rs ← SqliteUserDao
//!       memory/user_dao_impl.rs ← InMemoryUserDao
//! ```

pub mod dao;
pub mod factory;
pub mod pool;

pub use dao::{InMemoryUserDao, SqliteUserDao, UserDao};
pub use factory::{DaoFactory, InMemoryDaoModule, SqliteDaoModule};
pub use pool::*;

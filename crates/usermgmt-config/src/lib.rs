//! # usermgmt config
//!
//! Configuration management for usermgmt.
//! Supports layered configuration from files and environment variables,
//! with runtime reload.

mod app_config;
mod dao;
mod loader;
mod validation;

pub use app_config::*;
pub use dao::*;
pub use loader::*;
pub use validation::*;

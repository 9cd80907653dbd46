//! # usermgmt App
//!
//! Terminal front end for user management: command-line arguments, the
//! display text catalog, panel rendering and the interactive session.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod render;
pub mod startup;

pub use app::{run, Flow, Input, Session};
pub use catalog::TextCatalog;
pub use cli::Cli;

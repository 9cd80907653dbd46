//! # usermgmt Navigation
//!
//! Panel navigation for the user-management front end. A
//! [`NavigationController`] owns exactly one active [`Panel`] and moves
//! between Browse, Add, Edit, Details and Delete in response to
//! [`Command`] messages, reading and writing through a single
//! `Arc<dyn UserDao>`.

pub mod command;
pub mod controller;
pub mod form;
pub mod panel;

pub use command::Command;
pub use controller::NavigationController;
pub use form::UserForm;
pub use panel::{Panel, PanelKind};

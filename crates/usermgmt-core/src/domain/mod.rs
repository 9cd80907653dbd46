//! Domain entities for usermgmt.

pub mod entities;

pub use entities::*;

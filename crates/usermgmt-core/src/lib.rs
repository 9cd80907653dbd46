//! # usermgmt core
//!
//! Core types shared by every layer of the user-management workspace:
//! the unified error type, typed ids, the [`User`] entity, field
//! validation rules and tracing initialisation.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use telemetry::{init_tracing, LoggingConfig};
pub use validation::*;

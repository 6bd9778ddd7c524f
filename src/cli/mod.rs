//! CLI commands
//!
//! Command implementations for the `shiftreq` binary.

mod auth;
mod form;
mod progress;
mod style;
mod submit;

pub use auth::{AuthAction, run_auth};
pub use form::run_form;
pub use submit::run_submit;

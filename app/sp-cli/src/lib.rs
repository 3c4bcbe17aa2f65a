//! Support Plus application shell: configuration, logging and the wiring of
//! the identity resolver to the per-user cache store.

pub mod app;
pub mod catalog_commands;
pub mod cli;
pub mod commands;
pub mod error;
pub mod hidden_commands;
pub mod identity_bridge;
pub mod identity_commands;
pub mod logger;
pub mod login_commands;
pub mod profile_commands;


pub use app::App;
pub use error::{AppError, Result};

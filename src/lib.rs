pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub const APP_NAME: &str = "Syntax Primer";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use crate::config::{storage::LocalStorage, CliConfig, TourSettings};
pub use crate::core::engine::TourEngine;
pub use crate::utils::error::{PrimerError, Result};

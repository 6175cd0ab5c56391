pub mod clients;
pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod models;
pub mod services;
pub mod telemetry;

pub use config::Settings;
pub use error::{AppError, Result};

//! Shared types, errors, and configuration for Pocketbook.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - The `{status, data | message}` response envelope
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, CorsConfig, DatabaseConfig, LogConfig, LogFormat, ServerConfig};
pub use error::{AppError, AppResult};

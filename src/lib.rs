//! Profile API - A single-record user profile service
//!
//! This crate exposes CRUD operations over one in-memory user profile
//! record through a small Axum HTTP surface.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and DTO mapping
//! - **services**: The in-memory user store facade
//! - **api**: HTTP handlers, extractors, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{ContactInfo, User, UserDto};
pub use errors::{AppError, AppResult};
pub use services::{UserService, UserStore};

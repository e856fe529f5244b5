//! Application services layer - Use cases and business logic.
//!
//! Services are exposed to the API layer through traits for
//! dependency inversion.

mod user_service;

pub use user_service::{UserService, UserStore};

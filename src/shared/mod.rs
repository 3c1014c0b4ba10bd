//! Shared Module
//!
//! This module contains the pure, I/O-free parts of the application:
//! configuration, form schemas and their validation errors. Nothing in here
//! talks to the database or the network, so it can be tested without a
//! running server.

/// Validation error types
pub mod error;

/// Form schema and rule engine
pub mod validation;

/// Typed HTML forms
pub mod forms;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{ConfigError, ServerConfig, ServerConfigBuilder};
pub use error::{ValidationError, ValidationErrors, ValidationResult};
pub use forms::{NameForm, PasswordForm, PostForm, UpdateUserForm, UserForm};
pub use validation::{Form, FormSchema, FormValues};

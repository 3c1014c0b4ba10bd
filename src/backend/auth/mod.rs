//! Credential Module
//!
//! One-way password hashing and verification, kept apart from the
//! persistence layer. Handlers hash a submitted password before building a
//! new user row, and verify candidates through `User::verify_password`.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! └── credentials.rs  - bcrypt hashing and verification
//! ```
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - The hash has no public getter and is redacted in `Debug` output
//! - A missing or malformed stored hash never verifies

/// bcrypt hashing and verification
pub mod credentials;

pub use credentials::{hash, verify, CredentialError, PasswordHash};

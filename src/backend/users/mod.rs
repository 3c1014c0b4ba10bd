//! Users Module
//!
//! The `users` table and the pages that manage it.
//!
//! # Module Structure
//!
//! ```text
//! users/
//! ├── mod.rs        - Module exports and documentation
//! ├── db.rs         - User model and database operations
//! └── handlers.rs   - Add, update, delete and password-test pages
//! ```

/// User model and database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use db::{InsertOutcome, NewUser, User, UserChanges};

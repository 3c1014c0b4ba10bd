//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - An application fixture backed by an in-memory database
//! - Form builders for the user and post forms
//! - Custom assertion macros

pub mod assertions;
pub mod database;

// Re-export commonly used utilities
pub use database::*;

//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! ├── page_routes.rs  - Index, greeting and name form
//! ├── user_routes.rs  - User management pages
//! ├── post_routes.rs  - Blog post pages
//! └── params.rs       - Path parameter extractors
//! ```
//!
//! # Route Types
//!
//! ## Pages
//!
//! - `GET /` - Index page
//! - `GET /user/{name}` - Greeting
//! - `GET|POST /name` - Name form
//!
//! ## Users
//!
//! - `GET|POST /user/add` - Add a user, list users
//! - `GET|POST /update/{id}` - Update a user
//! - `GET /delete/{id}` - Delete a user
//! - `GET|POST /test` - Password check
//!
//! ## Posts
//!
//! - `GET|POST /add-post` - Submit a post
//! - `GET /posts` - List posts
//! - `GET /posts/{id}` - Show a post
//!
//! # Example
//!
//! ```rust,no_run
//! use userboard::backend::routes::create_router;
//! use userboard::backend::server::create_state;
//! use userboard::shared::ServerConfig;
//!
//! # async fn example() {
//! let state = create_state(ServerConfig::default()).await.unwrap();
//! let app = create_router(state);
//! # }
//! ```

/// Main router creation
pub mod router;

/// Index, greeting and name form routes
pub mod page_routes;

/// User management routes
pub mod user_routes;

/// Blog post routes
pub mod post_routes;

/// Path parameter extractors
pub mod params;

pub use router::create_router;

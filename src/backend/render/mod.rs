//! Page Rendering
//!
//! Server-rendered HTML through tera. Templates are compiled into the
//! binary and registered once at startup; handlers describe a response as a
//! [`Page`] and render it against the shared [`Templates`].
//!
//! # Module Structure
//!
//! ```text
//! render/
//! ├── mod.rs          - Module exports
//! ├── templates.rs    - Tera registry and TemplateError
//! ├── page.rs         - Page builder (template, status, context)
//! └── flash.rs        - One-shot flash messages
//! ```
//!
//! # Context Conventions
//!
//! Every page receives `flashes` (a list of `{level, text}`), and every form
//! page receives `form` (submitted values by field) and `errors` (messages
//! by field). Both objects carry a key for every declared field, so
//! templates can read `form.email` or loop over `errors.email` directly.

/// One-shot flash messages
pub mod flash;

/// Page builder
pub mod page;

/// Template registry
pub mod templates;

pub use flash::{FlashLevel, FlashMessage};
pub use page::Page;
pub use templates::{TemplateError, Templates};

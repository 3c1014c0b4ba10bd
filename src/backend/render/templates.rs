/**
 * Template Registry
 *
 * All page templates are embedded with `include_str!` and registered in a
 * single `tera::Tera` instance when the application starts. A template that
 * fails to parse stops startup instead of failing the first request that
 * uses it.
 *
 * Autoescaping is on for every registered name (all end in `.html`), so
 * user-supplied values such as names and post bodies are HTML-escaped.
 */
use tera::{Context, Tera};
use thiserror::Error;

/// Templates compiled into the binary, by registered name
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../../templates/base.html")),
    ("user_table.html", include_str!("../../../templates/user_table.html")),
    ("index.html", include_str!("../../../templates/index.html")),
    ("user.html", include_str!("../../../templates/user.html")),
    ("name.html", include_str!("../../../templates/name.html")),
    ("add_user.html", include_str!("../../../templates/add_user.html")),
    ("update.html", include_str!("../../../templates/update.html")),
    ("test_password.html", include_str!("../../../templates/test_password.html")),
    ("add_post.html", include_str!("../../../templates/add_post.html")),
    ("posts.html", include_str!("../../../templates/posts.html")),
    ("post.html", include_str!("../../../templates/post.html")),
    ("404.html", include_str!("../../../templates/404.html")),
    ("500.html", include_str!("../../../templates/500.html")),
];

/// Template errors
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to load templates: {0}")]
    Load(#[source] tera::Error),

    #[error("failed to render {name}: {source}")]
    Render {
        name: String,
        #[source]
        source: tera::Error,
    },

    #[error("invalid template context: {0}")]
    Context(#[source] tera::Error),
}

/// Registry of compiled page templates
#[derive(Debug)]
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Parse and register every embedded template
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())
            .map_err(TemplateError::Load)?;
        tracing::debug!("Registered {} templates", TEMPLATES.len());
        Ok(Self { tera })
    }

    /// Render a registered template
    pub fn render(&self, name: &str, context: &Context) -> Result<String, TemplateError> {
        self.tera.render(name, context).map_err(|source| TemplateError::Render {
            name: name.to_string(),
            source,
        })
    }
}

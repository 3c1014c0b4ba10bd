//! Page builder
//!
//! A `Page` names a template, the status to answer with and the context to
//! render it against. Handlers build one per response.

use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::backend::render::flash::FlashMessage;
use crate::backend::render::templates::{TemplateError, Templates};
use crate::shared::{FormSchema, ValidationErrors};

/// A template plus everything needed to render it
#[derive(Debug, Clone)]
pub struct Page {
    template: &'static str,
    status: StatusCode,
    context: Map<String, Value>,
    flashes: Vec<FlashMessage>,
}

impl Page {
    /// A 200 page with an empty context
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            status: StatusCode::OK,
            context: Map::new(),
            flashes: Vec::new(),
        }
    }

    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Add a context value
    ///
    /// A value that fails to serialize is logged and rendered as null.
    pub fn with(mut self, key: &str, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or_else(|e| {
            tracing::warn!("Failed to serialize context value {}: {:?}", key, e);
            Value::Null
        });
        self.context.insert(key.to_string(), value);
        self
    }

    pub fn flash(mut self, message: FlashMessage) -> Self {
        self.flashes.push(message);
        self
    }

    /// Add `form` and `errors` for a form page
    ///
    /// Every non-secret field of `schema` gets a `form` entry (blank unless
    /// present in `values`), and every field gets an `errors` entry.
    pub fn form(
        mut self,
        schema: &FormSchema,
        values: &HashMap<String, String>,
        errors: Option<&ValidationErrors>,
    ) -> Self {
        let echoed = schema.echo(values);
        let mut form = Map::new();
        let mut field_errors = Map::new();
        for field in schema.fields() {
            if !field.secret {
                let value = echoed.get(field.name).cloned().unwrap_or_default();
                form.insert(field.name.to_string(), Value::String(value));
            }
            let messages = errors
                .map(|errors| errors.field_errors(field.name))
                .unwrap_or_default()
                .iter()
                .cloned()
                .map(Value::String)
                .collect();
            field_errors.insert(field.name.to_string(), Value::Array(messages));
        }
        self.context.insert("form".to_string(), Value::Object(form));
        self.context.insert("errors".to_string(), Value::Object(field_errors));
        self
    }

    /// Render to an HTML response
    pub fn render(mut self, templates: &Templates) -> Result<Response, TemplateError> {
        let flashes = std::mem::take(&mut self.flashes);
        let page = self.with("flashes", flashes);

        let context =
            tera::Context::from_value(Value::Object(page.context)).map_err(TemplateError::Context)?;
        let body = templates.render(page.template, &context)?;
        Ok((page.status, Html(body)).into_response())
    }
}

//! Page Handlers
//!
//! - `GET /` - index page
//! - `GET /user/{name}` - greet a user by name
//! - `GET|POST /name` - the name form

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use crate::backend::error::BackendError;
use crate::backend::render::{FlashMessage, Page};
use crate::backend::server::state::AppState;
use crate::shared::{Form, NameForm};

pub const NAME_SUBMITTED: &str = "Form Submitted Successfully!";

const FIRST_NAME: &str = "John";
const FAVORITE_PIZZA: [&str; 3] = ["Pepperoni", "Cheese", "Mushrooms"];

/// Index page
pub async fn index(State(state): State<AppState>) -> Result<Response, BackendError> {
    let page = Page::new("index.html")
        .with("first_name", FIRST_NAME)
        .with("favorite_pizza", FAVORITE_PIZZA);
    Ok(page.render(&state.templates)?)
}

/// Greet the user named in the path
pub async fn greet_user(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, BackendError> {
    Ok(Page::new("user.html").with("name", name).render(&state.templates)?)
}

/// Show the name form
pub async fn name_form(State(state): State<AppState>) -> Result<Response, BackendError> {
    let page = Page::new("name.html").form(&NameForm::SCHEMA, &HashMap::new(), None);
    Ok(page.render(&state.templates)?)
}

/// Accept the name form
pub async fn name_submit(
    State(state): State<AppState>,
    axum::Form(raw): axum::Form<HashMap<String, String>>,
) -> Result<Response, BackendError> {
    let page = match NameForm::validate(&raw) {
        Ok(form) => {
            tracing::debug!("Name form submitted: {}", form.name);
            Page::new("name.html")
                .with("name", form.name)
                .flash(FlashMessage::success(NAME_SUBMITTED))
                .form(&NameForm::SCHEMA, &HashMap::new(), None)
        }
        Err(errors) => Page::new("name.html")
            .status(StatusCode::UNPROCESSABLE_ENTITY)
            .form(&NameForm::SCHEMA, &raw, Some(&errors)),
    };
    Ok(page.render(&state.templates)?)
}

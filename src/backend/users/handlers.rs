/**
 * User Handlers
 *
 * HTTP handlers for the user pages:
 *
 * - `GET|POST /user/add` - add a user, list all users
 * - `GET|POST /update/{id}` - edit a user
 * - `GET /delete/{id}` - delete a user, then list the rest
 * - `GET|POST /test` - check an email/password pair
 *
 * # Form Flow
 *
 * Every form route has two states. `GET` renders the empty (or prefilled)
 * form. `POST` validates the submission; a rejected form is re-rendered
 * with its errors and status 422 and never reaches the database. An
 * accepted form is persisted and the page is rendered again with a flash
 * message.
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt before storage
 * - Password fields are never echoed back into a re-rendered form
 */

use std::collections::HashMap;

use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
};

use crate::backend::auth;
use crate::backend::error::{BackendError, StoreError};
use crate::backend::render::{FlashMessage, Page};
use crate::backend::routes::params::RecordId;
use crate::backend::server::state::AppState;
use crate::backend::users::db::{
    delete_user, find_user, find_user_by_email, insert_user, list_users, update_user,
    InsertOutcome, NewUser, User, UserChanges,
};
use crate::shared::{Form, PasswordForm, UpdateUserForm, UserForm};

pub const USER_ADDED: &str = "User Added Successfully!";
pub const USER_UPDATED: &str = "User Updated Successfully!";
/// Flashed when an add or update cannot be saved
pub const SAVE_FAILED: &str = "Error! Looks like there was a problem... try again!";
pub const USER_DELETED: &str = "User Deleted Successfully!!";
pub const USER_DELETE_FAILED: &str = "Whoops! There was a problem deleting user, try again...";
pub const NO_USER_FOUND: &str = "No user found with that email";

type Submission = axum::Form<HashMap<String, String>>;

/// Add-user page with the current user list
async fn user_list_page(state: &AppState) -> Result<Page, BackendError> {
    let users = list_users(&state.db).await?;
    Ok(Page::new("add_user.html").with("users", users))
}

/// Update form values taken from a stored user
fn prefill(user: &User) -> HashMap<String, String> {
    HashMap::from([
        ("name".to_string(), user.name.clone()),
        ("email".to_string(), user.email.clone()),
        ("favorite_color".to_string(), user.favorite_color.clone().unwrap_or_default()),
    ])
}

/// Show the add-user form
pub async fn add_user_form(State(state): State<AppState>) -> Result<Response, BackendError> {
    let page = user_list_page(&state)
        .await?
        .form(&UserForm::SCHEMA, &HashMap::new(), None);
    Ok(page.render(&state.templates)?)
}

/// Add a user
///
/// A submission whose email is already registered is skipped without an
/// error: nothing is written and no flash is shown.
pub async fn add_user(
    State(state): State<AppState>,
    axum::Form(raw): Submission,
) -> Result<Response, BackendError> {
    let form = match UserForm::validate(&raw) {
        Ok(form) => form,
        Err(errors) => {
            tracing::debug!("Add user form rejected: {}", errors);
            let page = user_list_page(&state)
                .await?
                .status(StatusCode::UNPROCESSABLE_ENTITY)
                .form(&UserForm::SCHEMA, &raw, Some(&errors));
            return Ok(page.render(&state.templates)?);
        }
    };

    // Skip hashing for an email that is already taken
    if let Some(existing) = find_user_by_email(&state.db, &form.email).await? {
        tracing::info!("Email already registered, skipping insert: {} (id {})", existing.email, existing.id);
        let page = user_list_page(&state)
            .await?
            .form(&UserForm::SCHEMA, &HashMap::new(), None);
        return Ok(page.render(&state.templates)?);
    }

    let password_hash = auth::hash(&form.password, state.config.bcrypt_cost)?;
    let new_user = NewUser {
        name: form.name.clone(),
        email: form.email.clone(),
        favorite_color: form.favorite_color.clone(),
        password_hash,
    };

    let page = match insert_user(&state.db, new_user).await {
        Ok(InsertOutcome::Inserted(user)) => {
            tracing::info!("User added: {} ({})", user.name, user.email);
            user_list_page(&state)
                .await?
                .with("name", &user.name)
                .flash(FlashMessage::success(USER_ADDED))
                .form(&UserForm::SCHEMA, &HashMap::new(), None)
        }
        Ok(InsertOutcome::AlreadyExists(existing)) => {
            tracing::info!("Email registered concurrently, skipping insert: {}", existing.email);
            user_list_page(&state)
                .await?
                .form(&UserForm::SCHEMA, &HashMap::new(), None)
        }
        Err(e) => {
            tracing::error!("Failed to add user {}: {}", form.email, e);
            user_list_page(&state)
                .await?
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .flash(FlashMessage::error(SAVE_FAILED))
                .form(&UserForm::SCHEMA, &raw, None)
        }
    };
    Ok(page.render(&state.templates)?)
}

/// Show the update form, prefilled from the stored user
pub async fn update_user_form(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Response, BackendError> {
    let user = find_user(&state.db, id)
        .await?
        .ok_or_else(|| BackendError::not_found(format!("user {}", id)))?;

    let page = Page::new("update.html")
        .form(&UpdateUserForm::SCHEMA, &prefill(&user), None)
        .with("user", &user);
    Ok(page.render(&state.templates)?)
}

/// Update a user
///
/// Only the submitted fields are changed. A blank favorite color clears
/// the stored one.
pub async fn update_user_submit(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    axum::Form(raw): Submission,
) -> Result<Response, BackendError> {
    let user = find_user(&state.db, id)
        .await?
        .ok_or_else(|| BackendError::not_found(format!("user {}", id)))?;

    let form = match UpdateUserForm::validate(&raw) {
        Ok(form) => form,
        Err(errors) => {
            tracing::debug!("Update form for user {} rejected: {}", id, errors);
            let page = Page::new("update.html")
                .status(StatusCode::UNPROCESSABLE_ENTITY)
                .with("user", &user)
                .form(&UpdateUserForm::SCHEMA, &raw, Some(&errors));
            return Ok(page.render(&state.templates)?);
        }
    };

    let changes = UserChanges {
        name: Some(form.name),
        email: Some(form.email),
        favorite_color: form.favorite_color,
    };

    let page = match update_user(&state.db, id, &changes).await {
        Ok(updated) => Page::new("update.html")
            .flash(FlashMessage::success(USER_UPDATED))
            .form(&UpdateUserForm::SCHEMA, &prefill(&updated), None)
            .with("user", &updated),
        Err(StoreError::NotFound) => {
            return Err(BackendError::not_found(format!("user {}", id)));
        }
        Err(e) => {
            let status = match &e {
                StoreError::Conflict { field } => {
                    tracing::warn!("Update of user {} rejected, {} already taken", id, field);
                    StatusCode::CONFLICT
                }
                _ => {
                    tracing::error!("Failed to update user {}: {}", id, e);
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            Page::new("update.html")
                .status(status)
                .flash(FlashMessage::error(SAVE_FAILED))
                .form(&UpdateUserForm::SCHEMA, &raw, None)
                .with("user", &user)
        }
    };
    Ok(page.render(&state.templates)?)
}

/// Delete a user and show the remaining list
pub async fn delete_user_handler(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Response, BackendError> {
    let page = match delete_user(&state.db, id).await {
        Ok(deleted) => {
            tracing::info!("User deleted: {} ({})", deleted.name, deleted.email);
            user_list_page(&state)
                .await?
                .flash(FlashMessage::success(USER_DELETED))
        }
        Err(StoreError::NotFound) => {
            return Err(BackendError::not_found(format!("user {}", id)));
        }
        Err(e) => {
            tracing::error!("Failed to delete user {}: {}", id, e);
            user_list_page(&state)
                .await?
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .flash(FlashMessage::error(USER_DELETE_FAILED))
        }
    };
    let page = page.form(&UserForm::SCHEMA, &HashMap::new(), None);
    Ok(page.render(&state.templates)?)
}

/// Show the credential test form
pub async fn test_password_form(State(state): State<AppState>) -> Result<Response, BackendError> {
    let page = Page::new("test_password.html").form(&PasswordForm::SCHEMA, &HashMap::new(), None);
    Ok(page.render(&state.templates)?)
}

/// Check an email/password pair against the stored hash
pub async fn test_password(
    State(state): State<AppState>,
    axum::Form(raw): Submission,
) -> Result<Response, BackendError> {
    let form = match PasswordForm::validate(&raw) {
        Ok(form) => form,
        Err(errors) => {
            let page = Page::new("test_password.html")
                .status(StatusCode::UNPROCESSABLE_ENTITY)
                .form(&PasswordForm::SCHEMA, &raw, Some(&errors));
            return Ok(page.render(&state.templates)?);
        }
    };

    let page = Page::new("test_password.html")
        .form(&PasswordForm::SCHEMA, &HashMap::new(), None)
        .with("email", &form.email);

    let page = match find_user_by_email(&state.db, &form.email).await? {
        Some(user) => {
            let passed = user.verify_password(&form.password);
            tracing::info!("Password check for {}: passed={}", user.email, passed);
            page.with("user", &user).with("passed", passed)
        }
        None => {
            tracing::info!("Password check for unknown email {}", form.email);
            page.with("passed", false)
                .flash(FlashMessage::error(NO_USER_FOUND))
        }
    };
    Ok(page.render(&state.templates)?)
}

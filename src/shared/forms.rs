//! Form Definitions
//!
//! One typed struct per HTML form, each backed by a static schema.

use crate::shared::validation::{Field, Form, FormSchema, FormValues, Rule};

/// Add-user form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub favorite_color: Option<String>,
    pub password: String,
}

impl Form for UserForm {
    const SCHEMA: FormSchema = FormSchema::new(&[
        Field::text("name", &[Rule::Required, Rule::MaxLength(200)]),
        Field::text("email", &[Rule::Required, Rule::MaxLength(120)]),
        Field::text("favorite_color", &[Rule::MaxLength(120)]),
        Field::secret(
            "password",
            &[Rule::Required, Rule::MinLength(8), Rule::EqualTo("password_confirm")],
        ),
        Field::secret("password_confirm", &[Rule::Required]),
    ]);

    fn from_values(values: FormValues) -> Self {
        Self {
            name: values.required("name"),
            email: values.required("email"),
            favorite_color: values.optional("favorite_color"),
            password: values.required("password"),
        }
    }
}

/// Update-user form
///
/// `favorite_color` is `None` when the key was not submitted, and
/// `Some(None)` when it was submitted blank (clears the stored value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserForm {
    pub name: String,
    pub email: String,
    pub favorite_color: Option<Option<String>>,
}

impl Form for UpdateUserForm {
    const SCHEMA: FormSchema = FormSchema::new(&[
        Field::text("name", &[Rule::Required, Rule::MaxLength(200)]),
        Field::text("email", &[Rule::Required, Rule::MaxLength(120)]),
        Field::text("favorite_color", &[Rule::MaxLength(120)]),
    ]);

    fn from_values(values: FormValues) -> Self {
        let favorite_color = values
            .submitted("favorite_color")
            .then(|| values.optional("favorite_color"));
        Self {
            name: values.required("name"),
            email: values.required("email"),
            favorite_color,
        }
    }
}

/// "What's your name" form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameForm {
    pub name: String,
}

impl Form for NameForm {
    const SCHEMA: FormSchema = FormSchema::new(&[Field::text("name", &[Rule::Required])]);

    fn from_values(values: FormValues) -> Self {
        Self {
            name: values.required("name"),
        }
    }
}

/// Credential test form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordForm {
    pub email: String,
    pub password: String,
}

impl Form for PasswordForm {
    const SCHEMA: FormSchema = FormSchema::new(&[
        Field::text("email", &[Rule::Required]),
        Field::secret("password", &[Rule::Required]),
    ]);

    fn from_values(values: FormValues) -> Self {
        Self {
            email: values.required("email"),
            password: values.required("password"),
        }
    }
}

/// Blog post form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub author: String,
    pub slug: String,
}

impl Form for PostForm {
    const SCHEMA: FormSchema = FormSchema::new(&[
        Field::text("title", &[Rule::Required, Rule::MaxLength(255)]),
        Field::text("content", &[Rule::Required]),
        Field::text("author", &[Rule::Required, Rule::MaxLength(255)]),
        Field::text("slug", &[Rule::Required, Rule::MaxLength(255)]),
    ]);

    fn from_values(values: FormValues) -> Self {
        Self {
            title: values.required("title"),
            content: values.required("content"),
            author: values.required("author"),
            slug: values.required("slug"),
        }
    }
}

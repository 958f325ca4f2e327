//! Client-side validation for the login, register and task forms.
//!
//! Validation only trims and checks presence; the API stays the authority on
//! what it accepts.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use thiserror::Error;

use crate::net::error::ApiError;
use crate::net::types::{Credentials, NewTask, Registration};

pub const CREATE_TASK_FALLBACK: &str = "Failed to create task";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Passwords do not match")]
    PasswordMismatch,
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() { Err(FormError::Required(field)) } else { Ok(value.to_owned()) }
}

/// Build login credentials. The password is taken verbatim.
///
/// # Errors
///
/// Returns `FormError::Required` for a blank username or empty password.
pub fn credentials(username: &str, password: &str) -> Result<Credentials, FormError> {
    let username = required(username, "Username")?;
    if password.is_empty() {
        return Err(FormError::Required("Password"));
    }
    Ok(Credentials { username, password: password.to_owned() })
}

/// Check a registration form before it is sent.
///
/// # Errors
///
/// Returns the first missing field, or `PasswordMismatch`.
pub fn registration(form: &Registration) -> Result<Registration, FormError> {
    let username = required(&form.username, "Username")?;
    let email = required(&form.email, "Email")?;
    if form.password.is_empty() {
        return Err(FormError::Required("Password"));
    }
    if form.password != form.confirm_password {
        return Err(FormError::PasswordMismatch);
    }
    Ok(Registration {
        username,
        email,
        password: form.password.clone(),
        confirm_password: form.confirm_password.clone(),
        first_name: form.first_name.trim().to_owned(),
        last_name: form.last_name.trim().to_owned(),
    })
}

/// Build a create-task body assigned to `assignee_id`.
///
/// # Errors
///
/// Returns `FormError::Required` for a blank title, description or due date.
pub fn new_task(title: &str, description: &str, due_date: &str, assignee_id: i64) -> Result<NewTask, FormError> {
    Ok(NewTask {
        title: required(title, "Title")?,
        description: required(description, "Description")?,
        due_date: required(due_date, "Due date")?,
        assignee_id,
    })
}

/// Message shown under the task form when creation fails.
pub fn create_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Unavailable => CREATE_TASK_FALLBACK.to_owned(),
        other => format!("{CREATE_TASK_FALLBACK}: {other}"),
    }
}

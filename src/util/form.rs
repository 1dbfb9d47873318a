//! Input validation for the sign-in and register forms.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::{RegisterRequest, SignInRequest};

pub const MIN_PASSWORD_LEN: usize = 8;

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

/// Trim and check sign-in fields.
///
/// # Errors
///
/// Returns the message to show under the form.
pub fn validate_sign_in(email: &str, password: &str) -> Result<SignInRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    Ok(SignInRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Trim and check register fields.
///
/// # Errors
///
/// Returns the message to show under the form.
pub fn validate_register(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in every field.");
    }
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(RegisterRequest { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

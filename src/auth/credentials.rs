//! Login and signup form checks
//!
//! There is exactly one account: the test credential below. Signup only
//! validates its fields and then points the user at that account.

use std::collections::BTreeMap;
use std::fmt;

use secrecy::{ExposeSecret, SecretBox};

pub const TEST_EMAIL: &str = "test@user.com";
pub const TEST_PASSWORD: &str = "password123";

/// Minimum password length, counted in characters
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AuthField {
    FullName,
    Email,
    Password,
    ConfirmPassword,
}

impl AuthField {
    pub fn label(&self) -> &'static str {
        match self {
            AuthField::FullName => "Full Name",
            AuthField::Email => "Email Address",
            AuthField::Password => "Password",
            AuthField::ConfirmPassword => "Confirm Password",
        }
    }

    /// Field name used in JSON output
    pub fn key(&self) -> &'static str {
        match self {
            AuthField::FullName => "full_name",
            AuthField::Email => "email",
            AuthField::Password => "password",
            AuthField::ConfirmPassword => "confirm_password",
        }
    }
}

impl fmt::Display for AuthField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One message per failing field
pub type AuthErrors = BTreeMap<AuthField, &'static str>;

fn secret(value: impl Into<String>) -> SecretBox<String> {
    SecretBox::new(Box::new(value.into()))
}

fn looks_like_email(email: &str) -> bool {
    email.contains('@')
}

fn long_enough(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

#[derive(Debug)]
pub struct LoginForm {
    pub email: String,
    password: SecretBox<String>,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: secret(password),
        }
    }

    /// Format checks first; the credential comparison only runs when they pass.
    ///
    /// A credential mismatch is reported on the email field with one generic
    /// message so the caller can't tell which half was wrong.
    pub fn validate(&self) -> AuthErrors {
        let mut errors = AuthErrors::new();
        let password = self.password.expose_secret();

        if !looks_like_email(&self.email) {
            errors.insert(AuthField::Email, "Please enter a valid email address.");
        }
        if !long_enough(password) {
            errors.insert(
                AuthField::Password,
                "Password must be at least 8 characters.",
            );
        }

        if errors.is_empty() && (self.email != TEST_EMAIL || password != TEST_PASSWORD) {
            tracing::debug!("Login rejected for '{}'", self.email);
            errors.insert(AuthField::Email, "Invalid email or password.");
        }
        errors
    }
}

#[derive(Debug)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    password: SecretBox<String>,
    confirm_password: SecretBox<String>,
}

impl SignupForm {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            password: secret(password),
            confirm_password: secret(confirm_password),
        }
    }

    pub fn validate(&self) -> AuthErrors {
        let mut errors = AuthErrors::new();
        let password = self.password.expose_secret();

        if self.full_name.is_empty() {
            errors.insert(AuthField::FullName, "Full Name is required");
        }
        if !looks_like_email(&self.email) {
            errors.insert(AuthField::Email, "Please enter a valid email address");
        }
        if !long_enough(password) {
            errors.insert(
                AuthField::Password,
                "Password must be at least 8 characters long.",
            );
        }
        if password != self.confirm_password.expose_secret() {
            errors.insert(AuthField::ConfirmPassword, "Passwords do not match.");
        }
        errors
    }
}

//! Credential Form State
//!
//! Login/signup input values and which of the two forms is shown.

use crate::models::{LoginRequest, SignupRequest};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Login,
    Signup,
}

impl FormMode {
    pub fn toggled(self) -> Self {
        match self {
            FormMode::Login => FormMode::Signup,
            FormMode::Signup => FormMode::Login,
        }
    }

    /// Label of the nav button that switches to the other form
    pub fn toggle_label(self) -> &'static str {
        match self {
            FormMode::Login => "Signup",
            FormMode::Signup => "Login",
        }
    }
}

/// Input field of the credential form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
    Email,
}

/// Field values survive mode switches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CredentialForm {
    pub mode: FormMode,
    pub username: String,
    pub password: String,
    pub email: String,
}

impl CredentialForm {
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Username => self.username = value,
            Field::Password => self.password = value,
            Field::Email => self.email = value,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Password => &self.password,
            Field::Email => &self.email,
        }
    }

    pub fn login_request(&self) -> LoginRequest {
        LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }

    pub fn signup_request(&self) -> SignupRequest {
        SignupRequest {
            email: self.email.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_label_follows_mode() {
        let mut form = CredentialForm::default();
        assert_eq!(form.mode, FormMode::Login);
        assert_eq!(form.mode.toggle_label(), "Signup");

        form.toggle_mode();
        assert_eq!(form.mode, FormMode::Signup);
        assert_eq!(form.mode.toggle_label(), "Login");

        form.toggle_mode();
        assert_eq!(form.mode, FormMode::Login);
    }

    #[test]
    fn test_fields_persist_across_toggle() {
        let mut form = CredentialForm::default();
        form.set(Field::Username, "ann".to_string());
        form.set(Field::Password, "secret".to_string());
        form.toggle_mode();
        form.set(Field::Email, "ann@example.com".to_string());
        form.toggle_mode();

        assert_eq!(form.value(Field::Username), "ann");
        assert_eq!(form.value(Field::Email), "ann@example.com");
        assert_eq!(
            form.login_request(),
            LoginRequest { username: "ann".to_string(), password: "secret".to_string() }
        );
        assert_eq!(form.signup_request().email, "ann@example.com");
    }
}

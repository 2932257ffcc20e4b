// SPDX-License-Identifier: MPL-2.0
//! Form state for the back-office pages.
//!
//! Each form keeps its raw field values as typed, validates on submit and
//! reports an [`Event`] to the caller, the same way the sidebar component
//! reports events instead of mutating the app directly.

use super::mock::{parse_amount, NewSale, NewUser, Role, SaleStatus};
use thiserror::Error;

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Outcome of feeding a message to a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<T> {
    None,
    Submitted(T),
    Cancelled,
}

/// Validation errors collected on the last submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Errors(Vec<FieldError>);

impl Errors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push(FieldError { field, message });
    }

    fn require(&mut self, field: &'static str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.push(field, "Required");
            false
        } else {
            true
        }
    }

    fn require_email(&mut self, field: &'static str, value: &str) {
        if self.require(field, value) && !is_valid_email(value) {
            self.push(field, "Enter a valid email address");
        }
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Errors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// Loose address check: one `@`, a local part, and a dotted domain.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// `YYYY-MM-DD` with a plausible month and day.
fn is_valid_date(value: &str) -> bool {
    let parts: Vec<&str> = value.trim().split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return false;
    };
    let digits = |part: &str, len: usize| part.len() == len && part.bytes().all(|b| b.is_ascii_digit());
    if !(digits(year, 4) && digits(month, 2) && digits(day, 2)) {
        return false;
    }
    matches!(month.parse::<u8>(), Ok(1..=12)) && matches!(day.parse::<u8>(), Ok(1..=31))
}

fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

// =============================================================================
// New user
// =============================================================================

#[derive(Debug, Clone)]
pub enum UserFormMessage {
    NameChanged(String),
    EmailChanged(String),
    RoleSelected(Role),
    PermissionsChanged(String),
    Save,
    Cancel,
}

/// The "New user" page: name, email, role and permissions.
#[derive(Debug, Clone, Default)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
    pub permissions: String,
    errors: Errors,
}

impl UserForm {
    #[must_use]
    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    /// Blank permissions fall back to the role's defaults.
    pub fn validate(&self) -> Result<NewUser, Errors> {
        let mut errors = Errors::default();
        errors.require("Name", &self.name);
        errors.require_email("Email", &self.email);
        if self.role.is_none() {
            errors.push("Role", "Select a role");
        }
        let Some(role) = self.role else {
            return Err(errors);
        };
        errors.into_result(|| NewUser {
            name: trimmed(&self.name),
            email: trimmed(&self.email),
            role,
            permissions: if self.permissions.trim().is_empty() {
                role.default_permissions().to_string()
            } else {
                trimmed(&self.permissions)
            },
        })
    }

    pub fn update(&mut self, message: UserFormMessage) -> Event<NewUser> {
        match message {
            UserFormMessage::NameChanged(value) => self.name = value,
            UserFormMessage::EmailChanged(value) => self.email = value,
            UserFormMessage::RoleSelected(role) => self.role = Some(role),
            UserFormMessage::PermissionsChanged(value) => self.permissions = value,
            UserFormMessage::Save => return self.submit(),
            UserFormMessage::Cancel => return Event::Cancelled,
        }
        Event::None
    }

    fn submit(&mut self) -> Event<NewUser> {
        match self.validate() {
            Ok(user) => {
                self.errors = Errors::default();
                Event::Submitted(user)
            }
            Err(errors) => {
                self.errors = errors;
                Event::None
            }
        }
    }
}

// =============================================================================
// New sale
// =============================================================================

#[derive(Debug, Clone)]
pub enum SaleFormMessage {
    CustomerChanged(String),
    DateChanged(String),
    AmountChanged(String),
    StatusSelected(SaleStatus),
    Save,
    Cancel,
}

/// The "New sale" modal.
#[derive(Debug, Clone)]
pub struct SaleForm {
    pub customer: String,
    pub date: String,
    pub amount: String,
    pub status: SaleStatus,
    errors: Errors,
}

impl Default for SaleForm {
    fn default() -> Self {
        Self {
            customer: String::new(),
            date: String::new(),
            amount: String::new(),
            status: SaleStatus::Pending,
            errors: Errors::default(),
        }
    }
}

impl SaleForm {
    #[must_use]
    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    pub fn validate(&self) -> Result<NewSale, Errors> {
        let mut errors = Errors::default();
        errors.require("Customer", &self.customer);
        if errors.require("Date", &self.date) && !is_valid_date(&self.date) {
            errors.push("Date", "Use YYYY-MM-DD");
        }
        let amount_cents = if errors.require("Amount", &self.amount) {
            let parsed = parse_amount(&self.amount);
            if parsed.is_none() {
                errors.push("Amount", "Enter an amount such as 120.50");
            }
            parsed
        } else {
            None
        };
        let Some(amount_cents) = amount_cents else {
            return Err(errors);
        };
        errors.into_result(|| NewSale {
            customer: trimmed(&self.customer),
            date: trimmed(&self.date),
            amount_cents,
            status: self.status,
        })
    }

    pub fn update(&mut self, message: SaleFormMessage) -> Event<NewSale> {
        match message {
            SaleFormMessage::CustomerChanged(value) => self.customer = value,
            SaleFormMessage::DateChanged(value) => self.date = value,
            SaleFormMessage::AmountChanged(value) => self.amount = value,
            SaleFormMessage::StatusSelected(status) => self.status = status,
            SaleFormMessage::Save => match self.validate() {
                Ok(sale) => {
                    self.errors = Errors::default();
                    return Event::Submitted(sale);
                }
                Err(errors) => self.errors = errors,
            },
            SaleFormMessage::Cancel => return Event::Cancelled,
        }
        Event::None
    }
}

// =============================================================================
// Authentication
// =============================================================================

#[derive(Debug, Clone)]
pub enum LoginMessage {
    UsernameChanged(String),
    PasswordChanged(String),
    Submit,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    errors: Errors,
}

impl LoginForm {
    /// Starts with the username filled in, e.g. right after registering.
    #[must_use]
    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    /// Yields the username to sign in with.
    pub fn update(&mut self, message: LoginMessage) -> Event<String> {
        match message {
            LoginMessage::UsernameChanged(value) => self.username = value,
            LoginMessage::PasswordChanged(value) => self.password = value,
            LoginMessage::Submit => {
                let mut errors = Errors::default();
                errors.require("Username", &self.username);
                errors.require("Password", &self.password);
                match errors.into_result(|| trimmed(&self.username)) {
                    Ok(username) => {
                        self.errors = Errors::default();
                        self.password.clear();
                        return Event::Submitted(username);
                    }
                    Err(errors) => self.errors = errors,
                }
            }
        }
        Event::None
    }
}

#[derive(Debug, Clone)]
pub enum RegisterMessage {
    UsernameChanged(String),
    NameChanged(String),
    PasswordChanged(String),
    ConfirmPasswordChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    IdNumberChanged(String),
    AddressChanged(String),
    Submit,
}

/// A newly registered account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub name: String,
    pub email: String,
}

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    pub name: String,
    pub password: String,
    pub confirm_password: String,
    pub email: String,
    pub phone: String,
    pub id_number: String,
    pub address: String,
    errors: Errors,
}

impl RegisterForm {
    #[must_use]
    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    pub fn validate(&self) -> Result<Account, Errors> {
        let mut errors = Errors::default();
        errors.require("Username", &self.username);
        errors.require("Name", &self.name);
        if errors.require("Password", &self.password)
            && self.password.chars().count() < MIN_PASSWORD_LEN
        {
            errors.push("Password", "Use at least 8 characters");
        }
        if self.confirm_password != self.password {
            errors.push("Confirm password", "Passwords do not match");
        }
        errors.require_email("Email", &self.email);
        errors.require("Phone", &self.phone);
        errors.require("ID", &self.id_number);
        errors.require("Address", &self.address);
        errors.into_result(|| Account {
            username: trimmed(&self.username),
            name: trimmed(&self.name),
            email: trimmed(&self.email),
        })
    }

    pub fn update(&mut self, message: RegisterMessage) -> Event<Account> {
        match message {
            RegisterMessage::UsernameChanged(value) => self.username = value,
            RegisterMessage::NameChanged(value) => self.name = value,
            RegisterMessage::PasswordChanged(value) => self.password = value,
            RegisterMessage::ConfirmPasswordChanged(value) => self.confirm_password = value,
            RegisterMessage::EmailChanged(value) => self.email = value,
            RegisterMessage::PhoneChanged(value) => self.phone = value,
            RegisterMessage::IdNumberChanged(value) => self.id_number = value,
            RegisterMessage::AddressChanged(value) => self.address = value,
            RegisterMessage::Submit => match self.validate() {
                Ok(account) => {
                    self.errors = Errors::default();
                    return Event::Submitted(account);
                }
                Err(errors) => self.errors = errors,
            },
        }
        Event::None
    }
}

#[derive(Debug, Clone)]
pub enum ForgotPasswordMessage {
    EmailChanged(String),
    Submit,
}

/// Password reset request. Once sent, the form is replaced by a confirmation.
#[derive(Debug, Clone, Default)]
pub struct ForgotPasswordForm {
    pub email: String,
    sent_to: Option<String>,
    errors: Errors,
}

impl ForgotPasswordForm {
    #[must_use]
    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    /// Address the reset instructions went to, once submitted.
    #[must_use]
    pub fn sent_to(&self) -> Option<&str> {
        self.sent_to.as_deref()
    }

    pub fn update(&mut self, message: ForgotPasswordMessage) -> Event<String> {
        match message {
            ForgotPasswordMessage::EmailChanged(value) => self.email = value,
            ForgotPasswordMessage::Submit => {
                let mut errors = Errors::default();
                errors.require_email("Email", &self.email);
                match errors.into_result(|| trimmed(&self.email)) {
                    Ok(email) => {
                        self.errors = Errors::default();
                        self.sent_to = Some(email.clone());
                        return Event::Submitted(email);
                    }
                    Err(errors) => self.errors = errors,
                }
            }
        }
        Event::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_user_form() -> UserForm {
        let mut form = UserForm::default();
        form.update(UserFormMessage::NameChanged("Test User".into()));
        form.update(UserFormMessage::EmailChanged("test@example.com".into()));
        form.update(UserFormMessage::RoleSelected(Role::Admin));
        form.update(UserFormMessage::PermissionsChanged("read,write".into()));
        form
    }

    fn filled_register_form() -> RegisterForm {
        RegisterForm {
            username: "newuser".into(),
            name: "New User".into(),
            password: "password123".into(),
            confirm_password: "password123".into(),
            email: "newuser@example.com".into(),
            phone: "555-0100".into(),
            id_number: "12345678".into(),
            address: "1 Main St".into(),
            ..RegisterForm::default()
        }
    }

    #[test]
    fn email_check_accepts_common_addresses() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email(" a.b@mail.example.org "));
        assert!(!is_valid_email("test"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("test@example"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("te st@example.com"));
    }

    #[test]
    fn date_check_requires_iso_format() {
        assert!(is_valid_date("2024-03-06"));
        assert!(!is_valid_date("06/03/2024"));
        assert!(!is_valid_date("2024-13-01"));
        assert!(!is_valid_date("2024-3-6"));
    }

    #[test]
    fn user_form_submits_trimmed_values() {
        let mut form = filled_user_form();
        form.name = "  Test User ".into();

        let event = form.update(UserFormMessage::Save);

        assert_eq!(
            event,
            Event::Submitted(NewUser {
                name: "Test User".into(),
                email: "test@example.com".into(),
                role: Role::Admin,
                permissions: "read,write".into(),
            })
        );
        assert!(form.errors().is_empty());
    }

    #[test]
    fn empty_user_form_reports_every_required_field() {
        let mut form = UserForm::default();

        assert_eq!(form.update(UserFormMessage::Save), Event::None);

        assert_eq!(form.errors().get("Name"), Some("Required"));
        assert_eq!(form.errors().get("Email"), Some("Required"));
        assert_eq!(form.errors().get("Role"), Some("Select a role"));
        assert_eq!(form.errors().get("Permissions"), None);
    }

    #[test]
    fn blank_permissions_use_role_defaults() {
        let mut form = filled_user_form();
        form.update(UserFormMessage::RoleSelected(Role::Guest));
        form.update(UserFormMessage::PermissionsChanged("   ".into()));

        let user = form.validate().expect("form is valid");
        assert_eq!(user.permissions, "read");
    }

    #[test]
    fn fixing_a_field_clears_errors_on_next_save() {
        let mut form = filled_user_form();
        form.update(UserFormMessage::EmailChanged("not-an-email".into()));
        form.update(UserFormMessage::Save);
        assert_eq!(
            form.errors().get("Email"),
            Some("Enter a valid email address")
        );

        form.update(UserFormMessage::EmailChanged("ok@example.com".into()));
        assert!(matches!(form.update(UserFormMessage::Save), Event::Submitted(_)));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn cancel_leaves_the_form_untouched() {
        let mut form = filled_user_form();
        assert_eq!(form.update(UserFormMessage::Cancel), Event::Cancelled);
        assert_eq!(form.name, "Test User");
    }

    #[test]
    fn sale_form_parses_amount_into_cents() {
        let mut form = SaleForm::default();
        form.update(SaleFormMessage::CustomerChanged("Lucía Ramos".into()));
        form.update(SaleFormMessage::DateChanged("2024-03-06".into()));
        form.update(SaleFormMessage::AmountChanged("$45.5".into()));
        form.update(SaleFormMessage::StatusSelected(SaleStatus::Completed));

        let event = form.update(SaleFormMessage::Save);

        assert_eq!(
            event,
            Event::Submitted(NewSale {
                customer: "Lucía Ramos".into(),
                date: "2024-03-06".into(),
                amount_cents: 4_550,
                status: SaleStatus::Completed,
            })
        );
    }

    #[test]
    fn sale_form_rejects_bad_amount_and_date() {
        let mut form = SaleForm {
            customer: "Someone".into(),
            date: "yesterday".into(),
            amount: "12,00".into(),
            ..SaleForm::default()
        };

        assert_eq!(form.update(SaleFormMessage::Save), Event::None);
        assert_eq!(form.errors().get("Date"), Some("Use YYYY-MM-DD"));
        assert_eq!(
            form.errors().get("Amount"),
            Some("Enter an amount such as 120.50")
        );
        assert_eq!(form.errors().get("Customer"), None);
    }

    #[test]
    fn login_requires_both_fields_and_clears_password() {
        let mut form = LoginForm::default();
        form.update(LoginMessage::UsernameChanged("admin".into()));
        assert_eq!(form.update(LoginMessage::Submit), Event::None);
        assert_eq!(form.errors().get("Password"), Some("Required"));

        form.update(LoginMessage::PasswordChanged("secret".into()));
        assert_eq!(
            form.update(LoginMessage::Submit),
            Event::Submitted("admin".to_string())
        );
        assert!(form.password.is_empty());
    }

    #[test]
    fn register_rejects_mismatched_passwords() {
        let mut form = filled_register_form();
        form.update(RegisterMessage::ConfirmPasswordChanged("different".into()));

        assert_eq!(form.update(RegisterMessage::Submit), Event::None);
        assert_eq!(
            form.errors().get("Confirm password"),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn register_rejects_short_password() {
        let mut form = filled_register_form();
        form.password = "short".into();
        form.confirm_password = "short".into();

        assert!(form.validate().is_err());
        assert_eq!(
            form.validate().err().and_then(|e| e.get("Password")),
            Some("Use at least 8 characters")
        );
    }

    #[test]
    fn complete_registration_yields_account() {
        let mut form = filled_register_form();
        assert_eq!(
            form.update(RegisterMessage::Submit),
            Event::Submitted(Account {
                username: "newuser".into(),
                name: "New User".into(),
                email: "newuser@example.com".into(),
            })
        );
    }

    #[test]
    fn forgot_password_remembers_where_it_sent_instructions() {
        let mut form = ForgotPasswordForm::default();
        form.update(ForgotPasswordMessage::EmailChanged("nope".into()));
        assert_eq!(form.update(ForgotPasswordMessage::Submit), Event::None);
        assert!(form.sent_to().is_none());

        form.update(ForgotPasswordMessage::EmailChanged("test@example.com".into()));
        assert_eq!(
            form.update(ForgotPasswordMessage::Submit),
            Event::Submitted("test@example.com".to_string())
        );
        assert_eq!(form.sent_to(), Some("test@example.com"));
    }

    #[test]
    fn field_error_displays_field_and_message() {
        let error = FieldError {
            field: "Email",
            message: "Required",
        };
        assert_eq!(error.to_string(), "Email: Required");
    }
}

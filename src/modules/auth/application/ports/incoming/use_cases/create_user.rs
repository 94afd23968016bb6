use async_trait::async_trait;
use email_address::EmailAddress;
use regex::Regex;
use std::sync::OnceLock;

use crate::auth::application::domain::entities::{Role, UserProfile};

pub const MIN_PASSWORD_LEN: usize = 6;
const MAX_PASSWORD_LEN: usize = 128;
const MAX_NAME_LEN: usize = 100;

fn username_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_.\-]{3,50}$").expect("valid username regex"))
}

//
// ──────────────────────────────────────────────────────────
// Create User Command
// ──────────────────────────────────────────────────────────
//

/// Raw account fields as received from a form.
#[derive(Debug, Clone, Default)]
pub struct CreateUserInput {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub specialization: Option<String>,
    pub experience_years: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    username: String,
    password: String,
    role: Role,
    name: String,
    email: String,
    phone: Option<String>,
    specialization: Option<String>,
    experience_years: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateUserCommandError {
    #[error("Username must be 3-50 characters of letters, digits, '.', '_' or '-'")]
    InvalidUsername,

    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,

    #[error("Password is too long")]
    PasswordTooLong,

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Specialization is required for doctors")]
    MissingSpecialization,

    #[error("Experience must be a non-negative number of years")]
    InvalidExperience,
}

impl CreateUserCommand {
    pub fn new(input: CreateUserInput, role: Role) -> Result<Self, CreateUserCommandError> {
        let username = input.username.trim();
        if !username_pattern().is_match(username) {
            return Err(CreateUserCommandError::InvalidUsername);
        }

        if input.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CreateUserCommandError::PasswordTooShort);
        }
        if input.password.len() > MAX_PASSWORD_LEN {
            return Err(CreateUserCommandError::PasswordTooLong);
        }

        let name = input.name.trim();
        if name.is_empty() {
            return Err(CreateUserCommandError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(CreateUserCommandError::NameTooLong);
        }

        let email = input.email.trim();
        if !EmailAddress::is_valid(email) {
            return Err(CreateUserCommandError::InvalidEmail);
        }

        if matches!(input.experience_years, Some(years) if years < 0) {
            return Err(CreateUserCommandError::InvalidExperience);
        }

        Ok(Self {
            username: username.to_string(),
            password: input.password,
            role,
            name: name.to_string(),
            email: email.to_lowercase(),
            phone: non_blank(input.phone),
            specialization: non_blank(input.specialization),
            experience_years: input.experience_years,
        })
    }

    /// Doctor accounts must state specialization and experience.
    pub fn new_doctor(input: CreateUserInput) -> Result<Self, CreateUserCommandError> {
        let command = Self::new(input, Role::Doctor)?;

        if command.specialization.is_none() {
            return Err(CreateUserCommandError::MissingSpecialization);
        }
        if command.experience_years.is_none() {
            return Err(CreateUserCommandError::InvalidExperience);
        }

        Ok(command)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&String> {
        self.phone.as_ref()
    }

    pub fn specialization(&self) -> Option<&String> {
        self.specialization.as_ref()
    }

    pub fn experience_years(&self) -> Option<i32> {
        self.experience_years
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error("Username or email already exists")]
    UserAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(&self, command: CreateUserCommand) -> Result<UserProfile, CreateUserError>;
}

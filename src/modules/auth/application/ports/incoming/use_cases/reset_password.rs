use async_trait::async_trait;

use super::create_user::MIN_PASSWORD_LEN;

//
// ──────────────────────────────────────────────────────────
// Reset Password Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ResetPasswordCommand {
    username: String,
    otp: String,
    new_password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResetPasswordCommandError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("OTP cannot be empty")]
    EmptyOtp,

    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
}

impl ResetPasswordCommand {
    pub fn new(
        username: String,
        otp: String,
        new_password: String,
    ) -> Result<Self, ResetPasswordCommandError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ResetPasswordCommandError::EmptyUsername);
        }

        let otp = otp.trim();
        if otp.is_empty() {
            return Err(ResetPasswordCommandError::EmptyOtp);
        }

        if new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ResetPasswordCommandError::PasswordTooShort);
        }

        Ok(Self {
            username: username.to_string(),
            otp: otp.to_string(),
            new_password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn otp(&self) -> &str {
        &self.otp
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("User not found")]
    UserNotFound,

    #[error("Invalid OTP")]
    InvalidOtp,

    #[error("OTP has expired")]
    OtpExpired,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ResetPasswordUseCase: Send + Sync {
    async fn execute(&self, command: ResetPasswordCommand) -> Result<(), ResetPasswordError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_fields() {
        assert_eq!(
            ResetPasswordCommand::new(" ".into(), "123456".into(), "secret1".into()).unwrap_err(),
            ResetPasswordCommandError::EmptyUsername
        );
        assert_eq!(
            ResetPasswordCommand::new("amy".into(), "".into(), "secret1".into()).unwrap_err(),
            ResetPasswordCommandError::EmptyOtp
        );
        assert_eq!(
            ResetPasswordCommand::new("amy".into(), "123456".into(), "abc".into()).unwrap_err(),
            ResetPasswordCommandError::PasswordTooShort
        );

        let cmd =
            ResetPasswordCommand::new(" amy ".into(), " 123456 ".into(), "secret1".into()).unwrap();
        assert_eq!(cmd.username(), "amy");
        assert_eq!(cmd.otp(), "123456");
    }
}

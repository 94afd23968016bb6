use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Password-reset code settings.
#[derive(Debug, Clone)]
pub struct OtpPolicy {
    pub ttl: Duration,
}

impl OtpPolicy {
    pub const DEFAULT_TTL_MINUTES: i64 = 10;
    pub const CODE_LEN: usize = 6;

    /// Reads `OTP_TTL_MINUTES`, falling back to 10 minutes.
    pub fn from_env() -> Self {
        let minutes = std::env::var("OTP_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|m| *m > 0)
            .unwrap_or(Self::DEFAULT_TTL_MINUTES);

        Self::new(Duration::minutes(minutes))
    }

    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    pub fn ttl_minutes(&self) -> i64 {
        self.ttl.num_minutes()
    }

    pub fn expires_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + self.ttl
    }

    pub fn generate_code(&self) -> String {
        let n: u32 = rand::thread_rng().gen_range(0..1_000_000);
        format!("{:06}", n)
    }
}

impl Default for OtpPolicy {
    fn default() -> Self {
        Self::new(Duration::minutes(Self::DEFAULT_TTL_MINUTES))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OtpCheckError {
    #[error("Invalid OTP")]
    Invalid,

    #[error("OTP has expired")]
    Expired,
}

/// Compares a submitted code against the one stored on the account.
pub fn check_otp(
    stored: Option<&str>,
    expires_at: Option<DateTime<Utc>>,
    submitted: &str,
    now: DateTime<Utc>,
) -> Result<(), OtpCheckError> {
    let stored = stored.ok_or(OtpCheckError::Invalid)?;

    if stored != submitted.trim() {
        return Err(OtpCheckError::Invalid);
    }

    match expires_at {
        Some(at) if at > now => Ok(()),
        _ => Err(OtpCheckError::Expired),
    }
}

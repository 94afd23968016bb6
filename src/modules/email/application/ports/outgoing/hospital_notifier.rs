use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone)]
pub struct AppointmentConfirmation {
    pub patient_email: String,
    pub patient_name: String,
    pub doctor_name: String,
    /// Slot start in clinic time
    pub date: DateTime<FixedOffset>,
    pub status: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum NotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[async_trait::async_trait]
pub trait HospitalNotifier: Send + Sync {
    async fn send_password_reset_otp(
        &self,
        to: &str,
        name: &str,
        otp: &str,
        ttl_minutes: i64,
    ) -> Result<(), NotificationError>;

    async fn send_appointment_confirmation(
        &self,
        confirmation: &AppointmentConfirmation,
    ) -> Result<(), NotificationError>;
}

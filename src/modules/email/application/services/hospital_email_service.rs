use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::email::application::ports::outgoing::{
    AppointmentConfirmation, EmailSender, HospitalNotifier, NotificationError,
};

/// Renders the hospital's transactional mails and hands them to an `EmailSender`.
#[derive(Clone)]
pub struct HospitalEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    hospital_name: String,
}

impl fmt::Debug for HospitalEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HospitalEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("hospital_name", &self.hospital_name)
            .finish()
    }
}

impl HospitalEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, hospital_name: &str) -> Self {
        Self {
            sender,
            hospital_name: hospital_name.to_string(),
        }
    }

    fn otp_body(&self, name: &str, otp: &str, ttl_minutes: i64) -> String {
        format!(
            r#"<p>Hello {name},</p>
<p>Your password reset code for {hospital} is:</p>
<h2 style="letter-spacing:4px">{otp}</h2>
<p>This code expires in {ttl_minutes} minutes. If you did not request a reset, ignore this email.</p>"#,
            name = escape_html(name),
            hospital = escape_html(&self.hospital_name),
            otp = otp,
            ttl_minutes = ttl_minutes,
        )
    }

    fn confirmation_body(&self, c: &AppointmentConfirmation) -> String {
        format!(
            r#"<p>Hello {patient},</p>
<p>Your appointment at {hospital} has been scheduled.</p>
<ul>
  <li><strong>Date:</strong> {date}</li>
  <li><strong>Doctor:</strong> {doctor}</li>
  <li><strong>Status:</strong> {status}</li>
</ul>"#,
            patient = escape_html(&c.patient_name),
            hospital = escape_html(&self.hospital_name),
            date = c.date.format("%A, %d %B %Y at %H:%M"),
            doctor = escape_html(&c.doctor_name),
            status = escape_html(&c.status),
        )
    }
}

#[async_trait]
impl HospitalNotifier for HospitalEmailService {
    async fn send_password_reset_otp(
        &self,
        to: &str,
        name: &str,
        otp: &str,
        ttl_minutes: i64,
    ) -> Result<(), NotificationError> {
        let subject = format!("{} password reset code", self.hospital_name);
        let body = self.otp_body(name, otp, ttl_minutes);

        self.sender
            .send_email(to, &subject, &body)
            .await
            .map_err(NotificationError::EmailSendingFailed)
    }

    async fn send_appointment_confirmation(
        &self,
        confirmation: &AppointmentConfirmation,
    ) -> Result<(), NotificationError> {
        let subject = "Appointment Confirmation";
        let body = self.confirmation_body(confirmation);

        self.sender
            .send_email(&confirmation.patient_email, subject, &body)
            .await
            .map_err(NotificationError::EmailSendingFailed)
    }
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use mockall::{mock, predicate::*};

    mock! {
        pub EmailSenderMock {}
        #[async_trait]
        impl EmailSender for EmailSenderMock {
            async fn send_email(&self, to: &str, subject: &str, html_body: &str) -> Result<(), String>;
        }
    }

    fn confirmation() -> AppointmentConfirmation {
        let offset = FixedOffset::east_opt(7 * 3600).unwrap();
        AppointmentConfirmation {
            patient_email: "pat@example.com".to_string(),
            patient_name: "Pat <script>".to_string(),
            doctor_name: "Dr. House".to_string(),
            date: offset.with_ymd_and_hms(2030, 1, 7, 10, 0, 0).unwrap(),
            status: "booked".to_string(),
        }
    }

    #[tokio::test]
    async fn otp_mail_contains_code_and_expiry() {
        let mut sender = MockEmailSenderMock::new();
        sender
            .expect_send_email()
            .with(
                eq("amy@example.com"),
                eq("City Hospital password reset code"),
                function(|body: &str| body.contains("482913") && body.contains("10 minutes")),
            )
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = HospitalEmailService::new(Arc::new(sender), "City Hospital");

        let result = service
            .send_password_reset_otp("amy@example.com", "Amy", "482913", 10)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn confirmation_mail_lists_date_doctor_and_status() {
        let mut sender = MockEmailSenderMock::new();
        sender
            .expect_send_email()
            .with(
                eq("pat@example.com"),
                eq("Appointment Confirmation"),
                function(|body: &str| {
                    body.contains("Monday, 07 January 2030 at 10:00")
                        && body.contains("Dr. House")
                        && body.contains("booked")
                        && body.contains("Pat &lt;script&gt;")
                }),
            )
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = HospitalEmailService::new(Arc::new(sender), "City Hospital");

        let result = service.send_appointment_confirmation(&confirmation()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn transport_error_is_wrapped() {
        let mut sender = MockEmailSenderMock::new();
        sender
            .expect_send_email()
            .returning(|_, _, _| Err("connection refused".to_string()));

        let service = HospitalEmailService::new(Arc::new(sender), "City Hospital");

        let result = service.send_appointment_confirmation(&confirmation()).await;

        match result {
            Err(NotificationError::EmailSendingFailed(msg)) => {
                assert!(msg.contains("connection refused"))
            }
            other => panic!("Expected EmailSendingFailed, got {:?}", other),
        }
    }

    #[test]
    fn debug_hides_sender() {
        let service =
            HospitalEmailService::new(Arc::new(MockEmailSenderMock::new()), "City Hospital");
        let debug_output = format!("{:?}", service);
        assert!(debug_output.contains("<dyn EmailSender>"));
        assert!(debug_output.contains("City Hospital"));
    }
}

use std::sync::Arc;
use std::time::Duration;

use crate::appointment::application::domain::entities::AppointmentView;
use crate::appointment::application::domain::slot_policy::SlotPolicy;
use crate::appointment::application::ports::incoming::use_cases::{
    BookAppointmentCommand, BookAppointmentError, BookAppointmentUseCase,
};
use crate::email::application::ports::outgoing::{AppointmentConfirmation, HospitalNotifier};

// ============================================================================
// Confirmation retry settings
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    /// Delay before retry `n` is `base_delay * 2^n`
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

// ============================================================================
// Appointment Booking (Orchestration Layer)
// ============================================================================

/// Books a slot, then mails the patient a confirmation in the background.
/// A failed mail never fails the booking.
#[derive(Clone)]
pub struct AppointmentBookingOrchestrator {
    book_use_case: Arc<dyn BookAppointmentUseCase + Send + Sync>,
    notifier: Arc<dyn HospitalNotifier + Send + Sync>,
    policy: SlotPolicy,
    retry: RetryPolicy,
}

impl AppointmentBookingOrchestrator {
    pub fn new(
        book_use_case: Arc<dyn BookAppointmentUseCase + Send + Sync>,
        notifier: Arc<dyn HospitalNotifier + Send + Sync>,
        policy: SlotPolicy,
    ) -> Self {
        Self {
            book_use_case,
            notifier,
            policy,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub async fn book(
        &self,
        command: BookAppointmentCommand,
    ) -> Result<AppointmentView, BookAppointmentError> {
        let booked = self.book_use_case.execute(command).await?;

        if let Some(confirmation) = self.confirmation_for(&booked) {
            self.spawn_confirmation(confirmation);
        }

        Ok(booked)
    }

    fn confirmation_for(&self, booked: &AppointmentView) -> Option<AppointmentConfirmation> {
        let patient = booked.patient.as_ref()?;
        let doctor = booked.doctor.as_ref()?;

        Some(AppointmentConfirmation {
            patient_email: patient.email.clone(),
            patient_name: patient.name.clone(),
            doctor_name: doctor.name.clone(),
            date: self.policy.to_clinic_time(booked.appointment.date),
            status: booked.appointment.status.to_string(),
        })
    }

    fn spawn_confirmation(&self, confirmation: AppointmentConfirmation) {
        let notifier = self.notifier.clone();
        let retry = self.retry;

        tokio::spawn(async move {
            let max_attempts = retry.max_attempts.max(1);
            for attempt in 1..=max_attempts {
                match notifier.send_appointment_confirmation(&confirmation).await {
                    Ok(()) => return,
                    Err(e) if attempt < max_attempts => {
                        tracing::warn!(
                            "Confirmation attempt {}/{} to {} failed: {}. Retrying...",
                            attempt,
                            max_attempts,
                            confirmation.patient_email,
                            e
                        );
                        tokio::time::sleep(retry.base_delay * 2_u32.pow(attempt)).await;
                    }
                    Err(e) => {
                        tracing::error!(
                            "All {} confirmation attempts to {} failed: {}",
                            max_attempts,
                            confirmation.patient_email,
                            e
                        );
                    }
                }
            }
        });
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserSummary;

// ──────────────────────────────────────────────────────────
// Status
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Booked,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Booked => "booked",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    /// Statuses that hold a doctor's slot.
    pub fn active() -> &'static [AppointmentStatus] {
        &[
            AppointmentStatus::Pending,
            AppointmentStatus::Booked,
            AppointmentStatus::Completed,
        ]
    }

    /// Statuses that may still be cancelled or closed.
    pub fn open() -> &'static [AppointmentStatus] {
        &[AppointmentStatus::Pending, AppointmentStatus::Booked]
    }

    pub fn is_open(&self) -> bool {
        Self::open().contains(self)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown appointment status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for AppointmentStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AppointmentStatus::Pending),
            "booked" => Ok(AppointmentStatus::Booked),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

// ──────────────────────────────────────────────────────────
// Feedback
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Feedback {
    #[schema(minimum = 1, maximum = 5, example = 5)]
    pub rating: u8,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Rating must be between 1 and 5")]
pub struct InvalidRating;

impl Feedback {
    pub fn new(rating: i64, comment: Option<String>) -> Result<Self, InvalidRating> {
        if !(1..=5).contains(&rating) {
            return Err(InvalidRating);
        }

        let comment = comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(Self {
            rating: rating as u8,
            comment,
        })
    }
}

// ──────────────────────────────────────────────────────────
// Appointment
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    /// Slot start
    pub date: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub feedback: Option<Feedback>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    pub fn can_cancel(&self) -> bool {
        self.status.is_open()
    }

    pub fn can_close(&self) -> bool {
        self.can_cancel()
    }
}

/// Appointment with the names of the people involved, as listed to clients.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AppointmentView {
    #[serde(flatten)]
    pub appointment: Appointment,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<UserSummary>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor: Option<UserSummary>,
}

impl AppointmentView {
    pub fn bare(appointment: Appointment) -> Self {
        Self {
            appointment,
            patient: None,
            doctor: None,
        }
    }
}

/// One row of a doctor's patient list.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DoctorPatient {
    #[serde(flatten)]
    pub patient: UserSummary,
    pub visit_count: u64,
    pub last_visit: DateTime<Utc>,
}

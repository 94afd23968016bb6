use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserSummary;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MedicalRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub appointment_id: Option<Uuid>,
    pub date: DateTime<Utc>,
    pub diagnosis: String,
    pub symptoms: Option<String>,
    pub medications: Vec<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A record about to be written, either when closing an appointment or
/// when a doctor files one directly.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMedicalRecord {
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub appointment_id: Option<Uuid>,
    pub date: DateTime<Utc>,
    pub diagnosis: String,
    pub symptoms: Option<String>,
    pub medications: Vec<String>,
    pub notes: Option<String>,
}

/// Record as shown in a patient's history: the authoring doctor attached.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MedicalRecordView {
    #[serde(flatten)]
    pub record: MedicalRecord,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor: Option<UserSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_flattens_record_fields() {
        let now = Utc::now();
        let doctor_id = Uuid::new_v4();
        let view = MedicalRecordView {
            record: MedicalRecord {
                id: Uuid::new_v4(),
                patient_id: Uuid::new_v4(),
                doctor_id,
                appointment_id: None,
                date: now,
                diagnosis: "Flu".to_string(),
                symptoms: Some("Fever".to_string()),
                medications: vec!["Paracetamol".to_string()],
                notes: None,
                created_at: now,
            },
            doctor: Some(UserSummary {
                id: doctor_id,
                name: "Dr. Grey".to_string(),
                email: "grey@example.com".to_string(),
                phone: None,
            }),
        };

        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["diagnosis"], "Flu");
        assert_eq!(json["medications"][0], "Paracetamol");
        assert_eq!(json["doctor"]["name"], "Dr. Grey");
    }
}

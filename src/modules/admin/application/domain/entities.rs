use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct HospitalStats {
    pub total_patients: u64,
    pub total_doctors: u64,
    pub total_appointments: u64,
}

/// Workload counters of one doctor. Only booked and completed
/// appointments count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct DoctorWorkload {
    pub appointments_today: u64,
    pub total_appointments: u64,
    pub patients_today: u64,
    pub total_patients: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DoctorWithStats {
    #[serde(flatten)]
    pub profile: UserProfile,

    #[serde(flatten)]
    pub workload: DoctorWorkload,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PatientDetail {
    #[serde(flatten)]
    pub profile: UserProfile,

    pub appointment_count: u64,
    pub medical_record_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn doctor_with_stats_is_flat() {
        let doctor = DoctorWithStats {
            profile: UserProfile {
                id: Uuid::new_v4(),
                username: "house".to_string(),
                role: Role::Doctor,
                name: "Gregory House".to_string(),
                email: "house@example.com".to_string(),
                phone: None,
                specialization: Some("Diagnostics".to_string()),
                experience_years: Some(20),
                created_at: Utc::now(),
            },
            workload: DoctorWorkload {
                appointments_today: 2,
                total_appointments: 9,
                patients_today: 2,
                total_patients: 5,
            },
        };

        let json = serde_json::to_value(&doctor).unwrap();

        assert_eq!(json["name"], "Gregory House");
        assert_eq!(json["appointments_today"], 2);
        assert_eq!(json["total_patients"], 5);
        assert!(json.get("workload").is_none());
    }
}

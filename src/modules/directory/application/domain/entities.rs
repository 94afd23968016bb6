use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserProfile;

/// A doctor as listed to signed-in users.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DoctorListing {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub specialization: Option<String>,
    pub experience_years: Option<i32>,
}

/// The reduced listing served without authentication.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DoctorContact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<UserProfile> for DoctorListing {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            email: profile.email,
            phone: profile.phone,
            specialization: profile.specialization,
            experience_years: profile.experience_years,
        }
    }
}

impl From<DoctorListing> for DoctorContact {
    fn from(listing: DoctorListing) -> Self {
        Self {
            id: listing.id,
            name: listing.name,
            email: listing.email,
        }
    }
}

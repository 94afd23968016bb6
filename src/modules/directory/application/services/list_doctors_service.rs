use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::directory::application::domain::entities::DoctorListing;
use crate::directory::application::ports::incoming::use_cases::{
    ListDoctorsError, ListDoctorsUseCase,
};

pub struct ListDoctorsService {
    user_query: Arc<dyn UserQuery>,
}

impl ListDoctorsService {
    pub fn new(user_query: Arc<dyn UserQuery>) -> Self {
        Self { user_query }
    }
}

#[async_trait]
impl ListDoctorsUseCase for ListDoctorsService {
    async fn execute(&self) -> Result<Vec<DoctorListing>, ListDoctorsError> {
        let doctors = self
            .user_query
            .list_users(Some(Role::Doctor))
            .await
            .map_err(|e| ListDoctorsError::RepositoryError(e.to_string()))?;

        Ok(doctors
            .iter()
            .map(|d| DoctorListing::from(d.to_profile()))
            .collect())
    }
}

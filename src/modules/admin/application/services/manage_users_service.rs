use async_trait::async_trait;
use std::sync::Arc;

use crate::admin::application::ports::incoming::use_cases::{
    DeleteUserError, DeleteUserUseCase, ListUsersError, ListUsersUseCase,
};
use crate::appointment::application::ports::outgoing::AppointmentQuery;
use crate::auth::application::domain::entities::{Role, UserId, UserProfile};
use crate::auth::application::ports::outgoing::{UserQuery, UserRepository, UserRepositoryError};

pub struct ListUsersService {
    user_query: Arc<dyn UserQuery>,
}

impl ListUsersService {
    pub fn new(user_query: Arc<dyn UserQuery>) -> Self {
        Self { user_query }
    }
}

#[async_trait]
impl ListUsersUseCase for ListUsersService {
    async fn execute(&self, role: Option<Role>) -> Result<Vec<UserProfile>, ListUsersError> {
        let users = self
            .user_query
            .list_users(role)
            .await
            .map_err(|e| ListUsersError::RepositoryError(e.to_string()))?;

        Ok(users.iter().map(|u| u.to_profile()).collect())
    }
}

pub struct DeleteUserService {
    user_query: Arc<dyn UserQuery>,
    user_repository: Arc<dyn UserRepository>,
    appointment_query: Arc<dyn AppointmentQuery>,
}

impl DeleteUserService {
    pub fn new(
        user_query: Arc<dyn UserQuery>,
        user_repository: Arc<dyn UserRepository>,
        appointment_query: Arc<dyn AppointmentQuery>,
    ) -> Self {
        Self {
            user_query,
            user_repository,
            appointment_query,
        }
    }
}

#[async_trait]
impl DeleteUserUseCase for DeleteUserService {
    async fn execute(&self, user_id: UserId, role: Option<Role>) -> Result<(), DeleteUserError> {
        let user = self
            .user_query
            .find_by_id(user_id)
            .await
            .map_err(|e| DeleteUserError::RepositoryError(e.to_string()))?
            .ok_or(DeleteUserError::NotFound)?;

        if role.is_some_and(|r| r != user.role) {
            return Err(DeleteUserError::NotFound);
        }

        if role == Some(Role::Doctor) {
            let referenced = self
                .appointment_query
                .count_for_doctor(user_id.value(), &[])
                .await
                .map_err(|e| DeleteUserError::RepositoryError(e.to_string()))?;

            if referenced > 0 {
                return Err(DeleteUserError::DoctorHasAppointments);
            }
        }

        self.user_repository
            .delete_user(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => DeleteUserError::NotFound,
                other => DeleteUserError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(%user_id, role = %user.role, "Account deleted");

        Ok(())
    }
}

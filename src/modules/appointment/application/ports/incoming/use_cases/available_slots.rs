use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AvailableSlotsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetAvailableSlotsUseCase: Send + Sync {
    async fn execute(
        &self,
        doctor_id: UserId,
        day: NaiveDate,
    ) -> Result<Vec<DateTime<Utc>>, AvailableSlotsError>;
}

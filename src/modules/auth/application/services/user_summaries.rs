use std::collections::HashMap;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserSummary;
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError};

/// Name/email lookup for the people referenced by a batch of rows, loaded
/// with a single query.
#[derive(Debug, Default)]
pub struct UserSummaries(HashMap<Uuid, UserSummary>);

impl UserSummaries {
    pub async fn load<I>(users: &dyn UserQuery, ids: I) -> Result<Self, UserQueryError>
    where
        I: IntoIterator<Item = Uuid>,
    {
        let mut ids: Vec<Uuid> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();

        let found = users.find_many(ids).await?;

        Ok(Self(
            found
                .into_iter()
                .map(|u| (u.id, u.to_summary()))
                .collect(),
        ))
    }

    pub fn get(&self, id: Uuid) -> Option<UserSummary> {
        self.0.get(&id).cloned()
    }
}

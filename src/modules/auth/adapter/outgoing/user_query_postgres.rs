use super::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel,
};
use crate::auth::application::domain::entities::{Role, UserId};
use crate::auth::application::ports::outgoing::user_query::{
    UserQuery, UserQueryError, UserQueryResult,
};
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_one(model: Option<UserModel>) -> Result<Option<UserQueryResult>, UserQueryError> {
        model
            .map(|m| m.to_query_result().map_err(UserQueryError::CorruptedRow))
            .transpose()
    }

    fn map_many(models: Vec<UserModel>) -> Result<Vec<UserQueryResult>, UserQueryError> {
        models
            .into_iter()
            .map(|m| m.to_query_result().map_err(UserQueryError::CorruptedRow))
            .collect()
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Self::map_one(user)
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Self::map_one(user)
    }

    async fn find_by_username_and_role(
        &self,
        username: &str,
        role: Role,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .filter(UserColumn::Role.eq(role.as_str()))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Self::map_one(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Self::map_one(user)
    }

    async fn list_users(&self, role: Option<Role>) -> Result<Vec<UserQueryResult>, UserQueryError> {
        let mut query = UserEntity::find();
        if let Some(role) = role {
            query = query.filter(UserColumn::Role.eq(role.as_str()));
        }

        let users = query
            .order_by_asc(UserColumn::Name)
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Self::map_many(users)
    }

    async fn find_many(&self, ids: Vec<Uuid>) -> Result<Vec<UserQueryResult>, UserQueryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = UserEntity::find()
            .filter(UserColumn::Id.is_in(ids))
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Self::map_many(users)
    }

    async fn count_by_role(&self, role: Role) -> Result<u64, UserQueryError> {
        UserEntity::find()
            .filter(UserColumn::Role.eq(role.as_str()))
            .count(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))
    }
}

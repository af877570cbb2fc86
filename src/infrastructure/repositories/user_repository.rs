//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, IntoActiveModel,
    ModelTrait, Order, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::{Acronym, DomainError, User, UserField, UserRepository};
use crate::models::acronym::{self, Entity as AcronymEntity};
use crate::models::user::{ActiveModel, Column, Entity as UserEntity, Model};

/// SeaORM-based implementation of UserRepository
pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn column(field: UserField) -> Column {
    match field {
        UserField::Name => Column::Name,
        UserField::Username => Column::Username,
    }
}

// UUID keys are random, so insertion order comes from SQLite's rowid
fn storage_order() -> SimpleExpr {
    Expr::cust("rowid")
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let new_user = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(user.name),
            username: Set(user.username),
        };

        let result = new_user.insert(&self.db).await?;
        tracing::info!("Created user {} ({})", result.id, result.username);

        Ok(result.into())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = UserEntity::find()
            .order_by_asc(storage_order())
            .all(&self.db)
            .await?;

        Ok(users.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<User, DomainError> {
        UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(User::from)
            .ok_or(DomainError::NotFound)
    }

    async fn update(&self, id: Uuid, user: User) -> Result<User, DomainError> {
        let existing = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active = existing.into_active_model();
        active.name = Set(user.name);
        active.username = Set(user.username);

        let result = active.update(&self.db).await?;
        tracing::debug!("Updated user {}", result.id);

        Ok(result.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let user = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let owned = AcronymEntity::find()
            .filter(acronym::Column::UserId.eq(id))
            .count(&self.db)
            .await?;

        if owned > 0 {
            return Err(DomainError::Conflict(format!(
                "user {} still owns {} acronym(s)",
                id, owned
            )));
        }

        user.delete(&self.db).await?;
        tracing::info!("Deleted user {}", id);

        Ok(())
    }

    async fn filter_eq(&self, field: UserField, value: &str) -> Result<Vec<User>, DomainError> {
        let users = UserEntity::find()
            .filter(column(field).eq(value))
            .order_by_asc(storage_order())
            .all(&self.db)
            .await?;

        Ok(users.into_iter().map(User::from).collect())
    }

    async fn filter_eq_any(
        &self,
        first: (UserField, &str),
        second: (UserField, &str),
    ) -> Result<Vec<User>, DomainError> {
        let cond = Condition::any()
            .add(column(first.0).eq(first.1))
            .add(column(second.0).eq(second.1));

        let users = UserEntity::find()
            .filter(cond)
            .order_by_asc(storage_order())
            .all(&self.db)
            .await?;

        Ok(users.into_iter().map(User::from).collect())
    }

    async fn first(&self) -> Result<Option<User>, DomainError> {
        let user = UserEntity::find()
            .order_by_asc(storage_order())
            .one(&self.db)
            .await?;

        Ok(user.map(User::from))
    }

    async fn sorted_by(&self, field: UserField, ascending: bool) -> Result<Vec<User>, DomainError> {
        let order = if ascending { Order::Asc } else { Order::Desc };

        let users = UserEntity::find()
            .order_by(column(field), order)
            .order_by_asc(storage_order())
            .all(&self.db)
            .await?;

        Ok(users.into_iter().map(User::from).collect())
    }

    async fn find_acronyms(&self, user: &User) -> Result<Vec<Acronym>, DomainError> {
        let id = user.id.ok_or(DomainError::NotFound)?;
        let owner = Model {
            id,
            name: user.name.clone(),
            username: user.username.clone(),
        };

        let acronyms = owner
            .find_related(AcronymEntity)
            .order_by_asc(acronym::Column::Id)
            .all(&self.db)
            .await?;

        Ok(acronyms.into_iter().map(Acronym::from).collect())
    }
}

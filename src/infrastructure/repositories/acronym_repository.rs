//! SeaORM implementation of AcronymRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, IntoActiveModel,
    Order, QueryFilter, QueryOrder, Set,
};

use crate::domain::{Acronym, AcronymField, AcronymRepository, DomainError, User};
use crate::models::acronym::{ActiveModel, Column, Entity as AcronymEntity};
use crate::models::user::Entity as UserEntity;

/// SeaORM-based implementation of AcronymRepository
pub struct SeaOrmAcronymRepository {
    db: DatabaseConnection,
}

impl SeaOrmAcronymRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn column(field: AcronymField) -> Column {
    match field {
        AcronymField::Short => Column::Short,
        AcronymField::Long => Column::Long,
    }
}

#[async_trait]
impl AcronymRepository for SeaOrmAcronymRepository {
    async fn create(&self, acronym: Acronym) -> Result<Acronym, DomainError> {
        let new_acronym = ActiveModel {
            short: Set(acronym.short),
            long: Set(acronym.long),
            user_id: Set(acronym.user_id),
            ..Default::default()
        };

        let result = new_acronym.insert(&self.db).await?;
        tracing::info!("Created acronym {} ({})", result.id, result.short);

        Ok(result.into())
    }

    async fn find_all(&self) -> Result<Vec<Acronym>, DomainError> {
        let acronyms = AcronymEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(acronyms.into_iter().map(Acronym::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Acronym, DomainError> {
        AcronymEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Acronym::from)
            .ok_or(DomainError::NotFound)
    }

    async fn update(&self, id: i32, acronym: Acronym) -> Result<Acronym, DomainError> {
        let existing = AcronymEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active = existing.into_active_model();
        active.short = Set(acronym.short);
        active.long = Set(acronym.long);
        active.user_id = Set(acronym.user_id);

        let result = active.update(&self.db).await?;
        tracing::debug!("Updated acronym {}", result.id);

        Ok(result.into())
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = AcronymEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        tracing::info!("Deleted acronym {}", id);
        Ok(())
    }

    async fn filter_eq(
        &self,
        field: AcronymField,
        value: &str,
    ) -> Result<Vec<Acronym>, DomainError> {
        let acronyms = AcronymEntity::find()
            .filter(column(field).eq(value))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(acronyms.into_iter().map(Acronym::from).collect())
    }

    async fn filter_eq_any(
        &self,
        first: (AcronymField, &str),
        second: (AcronymField, &str),
    ) -> Result<Vec<Acronym>, DomainError> {
        let cond = Condition::any()
            .add(column(first.0).eq(first.1))
            .add(column(second.0).eq(second.1));

        let acronyms = AcronymEntity::find()
            .filter(cond)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(acronyms.into_iter().map(Acronym::from).collect())
    }

    async fn first(&self) -> Result<Option<Acronym>, DomainError> {
        let acronym = AcronymEntity::find()
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await?;

        Ok(acronym.map(Acronym::from))
    }

    async fn sorted_by(
        &self,
        field: AcronymField,
        ascending: bool,
    ) -> Result<Vec<Acronym>, DomainError> {
        let order = if ascending { Order::Asc } else { Order::Desc };

        let acronyms = AcronymEntity::find()
            .order_by(column(field), order)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(acronyms.into_iter().map(Acronym::from).collect())
    }

    async fn find_user(&self, acronym: &Acronym) -> Result<User, DomainError> {
        UserEntity::find_by_id(acronym.user_id)
            .one(&self.db)
            .await?
            .map(User::from)
            .ok_or(DomainError::NotFound)
    }
}

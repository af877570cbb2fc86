use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "acronyms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub short: String,
    pub long: String,
    /// Owning user. Deleting a user that still owns acronyms is restricted.
    pub user_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for domain::Acronym {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            short: model.short,
            long: model.long,
            user_id: model.user_id,
        }
    }
}

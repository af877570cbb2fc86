use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub username: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::acronym::Entity")]
    Acronym,
}

impl Related<super::acronym::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Acronym.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for domain::User {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            username: model.username,
        }
    }
}

//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub platform: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    // Kept as loose text on purpose: the store does not enforce a date
    // format, the projections do the parsing.
    pub publish_date: Option<String>,
    pub status: String,
    pub tags: String,
    pub series_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for postdeck_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            platform: model.platform,
            title: model.title,
            description: model.description,
            publish_date: model.publish_date,
            status: model.status,
            tags: model.tags,
            series_id: model.series_id,
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<postdeck_core::domain::Post> for ActiveModel {
    fn from(post: postdeck_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            platform: Set(post.platform),
            title: Set(post.title),
            description: Set(post.description),
            publish_date: Set(post.publish_date),
            status: Set(post.status),
            tags: Set(post.tags),
            series_id: Set(post.series_id),
        }
    }
}

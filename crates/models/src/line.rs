use sea_orm::{entity::prelude::*, QueryOrder, Set, DatabaseConnection, ActiveModelTrait, EntityTrait};
use serde::{Deserialize, Serialize};

use crate::errors;

pub const NAME_MAX_LEN: usize = 255;
pub const COLOR_MAX_LEN: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "line")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub color: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn validate_text(field: &str, value: &str, max: usize) -> Result<String, errors::ModelError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(errors::ModelError::Validation(format!("{field} must not be blank")));
    }
    if trimmed.chars().count() > max {
        return Err(errors::ModelError::Validation(format!("{field} must be at most {max} characters")));
    }
    Ok(trimmed.to_string())
}

/// Trimmed line name; rejects blank or over-long input.
pub fn validate_name(name: &str) -> Result<String, errors::ModelError> {
    validate_text("name", name, NAME_MAX_LEN)
}

/// Trimmed color token; rejects blank or over-long input.
pub fn validate_color(color: &str) -> Result<String, errors::ModelError> {
    validate_text("color", color, COLOR_MAX_LEN)
}

pub async fn create(db: &DatabaseConnection, name: &str, color: &str) -> Result<Model, errors::ModelError> {
    let name = validate_name(name)?;
    let color = validate_color(color)?;
    let am = ActiveModel {
        name: Set(name),
        color: Set(color),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Replace name and color; `Ok(None)` when no line has this id.
pub async fn update(db: &DatabaseConnection, id: i64, name: &str, color: &str) -> Result<Option<Model>, errors::ModelError> {
    let name = validate_name(name)?;
    let color = validate_color(color)?;
    let Some(existing) = find(db, id).await? else { return Ok(None); };
    let mut am: ActiveModel = existing.into();
    am.name = Set(name);
    am.color = Set(color);
    match am.update(db).await {
        Ok(updated) => Ok(Some(updated)),
        // deleted between the lookup and the write
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(errors::ModelError::Db(e.to_string())),
    }
}

/// Delete by id; returns whether a row was removed.
pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

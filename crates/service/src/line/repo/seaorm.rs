use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::line::domain::{Line, LineInput};
use crate::line::repository::LineRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmLineRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmLineRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl LineRepository for SeaOrmLineRepository {
    async fn list(&self) -> Result<Vec<Line>, ServiceError> {
        let rows = models::line::list(&self.db).await?;
        Ok(rows.into_iter().map(Line::from).collect())
    }

    async fn create(&self, input: LineInput) -> Result<Line, ServiceError> {
        let created = models::line::create(&self.db, &input.name, &input.color).await?;
        Ok(created.into())
    }

    async fn get(&self, id: i64) -> Result<Option<Line>, ServiceError> {
        Ok(models::line::find(&self.db, id).await?.map(Line::from))
    }

    async fn update(&self, id: i64, input: LineInput) -> Result<Option<Line>, ServiceError> {
        let updated = models::line::update(&self.db, id, &input.name, &input.color).await?;
        Ok(updated.map(Line::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(models::line::delete(&self.db, id).await?)
    }
}

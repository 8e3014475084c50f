use async_trait::async_trait;

use super::domain::{Line, LineInput};
use crate::errors::ServiceError;

/// Persistence for lines. Inputs reaching a repository are already validated.
#[async_trait]
pub trait LineRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Line>, ServiceError>;
    async fn create(&self, input: LineInput) -> Result<Line, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<Line>, ServiceError>;
    async fn update(&self, id: i64, input: LineInput) -> Result<Option<Line>, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

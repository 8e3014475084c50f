use std::sync::Arc;

use common::metrics::{LINES_CREATED_TOTAL, LINES_DELETED_TOTAL, LINES_UPDATED_TOTAL};
use tracing::{debug, info, instrument};

use super::domain::{Line, LineInput};
use super::repository::LineRepository;
use crate::errors::ServiceError;

/// Line business service independent of web framework and storage.
pub struct LineService<R: LineRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: LineRepository + ?Sized> Clone for LineService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: LineRepository + ?Sized> LineService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    fn validate(input: LineInput) -> Result<LineInput, ServiceError> {
        let name = models::line::validate_name(&input.name)?;
        let color = models::line::validate_color(&input.color)?;
        Ok(LineInput { name, color })
    }

    /// Create a line and assign it a fresh id.
    ///
    /// # Examples
    /// ```
    /// use service::line::{LineInput, LineService, repo::memory::InMemoryLineRepository};
    /// use std::sync::Arc;
    /// let svc = LineService::new(Arc::new(InMemoryLineRepository::new()));
    /// let line = tokio_test::block_on(svc.create(LineInput::new("신분당선", "bg-red-600"))).unwrap();
    /// assert_eq!(line.name, "신분당선");
    /// assert!(line.id > 0);
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name, color = %input.color))]
    pub async fn create(&self, input: LineInput) -> Result<Line, ServiceError> {
        let input = Self::validate(input)?;
        let line = self.repo.create(input).await?;
        LINES_CREATED_TOTAL.inc();
        info!(line_id = line.id, "line_created");
        Ok(line)
    }

    pub async fn list(&self) -> Result<Vec<Line>, ServiceError> {
        let lines = self.repo.list().await?;
        debug!(count = lines.len(), "lines_listed");
        Ok(lines)
    }

    pub async fn get(&self, id: i64) -> Result<Line, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::line_not_found(id))
    }

    /// Replace name and color of an existing line.
    ///
    /// # Examples
    /// ```
    /// use service::{errors::ServiceError, line::{LineInput, LineService, repo::memory::InMemoryLineRepository}};
    /// use std::sync::Arc;
    /// let svc = LineService::new(Arc::new(InMemoryLineRepository::new()));
    /// let missing = tokio_test::block_on(svc.update(7, LineInput::new("7호선", "bg-yellow-600")));
    /// assert!(matches!(missing, Err(ServiceError::NotFound(_))));
    /// ```
    #[instrument(skip(self, input), fields(line_id = id))]
    pub async fn update(&self, id: i64, input: LineInput) -> Result<Line, ServiceError> {
        let input = Self::validate(input)?;
        let line = self
            .repo
            .update(id, input)
            .await?
            .ok_or_else(|| ServiceError::line_not_found(id))?;
        LINES_UPDATED_TOTAL.inc();
        info!(name = %line.name, color = %line.color, "line_updated");
        Ok(line)
    }

    #[instrument(skip(self), fields(line_id = id))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::line_not_found(id));
        }
        LINES_DELETED_TOTAL.inc();
        info!("line_deleted");
        Ok(())
    }
}

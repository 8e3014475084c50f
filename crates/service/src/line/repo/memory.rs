use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::line::domain::{Line, LineInput};
use crate::line::repository::LineRepository;

struct State {
    lines: BTreeMap<i64, Line>,
    // last id handed out; never decremented so ids are not reused
    last_id: i64,
}

/// Process-local line store. Each instance is fully isolated.
pub struct InMemoryLineRepository {
    state: RwLock<State>,
}

impl InMemoryLineRepository {
    pub fn new() -> Self {
        Self { state: RwLock::new(State { lines: BTreeMap::new(), last_id: 0 }) }
    }
}

impl Default for InMemoryLineRepository {
    fn default() -> Self { Self::new() }
}

#[async_trait]
impl LineRepository for InMemoryLineRepository {
    async fn list(&self) -> Result<Vec<Line>, ServiceError> {
        let state = self.state.read().await;
        Ok(state.lines.values().cloned().collect())
    }

    async fn create(&self, input: LineInput) -> Result<Line, ServiceError> {
        let mut state = self.state.write().await;
        let id = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| ServiceError::Db("line id space exhausted".into()))?;
        state.last_id = id;
        let line = Line { id, name: input.name, color: input.color };
        state.lines.insert(id, line.clone());
        Ok(line)
    }

    async fn get(&self, id: i64) -> Result<Option<Line>, ServiceError> {
        let state = self.state.read().await;
        Ok(state.lines.get(&id).cloned())
    }

    async fn update(&self, id: i64, input: LineInput) -> Result<Option<Line>, ServiceError> {
        let mut state = self.state.write().await;
        let Some(existing) = state.lines.get_mut(&id) else { return Ok(None) };
        existing.name = input.name;
        existing.color = input.color;
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let mut state = self.state.write().await;
        Ok(state.lines.remove(&id).is_some())
    }
}

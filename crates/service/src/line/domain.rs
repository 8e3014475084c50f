use serde::{Deserialize, Serialize};

/// A transit line as exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub id: i64,
    pub name: String,
    pub color: String,
}

/// Create/update payload; `id` is always assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineInput {
    pub name: String,
    pub color: String,
}

impl LineInput {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self { name: name.into(), color: color.into() }
    }
}

impl From<models::line::Model> for Line {
    fn from(m: models::line::Model) -> Self {
        Self { id: m.id, name: m.name, color: m.color }
    }
}

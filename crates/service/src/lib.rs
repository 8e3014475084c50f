//! Service layer providing line CRUD on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.

pub mod errors;
pub mod line;
pub mod runtime;
#[cfg(test)]
pub mod test_support;

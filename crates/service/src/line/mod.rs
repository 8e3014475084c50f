//! Line module: three-layer architecture (domain, repository, service).
//!
//! `LineService` owns validation and existence rules; repositories only store.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use domain::{Line, LineInput};
pub use repository::LineRepository;
pub use service::LineService;

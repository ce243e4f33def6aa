pub mod catalog_loader;
pub mod config_service;
pub mod dto;
pub mod memory;
pub mod paths;
pub mod storage;
pub mod toml_history_repository;
pub mod toml_preference_repository;

pub use crate::catalog_loader::JsonCatalogLoader;
pub use crate::config_service::ConfigService;
pub use crate::memory::{InMemoryAnswerHistoryRepository, InMemoryPreferenceRepository};
pub use crate::paths::{MoodTripPaths, ServiceType};
pub use crate::toml_history_repository::TomlAnswerHistoryRepository;
pub use crate::toml_preference_repository::TomlPreferenceRepository;

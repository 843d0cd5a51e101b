mod app_config;
mod categories;
mod config;
mod pagination;
mod place;

use thiserror::Error;

pub use app_config::AppConfig;
pub use categories::{find_category, Category, TagPredicate, CATEGORIES};
pub use config::{load_app_config, load_app_config_from_env};
pub use pagination::{paginate, PaginationInfo};
pub use place::{Place, SearchResult};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

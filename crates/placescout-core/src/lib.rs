pub mod app_config;
pub mod config;
pub mod error;
pub mod listing;
pub mod query;
pub mod rank;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, CoreError};
pub use listing::{ListingDetail, ListingSummary, PageToken};
pub use query::SearchQuery;
pub use rank::{is_mobile_like_phone, rank, RankingPolicy};

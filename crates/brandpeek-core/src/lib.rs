pub mod app_config;
pub mod brands;
pub mod config;
pub mod detail;
pub mod error;
pub mod feed;
pub mod ranking;

pub use app_config::{AppConfig, Environment};
pub use brands::{BrandCatalog, BrandRecord, SocialMedia, SocialPresence};
pub use config::{load_app_config, load_app_config_from_env};
pub use detail::{find_ranked, BrandDetail};
pub use error::{CatalogError, ConfigError};
pub use feed::{Applied, BrandFeed, FeedState, RefreshTicket, LOAD_FAILURE_MESSAGE};
pub use ranking::{
    calculate_rank, current_year, rank_top_brands, rank_top_brands_at, RankedBrand, DEFAULT_LIMIT,
};

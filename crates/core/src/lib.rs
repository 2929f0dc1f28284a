pub mod catalog;
pub mod category;
pub mod config;
pub mod product;
pub mod snapshot;

pub use catalog::Catalog;
pub use category::{CategoryRule, CategorySuggester, FALLBACK_CATEGORY};
pub use config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat};
pub use product::Product;
pub use snapshot::{SnapshotError, SnapshotStore};

pub mod config;
pub mod router;

pub use config::{ConfigError, SiteConfig};
pub use router::build_router;

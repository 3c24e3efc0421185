pub mod loader;
pub mod schema;

pub use loader::{ConfigError, ConfigLoader};
pub use schema::{NluConfig, OmnibarConfig, OutputConfig, ServerConfig, TOKEN_ENV};

use crate::resolution::SiteTable;

impl OmnibarConfig {
    /// Builtin sites with the configured ones merged over them.
    pub fn site_table(&self) -> SiteTable {
        SiteTable::with_overrides(self.sites.iter().map(|(k, v)| (k, v.clone())))
    }
}

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use validator::Validate;

use crate::domain::error::Result;
use crate::domain::site::SiteUrl;

pub const CONFIG_FILE: &str = "intentemoslo.toml";
pub const ENV_PREFIX: &str = "INTENTEMOSLO_";
pub const APP_URL_ENV: &str = "NEXT_PUBLIC_APP_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    pub host: String,
    #[validate(range(min = 1))]
    pub port: u16,
    /// Public base URL used for the sitemap reference; blank means the production domain.
    #[validate(url)]
    pub app_url: Option<String>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            app_url: None,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, then `intentemoslo.toml`, then `INTENTEMOSLO_*`, then `NEXT_PUBLIC_APP_URL`.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Env::raw().only(&[APP_URL_ENV]).map(|_| "app_url".into()))
    }

    pub fn load() -> Result<Self> {
        if let Err(err) = dotenvy::dotenv() {
            debug!(error = %err, "No .env file loaded");
        }
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let mut config: AppConfig = figment.extract()?;
        if config
            .app_url
            .as_deref()
            .is_some_and(|url| url.trim().is_empty())
        {
            config.app_url = None;
        }
        config.validate().map_err(|err| {
            warn!(error = %err, "Invalid configuration");
            err
        })?;
        Ok(config)
    }

    pub fn site_url(&self) -> SiteUrl {
        SiteUrl::resolve(self.app_url.as_deref())
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

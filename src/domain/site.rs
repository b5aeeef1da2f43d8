pub const DEFAULT_APP_URL: &str = "https://www.intentemoslodenuevo.com";

/// Public base URL of the site, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrl(String);

impl SiteUrl {
    /// Uses `configured` when it is set and non-blank, otherwise the production domain.
    pub fn resolve(configured: Option<&str>) -> Self {
        let base = configured
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_APP_URL);
        Self(base.trim_end_matches('/').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl Default for SiteUrl {
    fn default() -> Self {
        Self::resolve(None)
    }
}

use std::fmt::Write as _;

use crate::domain::site::SiteUrl;

/// Operational paths kept out of search indexes.
pub const DISALLOWED_PREFIXES: [&str; 10] = [
    "/admin",
    "/api",
    "/checkout",
    "/processing",
    "/analyzing",
    "/pre-result",
    "/thank-you",
    "/result",
    "/health",
    "/components-check",
];

/// Pages listed in the sitemap.
pub const PUBLIC_PAGES: [&str; 2] = ["/", "/checklist"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsPolicy {
    pub user_agent: &'static str,
    pub allow: Vec<&'static str>,
    pub disallow: Vec<&'static str>,
    pub sitemap: String,
}

impl RobotsPolicy {
    pub fn for_site(site: &SiteUrl) -> Self {
        Self {
            user_agent: "*",
            allow: vec!["/"],
            disallow: DISALLOWED_PREFIXES.to_vec(),
            sitemap: site.join("sitemap.xml"),
        }
    }

    pub fn render(&self) -> String {
        let mut body = String::new();
        let _ = writeln!(body, "User-Agent: {}", self.user_agent);
        for path in &self.allow {
            let _ = writeln!(body, "Allow: {}", path);
        }
        for path in &self.disallow {
            let _ = writeln!(body, "Disallow: {}", path);
        }
        let _ = writeln!(body);
        let _ = writeln!(body, "Sitemap: {}", self.sitemap);
        body
    }
}

/// Absolute URLs of the pages listed in the sitemap.
pub fn sitemap_locations(site: &SiteUrl) -> Vec<String> {
    PUBLIC_PAGES
        .iter()
        .map(|page| {
            if *page == "/" {
                site.as_str().to_string()
            } else {
                site.join(page)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_site_robots() {
        let body = RobotsPolicy::for_site(&SiteUrl::resolve(None)).render();
        assert!(body.starts_with("User-Agent: *\nAllow: /\n"));
        assert!(body.contains("Sitemap: https://www.intentemoslodenuevo.com/sitemap.xml"));
    }

    #[test]
    fn test_disallows_exactly_the_listed_prefixes() {
        let body = RobotsPolicy::for_site(&SiteUrl::default()).render();
        let disallowed: Vec<&str> = body
            .lines()
            .filter_map(|line| line.strip_prefix("Disallow: "))
            .collect();
        assert_eq!(disallowed, DISALLOWED_PREFIXES.to_vec());
        assert_eq!(disallowed.len(), 10);
    }

    #[test]
    fn test_configured_base_url() {
        let site = SiteUrl::resolve(Some("https://staging.example.com/"));
        let policy = RobotsPolicy::for_site(&site);
        assert_eq!(policy.sitemap, "https://staging.example.com/sitemap.xml");
    }

    #[test]
    fn test_sitemap_lists_public_pages() {
        assert_eq!(
            sitemap_locations(&SiteUrl::default()),
            vec![
                "https://www.intentemoslodenuevo.com".to_string(),
                "https://www.intentemoslodenuevo.com/checklist".to_string(),
            ]
        );
    }
}

use maud::{html, Markup, PreEscaped};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// `sitemap.xml` body listing `locations`. Each location is escaped.
pub fn sitemap(locations: &[String]) -> Markup {
    html! {
        (PreEscaped(XML_DECLARATION))
        urlset xmlns=(SITEMAP_NAMESPACE) {
            @for location in locations {
                url { loc { (location) } }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_each_location() {
        let xml = sitemap(&[
            "https://www.intentemoslodenuevo.com".to_string(),
            "https://www.intentemoslodenuevo.com/checklist".to_string(),
        ])
        .into_string();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?><urlset xmlns="#));
        assert!(xml.contains("<url><loc>https://www.intentemoslodenuevo.com/checklist</loc></url>"));
        assert_eq!(xml.matches("<url>").count(), 2);
    }

    #[test]
    fn test_locations_are_escaped() {
        let xml = sitemap(&["https://example.com/?a=1&b=<2>".to_string()]).into_string();
        assert!(xml.contains("<loc>https://example.com/?a=1&amp;b=&lt;2&gt;</loc>"));
    }
}

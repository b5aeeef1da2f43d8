use maud::{html, Markup, DOCTYPE};

use super::logo::{logo, LogoProps, LogoSize};

pub const STYLESHEET_PATH: &str = "/theme.css";

#[derive(Debug, Clone, Default)]
pub struct PageProps {
    pub title: String,
    pub description: Option<String>,
    /// Adds `noindex` for operational pages.
    pub noindex: bool,
}

/// Full HTML document with the shared header. `head` is appended to the
/// document head, e.g. a refresh meta.
pub fn page(props: PageProps, head: Markup, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (props.title) " | Intentémoslo de nuevo" }
                @if let Some(description) = &props.description {
                    meta name="description" content=(description);
                }
                link rel="stylesheet" href=(STYLESHEET_PATH);
                @if props.noindex {
                    meta name="robots" content="noindex";
                }
                (head)
            }
            body {
                main class="page" {
                    header {
                        (logo(LogoProps {
                            size: LogoSize::Sm,
                            href: Some("/".to_string()),
                        }))
                    }
                    (body)
                }
            }
        }
    }
}

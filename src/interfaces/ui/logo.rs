use maud::{html, Markup};

use super::class_names;

const BRAND_LABEL: &str = "Intentémoslo de nuevo";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogoSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Debug, Clone, Default)]
pub struct LogoProps {
    pub size: LogoSize,
    pub href: Option<String>,
}

pub fn logo(props: LogoProps) -> Markup {
    let classes = class_names(&[
        ("logo", true),
        ("logo-sm", props.size == LogoSize::Sm),
        ("logo-md", props.size == LogoSize::Md),
        ("logo-lg", props.size == LogoSize::Lg),
    ]);
    let wordmark = html! {
        "Intentémoslo"
        span class="logo-accent" { " de nuevo" }
    };

    match props.href {
        Some(href) => html! {
            a class=(classes) href=(href) aria-label=(BRAND_LABEL) { (wordmark) }
        },
        None => html! {
            span class=(classes) aria-label=(BRAND_LABEL) { (wordmark) }
        },
    }
}

use maud::{html, Markup};

use super::class_names;

#[derive(Debug, Clone, Default)]
pub struct GlassCardProps {
    pub hoverable: bool,
    pub extra_class: Option<String>,
}

pub fn glass_card(props: GlassCardProps, content: Markup) -> Markup {
    let extra = props.extra_class.unwrap_or_default();
    let classes = class_names(&[
        ("glass-card", true),
        ("glass-card-hover", props.hoverable),
        (extra.as_str(), true),
    ]);
    html! {
        div class=(classes) { (content) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_children() {
        let html = glass_card(GlassCardProps::default(), html! { "hola" }).into_string();
        assert_eq!(html, r#"<div class="glass-card">hola</div>"#);
    }

    #[test]
    fn test_hover_and_extra_classes() {
        let html = glass_card(
            GlassCardProps {
                hoverable: true,
                extra_class: Some("deep-summary".to_string()),
            },
            html! {},
        )
        .into_string();
        assert_eq!(
            html,
            r#"<div class="glass-card glass-card-hover deep-summary"></div>"#
        );
    }
}

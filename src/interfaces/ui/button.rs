use maud::{html, Markup};

use super::class_names;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Debug, Clone, Default)]
pub struct ButtonProps {
    pub label: String,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    /// Renders a link instead of a `<button>`.
    pub href: Option<String>,
    /// `button` or `submit`; ignored for links.
    pub kind: Option<&'static str>,
    pub full_width: bool,
    pub disabled: bool,
}

impl ButtonProps {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }
}

pub fn button(props: ButtonProps) -> Markup {
    let classes = class_names(&[
        ("btn", true),
        ("btn-primary", props.variant == ButtonVariant::Primary),
        ("btn-secondary", props.variant == ButtonVariant::Secondary),
        ("btn-ghost", props.variant == ButtonVariant::Ghost),
        ("btn-sm", props.size == ButtonSize::Sm),
        ("btn-md", props.size == ButtonSize::Md),
        ("btn-lg", props.size == ButtonSize::Lg),
        ("btn-block", props.full_width),
        ("btn-disabled", props.disabled),
    ]);

    match props.href {
        Some(href) if !props.disabled => html! {
            a class=(classes) href=(href) { (props.label) }
        },
        Some(_) => html! {
            a class=(classes) aria-disabled="true" { (props.label) }
        },
        None => html! {
            button class=(classes) type=(props.kind.unwrap_or("button")) disabled[props.disabled] {
                (props.label)
            }
        },
    }
}

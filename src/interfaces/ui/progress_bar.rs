use maud::{html, Markup};
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct ProgressBarProps {
    /// Percent, clamped to 100.
    pub value: u8,
    pub label: Option<String>,
    /// When set, the fill animates from `value` to 100 over this duration.
    pub animate_over: Option<Duration>,
}

pub fn progress_bar(props: ProgressBarProps) -> Markup {
    let value = props.value.min(100);
    let fill_style = match props.animate_over {
        Some(duration) => format!(
            "width: 100%; animation: progress-fill {}ms linear both;",
            duration.as_millis()
        ),
        None => format!("width: {}%;", value),
    };

    html! {
        div class="progress" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow=(value) {
            @if let Some(label) = props.label {
                span class="progress-label" { (label) }
            }
            div class="progress-track" {
                div class="progress-fill" style=(fill_style) {}
            }
        }
    }
}

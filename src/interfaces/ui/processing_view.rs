use maud::{html, Markup, PreEscaped};
use std::time::Duration;

use super::class_names;
use super::glass_card::{glass_card, GlassCardProps};
use super::progress_bar::{progress_bar, ProgressBarProps};
use crate::domain::processing::ProcessingFlow;

#[derive(Debug, Clone, Default)]
pub struct ProcessingViewProps {
    pub title: String,
    pub subtitle: Option<String>,
}

/// Staged loading card for `flow`. The inline script advances one stage per
/// [`ProcessingFlow::stage_interval`] and stops on the last one.
pub fn processing_view(flow: &ProcessingFlow, props: ProcessingViewProps) -> Markup {
    let active = flow.stage_at(Duration::ZERO);
    let script = format!(
        "(function () {{\n  var items = document.querySelectorAll('[data-stage]');\n  var current = {};\n  var timer = setInterval(function () {{\n    if (current >= items.length - 1) {{ clearInterval(timer); return; }}\n    items[current].classList.remove('stage-active');\n    items[current].classList.add('stage-done');\n    current += 1;\n    items[current].classList.add('stage-active');\n  }}, {});\n}})();",
        active,
        flow.stage_interval().as_millis()
    );

    html! {
        (glass_card(GlassCardProps::default(), html! {
            div {
                h1 { (props.title) }
                @if let Some(subtitle) = &props.subtitle {
                    p class="progress-label" { (subtitle) }
                }
            }
            (progress_bar(ProgressBarProps {
                value: flow.progress_at(Duration::ZERO),
                label: None,
                animate_over: Some(flow.duration),
            }))
            ul class="stage-list" aria-live="polite" {
                @for (index, stage) in flow.stages.iter().enumerate() {
                    li class=(class_names(&[("stage", true), ("stage-active", index == active)])) data-stage=(index) {
                        (stage)
                    }
                }
            }
        }))
        script { (PreEscaped(script)) }
    }
}

/// `<meta http-equiv="refresh">` that navigates to `destination` once `after` has elapsed.
pub fn redirect_meta(destination: &str, after: Duration) -> Markup {
    let seconds = after.as_millis() as f64 / 1000.0;
    html! {
        meta http-equiv="refresh" content=(format!("{};url={}", seconds, destination));
    }
}

use maud::{html, Markup};

use super::glass_card::{glass_card, GlassCardProps};
use crate::domain::markup::{parse_bold, Segment};

#[derive(Debug, Clone, Default)]
pub struct DeepSummaryProps {
    pub title: String,
    /// Paragraph text with optional `**bold**` spans.
    pub text: String,
}

pub fn summary_paragraph(text: &str) -> Markup {
    html! {
        p {
            @for segment in parse_bold(text) {
                @match segment {
                    Segment::Bold(bold) => { strong { (bold) } },
                    Segment::Plain(plain) => { (plain) },
                }
            }
        }
    }
}

pub fn deep_summary(props: DeepSummaryProps) -> Markup {
    let paragraphs = props
        .text
        .split("\n\n")
        .filter(|paragraph| !paragraph.trim().is_empty());

    glass_card(
        GlassCardProps {
            extra_class: Some("deep-summary".to_string()),
            ..Default::default()
        },
        html! {
            h2 { (props.title) }
            @for paragraph in paragraphs {
                (summary_paragraph(paragraph))
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_spans_render_as_strong() {
        assert_eq!(
            summary_paragraph("Your **risk score** is high").into_string(),
            "<p>Your <strong>risk score</strong> is high</p>"
        );
    }

    #[test]
    fn test_unmatched_marker_renders_literally() {
        assert_eq!(
            summary_paragraph("2 ** 3 <b>").into_string(),
            "<p>2 ** 3 &lt;b&gt;</p>"
        );
    }

    #[test]
    fn test_adjacent_and_edge_spans() {
        assert_eq!(
            summary_paragraph("**a****b**").into_string(),
            "<p><strong>a</strong><strong>b</strong></p>"
        );
    }

    #[test]
    fn test_paragraphs_and_title() {
        let html = deep_summary(DeepSummaryProps {
            title: "Tu resultado".to_string(),
            text: "Primero **uno**.\n\nDespués dos.".to_string(),
        })
        .into_string();
        assert!(html.starts_with(r#"<div class="glass-card deep-summary"><h2>Tu resultado</h2>"#));
        assert_eq!(html.matches("<p>").count(), 2);
        assert!(html.contains("<strong>uno</strong>"));
    }
}

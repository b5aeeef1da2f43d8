use maud::{html, Markup};

use super::class_names;

#[derive(Debug, Clone, Default)]
pub struct RadioCardProps {
    pub name: String,
    pub value: String,
    pub label: String,
    pub description: Option<String>,
    pub checked: bool,
    pub required: bool,
}

pub fn radio_card(props: RadioCardProps) -> Markup {
    let id = format!("{}-{}", props.name, props.value);
    let classes = class_names(&[("radio-card", true), ("radio-card-checked", props.checked)]);

    html! {
        label class=(classes) for=(id) {
            input type="radio" id=(id) name=(props.name) value=(props.value)
                checked[props.checked] required[props.required];
            span class="radio-card-text" {
                span class="radio-card-label" { (props.label) }
                @if let Some(description) = props.description {
                    span class="radio-card-description" { (description) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> RadioCardProps {
        RadioCardProps {
            name: "contacto".to_string(),
            value: "semanal".to_string(),
            label: "Una vez por semana".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_unchecked_card() {
        let html = radio_card(props()).into_string();
        assert_eq!(
            html,
            concat!(
                r#"<label class="radio-card" for="contacto-semanal">"#,
                r#"<input type="radio" id="contacto-semanal" name="contacto" value="semanal">"#,
                r#"<span class="radio-card-text"><span class="radio-card-label">Una vez por semana</span></span>"#,
                "</label>"
            )
        );
    }

    #[test]
    fn test_checked_card_with_description() {
        let html = radio_card(RadioCardProps {
            checked: true,
            required: true,
            description: Some("Aunque sea por mensaje".to_string()),
            ..props()
        })
        .into_string();
        assert!(html.contains(r#"class="radio-card radio-card-checked""#));
        assert!(html.contains(r#"value="semanal" checked required>"#));
        assert!(html.contains("Aunque sea por mensaje"));
    }
}

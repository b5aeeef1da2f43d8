use maud::{html, Markup};

#[derive(Debug, Clone)]
pub struct LinearScaleProps {
    pub name: String,
    pub min: u8,
    pub max: u8,
    pub min_caption: Option<String>,
    pub max_caption: Option<String>,
    pub selected: Option<u8>,
}

impl Default for LinearScaleProps {
    fn default() -> Self {
        Self {
            name: String::new(),
            min: 1,
            max: 5,
            min_caption: None,
            max_caption: None,
            selected: None,
        }
    }
}

pub fn linear_scale(props: LinearScaleProps) -> Markup {
    let (low, high) = if props.min <= props.max {
        (props.min, props.max)
    } else {
        (props.max, props.min)
    };
    let has_captions = props.min_caption.is_some() || props.max_caption.is_some();

    html! {
        div class="linear-scale" role="radiogroup" {
            div class="linear-scale-options" {
                @for value in low..=high {
                    @let id = format!("{}-{}", props.name, value);
                    label class="linear-scale-option" for=(id) {
                        input type="radio" id=(id) name=(props.name) value=(value)
                            checked[props.selected == Some(value)];
                        span { (value) }
                    }
                }
            }
            @if has_captions {
                div class="linear-scale-captions" {
                    span { (props.min_caption.as_deref().unwrap_or_default()) }
                    span { (props.max_caption.as_deref().unwrap_or_default()) }
                }
            }
        }
    }
}

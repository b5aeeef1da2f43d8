//! Server-side HTML primitives.
//!
//! Every primitive is a pure function from a props struct to a
//! [`maud::Markup`]. Text and attribute values go through maud's escaping;
//! only `PreEscaped` bypasses it and that is reserved for inline CSS and script.

pub mod button;
pub mod deep_summary;
pub mod glass_card;
pub mod layout;
pub mod linear_scale;
pub mod logo;
pub mod processing_view;
pub mod progress_bar;
pub mod radio_card;
pub mod sitemap;

/// Joins the classes whose condition holds, in order.
pub fn class_names(classes: &[(&str, bool)]) -> String {
    classes
        .iter()
        .filter(|(class, enabled)| *enabled && !class.is_empty())
        .map(|(class, _)| *class)
        .collect::<Vec<_>>()
        .join(" ")
}

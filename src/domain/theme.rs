//! Design tokens shared by every UI primitive.
//!
//! The palette, font stacks and keyframes are fixed at compile time. The
//! stylesheet built from them is what the component classes resolve against.

use once_cell::sync::Lazy;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorToken {
    pub name: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontToken {
    pub name: &'static str,
    pub stack: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyframes {
    pub name: &'static str,
    pub frames: &'static [(&'static str, &'static str)],
}

pub const PALETTE: &[ColorToken] = &[
    ColorToken { name: "background", value: "#0b1020" },
    ColorToken { name: "surface", value: "rgba(255, 255, 255, 0.06)" },
    ColorToken { name: "surface-strong", value: "rgba(255, 255, 255, 0.12)" },
    ColorToken { name: "border", value: "rgba(255, 255, 255, 0.14)" },
    ColorToken { name: "primary", value: "#ff5c8a" },
    ColorToken { name: "primary-strong", value: "#e63e70" },
    ColorToken { name: "accent", value: "#7c5cff" },
    ColorToken { name: "text", value: "#f5f7ff" },
    ColorToken { name: "muted", value: "#9aa3b2" },
    ColorToken { name: "success", value: "#34d399" },
    ColorToken { name: "danger", value: "#f87171" },
];

pub const FONTS: &[FontToken] = &[
    FontToken { name: "sans", stack: "\"Inter\", system-ui, -apple-system, sans-serif" },
    FontToken { name: "display", stack: "\"Playfair Display\", Georgia, serif" },
];

pub const KEYFRAMES: &[Keyframes] = &[
    Keyframes {
        name: "fade-in",
        frames: &[
            ("0%", "opacity: 0; transform: translateY(6px);"),
            ("100%", "opacity: 1; transform: translateY(0);"),
        ],
    },
    Keyframes {
        name: "pulse-soft",
        frames: &[
            ("0%, 100%", "opacity: 1;"),
            ("50%", "opacity: 0.55;"),
        ],
    },
    Keyframes {
        name: "progress-fill",
        frames: &[("0%", "width: 0%;"), ("100%", "width: 100%;")],
    },
];

const COMPONENT_RULES: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
body { margin: 0; min-height: 100vh; background: var(--color-background); color: var(--color-text); font-family: var(--font-sans); }
.page { max-width: 40rem; margin: 0 auto; padding: 2.5rem 1.25rem; display: flex; flex-direction: column; gap: 1.5rem; animation: fade-in 0.4s ease-out both; }
h1, h2, h3 { font-family: var(--font-display); margin: 0; }
.btn { display: inline-flex; align-items: center; justify-content: center; border: 1px solid transparent; border-radius: 999px; font-weight: 600; text-decoration: none; cursor: pointer; transition: background 0.2s ease, transform 0.2s ease; }
.btn:hover { transform: translateY(-1px); }
.btn-primary { background: var(--color-primary); color: var(--color-text); }
.btn-primary:hover { background: var(--color-primary-strong); }
.btn-secondary { background: var(--color-surface-strong); color: var(--color-text); border-color: var(--color-border); }
.btn-ghost { background: transparent; color: var(--color-muted); }
.btn-sm { padding: 0.4rem 0.9rem; font-size: 0.85rem; }
.btn-md { padding: 0.7rem 1.4rem; font-size: 1rem; }
.btn-lg { padding: 0.95rem 1.9rem; font-size: 1.1rem; }
.btn-block { width: 100%; }
.btn-disabled { opacity: 0.5; pointer-events: none; }
.glass-card { background: var(--color-surface); border: 1px solid var(--color-border); border-radius: 1.25rem; padding: 1.5rem; backdrop-filter: blur(14px); }
.glass-card-hover:hover { background: var(--color-surface-strong); }
.progress { display: flex; flex-direction: column; gap: 0.5rem; }
.progress-label { color: var(--color-muted); font-size: 0.9rem; }
.progress-track { height: 0.5rem; border-radius: 999px; background: var(--color-surface-strong); overflow: hidden; }
.progress-fill { height: 100%; background: linear-gradient(90deg, var(--color-primary), var(--color-accent)); }
.radio-card { display: flex; gap: 0.75rem; align-items: flex-start; padding: 1rem; border: 1px solid var(--color-border); border-radius: 1rem; background: var(--color-surface); cursor: pointer; }
.radio-card-checked { border-color: var(--color-primary); }
.radio-card-description { display: block; color: var(--color-muted); font-size: 0.85rem; }
.linear-scale { display: flex; flex-direction: column; gap: 0.5rem; }
.linear-scale-options { display: flex; justify-content: space-between; gap: 0.25rem; }
.linear-scale-option { display: flex; flex-direction: column; align-items: center; gap: 0.25rem; font-size: 0.85rem; }
.linear-scale-captions { display: flex; justify-content: space-between; color: var(--color-muted); font-size: 0.8rem; }
.logo { font-family: var(--font-display); font-weight: 700; letter-spacing: -0.02em; color: var(--color-text); text-decoration: none; }
.logo-accent { color: var(--color-primary); }
.logo-sm { font-size: 1rem; }
.logo-md { font-size: 1.5rem; }
.logo-lg { font-size: 2.25rem; }
.deep-summary p { line-height: 1.6; }
.deep-summary strong { color: var(--color-primary); }
.stage-list { list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 0.5rem; }
.stage { color: var(--color-muted); opacity: 0.4; }
.stage-active { color: var(--color-text); opacity: 1; animation: pulse-soft 1.2s ease-in-out infinite; }
.stage-done { opacity: 0.7; }
"#;

#[derive(Debug, Clone)]
pub struct Theme {
    pub palette: &'static [ColorToken],
    pub fonts: &'static [FontToken],
    pub keyframes: &'static [Keyframes],
}

pub const THEME: Theme = Theme {
    palette: PALETTE,
    fonts: FONTS,
    keyframes: KEYFRAMES,
};

/// Rendered once on first request.
static STYLESHEET: Lazy<String> = Lazy::new(|| THEME.render_stylesheet());

impl Theme {
    pub fn color(&self, name: &str) -> Option<&'static str> {
        self.palette
            .iter()
            .find(|token| token.name == name)
            .map(|token| token.value)
    }

    pub fn font(&self, name: &str) -> Option<&'static str> {
        self.fonts
            .iter()
            .find(|token| token.name == name)
            .map(|token| token.stack)
    }

    pub fn stylesheet(&self) -> &'static str {
        STYLESHEET.as_str()
    }

    fn render_stylesheet(&self) -> String {
        let mut css = String::from(":root {\n");
        for token in self.palette {
            let _ = writeln!(css, "  --color-{}: {};", token.name, token.value);
        }
        for token in self.fonts {
            let _ = writeln!(css, "  --font-{}: {};", token.name, token.stack);
        }
        css.push_str("}\n");

        for keyframes in self.keyframes {
            let _ = writeln!(css, "@keyframes {} {{", keyframes.name);
            for (selector, body) in keyframes.frames {
                let _ = writeln!(css, "  {} {{ {} }}", selector, body);
            }
            css.push_str("}\n");
        }

        css.push_str(COMPONENT_RULES.trim_start());
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_lookup() {
        assert_eq!(THEME.color("primary"), Some("#ff5c8a"));
        assert_eq!(THEME.color("missing"), None);
        assert!(THEME.font("display").unwrap().contains("Playfair Display"));
    }

    #[test]
    fn test_stylesheet_declares_tokens_and_keyframes() {
        let css = THEME.stylesheet();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--color-background: #0b1020;"));
        assert!(css.contains("--font-sans:"));
        for keyframes in KEYFRAMES {
            assert!(css.contains(&format!("@keyframes {} {{", keyframes.name)));
        }
        assert!(css.contains(".glass-card {"));
    }

    #[test]
    fn test_stylesheet_is_rendered_once() {
        assert!(std::ptr::eq(THEME.stylesheet(), THEME.stylesheet()));
        assert_eq!(THEME.stylesheet(), THEME.render_stylesheet());
    }

    #[test]
    fn test_component_rules_only_reference_declared_colors() {
        let css = THEME.stylesheet();
        for reference in css.split("var(--color-").skip(1) {
            let name = reference.split(')').next().unwrap();
            assert!(THEME.color(name).is_some(), "undeclared color token {}", name);
        }
    }
}

//! Named glyph icons

use dioxus::prelude::*;

/// Icons available to the section
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconName {
    Plus,
    User,
    ArrowRight,
    Close,
}

impl IconName {
    /// Glyph rendered for this icon
    pub fn glyph(&self) -> &'static str {
        match self {
            IconName::Plus => "+",
            IconName::User => "\u{1F464}",
            IconName::ArrowRight => "\u{2192}",
            IconName::Close => "\u{00D7}",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    pub name: IconName,
    /// Font size in pixels
    #[props(default = 16)]
    pub size: u32,
    #[props(default)]
    pub class: Option<String>,
}

/// Inline icon sized in pixels
#[component]
pub fn Icon(props: IconProps) -> Element {
    let class = super::join_classes(&["icon", props.class.as_deref().unwrap_or("")]);
    let glyph = props.name.glyph();

    rsx! {
        span {
            class: "{class}",
            style: "font-size: {props.size}px; line-height: 1;",
            "aria-hidden": "true",
            "{glyph}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_glyphs_are_distinct() {
        let glyphs = [
            IconName::Plus.glyph(),
            IconName::User.glyph(),
            IconName::ArrowRight.glyph(),
            IconName::Close.glyph(),
        ];
        for (i, a) in glyphs.iter().enumerate() {
            for b in &glyphs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

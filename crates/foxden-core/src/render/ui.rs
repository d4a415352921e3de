//! Generic UI primitives
//!
//! The small component set the page views compose: Button, Card (with
//! header/title/content), Input, Textarea. Each primitive renders a
//! labeled control and accepts a class override — nothing more is
//! promised. Text and attribute values are escaped here so view code
//! can pass configuration strings through untouched.

/// Escape text for use in HTML content or attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A button that submits nothing
///
/// The order forms are decorative: the control carries `type="button"`
/// and no handler, so activating it has no observable effect.
pub fn button(label: &str, class: &str) -> String {
    format!(
        "<button type=\"button\" class=\"btn {}\">{}</button>",
        escape(class),
        escape(label)
    )
}

/// A link styled as a button
pub fn link_button(href: &str, label: &str, class: &str) -> String {
    format!(
        "<a class=\"btn {}\" href=\"{}\">{}</a>",
        escape(class),
        escape(href),
        escape(label)
    )
}

/// A card with an optional header/title and a content block
pub fn card(title: Option<&str>, content: &str, class: &str) -> String {
    let mut out = format!("<div class=\"card {}\">", escape(class));
    if let Some(title) = title {
        out.push_str(&format!(
            "<div class=\"card-header\"><h3 class=\"card-title\">{}</h3></div>",
            escape(title)
        ));
    }
    out.push_str(&format!(
        "<div class=\"card-content\">{}</div></div>",
        content
    ));
    out
}

/// A labeled single-line input
pub fn input(placeholder: &str, input_type: &str) -> String {
    format!(
        "<input class=\"input\" type=\"{}\" placeholder=\"{}\">",
        escape(input_type),
        escape(placeholder)
    )
}

/// A labeled multi-line input
pub fn textarea(placeholder: &str) -> String {
    format!(
        "<textarea class=\"textarea\" placeholder=\"{}\"></textarea>",
        escape(placeholder)
    )
}

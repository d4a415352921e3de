//! Persistent shell chrome
//!
//! Header with brand link, the five navigation links, and the contact
//! call-to-action; footer with social and contact links. The shell is
//! stateless and identical on every route — it does not highlight the
//! active link (the production site never did either).

use crate::config::SiteConfig;
use crate::model::ViewId;
use crate::render::ui::{escape, link_button};

/// Wrap a view fragment in the persistent chrome
pub fn wrap(view_html: &str, config: &SiteConfig) -> String {
    let mut out = String::new();

    out.push_str("<div class=\"layout\">");
    out.push_str(&header(config));
    out.push_str(&format!("<main class=\"content\">{}</main>", view_html));
    out.push_str(&footer(config));
    out.push_str("</div>");

    out
}

fn header(config: &SiteConfig) -> String {
    let mut out = String::from("<header class=\"site-header\"><div class=\"container\">");

    out.push_str(&format!(
        "<a class=\"brand\" href=\"/\">{}</a>",
        escape(&config.brand)
    ));

    out.push_str("<nav class=\"site-nav\">");
    for view in ViewId::ALL {
        out.push_str(&format!(
            "<a href=\"{}\">{}</a>",
            view.canonical_path(),
            escape(view.nav_label())
        ));
    }
    out.push_str("</nav>");

    out.push_str(&link_button(
        ViewId::Contacts.canonical_path(),
        "Связаться",
        "rounded",
    ));
    out.push_str("</div></header>");

    out
}

fn footer(config: &SiteConfig) -> String {
    let mut out = String::from("<footer class=\"site-footer\"><div class=\"container\">");

    out.push_str(&format!(
        "<div class=\"footer-brand\">«{}»</div>",
        escape(&config.brand)
    ));

    out.push_str("<div class=\"footer-links\">");
    out.push_str(&format!(
        "<a class=\"underline\" href=\"{}\">Instagram</a>",
        escape(&config.instagram_url)
    ));
    out.push_str(&format!(
        "<a class=\"underline\" href=\"mailto:{}\">E‑mail</a>",
        escape(&config.email)
    ));
    out.push_str(&format!(
        "<a class=\"underline\" href=\"tel:{}\">Позвонить</a>",
        escape(&config.phone)
    ));
    out.push_str("</div></div></footer>");

    out
}

use crate::config::SiteConfig;
use crate::model::PageMetadata;
use crate::render::ui::{card, escape};
use crate::render::PageRender;

pub(crate) fn metadata() -> PageMetadata {
    PageMetadata::new(
        "Контакты — Лисья Нора",
        "Контакты домашнего ресторана Лисья Нора: адрес, телефон, график работы.",
    )
}

/// Contacts view: address, phone, e-mail, and opening hours
///
/// The `tel:` and `mailto:` links hand off to the native dial/mail
/// handlers; the kernel only guarantees they are formatted correctly.
pub(crate) fn page(config: &SiteConfig) -> PageRender {
    let mut out = String::new();

    out.push_str("<section class=\"page\">");
    out.push_str("<h2>Контакты</h2>");

    let mut rows = String::new();
    rows.push_str(&format!(
        "<div class=\"contact-row\">{}</div>",
        escape(&config.address)
    ));
    rows.push_str(&format!(
        "<div class=\"contact-row\"><a class=\"underline\" href=\"tel:{}\">{}</a></div>",
        escape(&config.phone),
        escape(&config.phone_display)
    ));
    rows.push_str(&format!(
        "<div class=\"contact-row\"><a class=\"underline\" href=\"mailto:{}\">{}</a></div>",
        escape(&config.email),
        escape(&config.email)
    ));
    rows.push_str(&format!(
        "<div class=\"contact-row\">{}</div>",
        escape(&config.hours)
    ));

    out.push_str(&card(None, &rows, "rounded-xl"));
    out.push_str("</section>");

    PageRender {
        fragment: out,
        metadata: metadata(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contacts_metadata() {
        assert_eq!(metadata().title, "Контакты — Лисья Нора");
    }

    #[test]
    fn test_tel_and_mailto_links() {
        let page = page(&SiteConfig::default());
        assert!(page.fragment.contains("href=\"tel:+1234567890\""));
        assert!(page.fragment.contains("href=\"mailto:info@lisyanora.example\""));
    }

    #[test]
    fn test_address_and_hours_from_config() {
        let config = SiteConfig::default();
        let page = page(&config);
        assert!(page.fragment.contains("Ул. Примерная, 7 · Город"));
        assert!(page.fragment.contains("Пн–Чт 12–22 · Пт–Сб 12–23 · Вс 12–21"));
    }
}

use crate::config::SiteConfig;
use crate::model::PageMetadata;
use crate::render::ui::{button, card, input, textarea};
use crate::render::{image_grid, PageRender};

pub(crate) fn metadata() -> PageMetadata {
    PageMetadata::new(
        "Корпоративные обеды — Лисья Нора",
        "Корпоративные обеды с доставкой: комплексные рационы под бюджет и диеты вашей команды.",
    )
}

/// Corporate lunch view: gallery plus the decorative request form
pub(crate) fn page(config: &SiteConfig) -> PageRender {
    let mut out = String::new();

    out.push_str("<section class=\"page\">");
    out.push_str("<h2>Корпоративные обеды с доставкой</h2>");
    out.push_str(&image_grid(&config.lunch_gallery, "Обед"));

    let mut form = String::from("<form class=\"order-form\">");
    form.push_str(&input("Компания", "text"));
    form.push_str(&input("Телефон", "tel"));
    form.push_str(&input("Количество человек", "number"));
    form.push_str(&textarea("Пожелания по меню"));
    form.push_str(&button("Оставить заявку", "rounded"));
    form.push_str("</form>");

    out.push_str(&card(Some("Заказать корпоративный обед"), &form, "rounded-xl"));
    out.push_str("</section>");

    PageRender {
        fragment: out,
        metadata: metadata(),
    }
}

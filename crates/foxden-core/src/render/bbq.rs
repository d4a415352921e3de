use crate::config::SiteConfig;
use crate::model::PageMetadata;
use crate::render::ui::{button, card, input, textarea};
use crate::render::{image_grid, PageRender};

pub(crate) fn metadata() -> PageMetadata {
    PageMetadata::new(
        "Шашлыки с доставкой — Лисья Нора",
        "Свежие шашлыки на углях с доставкой: курица, свинина, говядина и овощи-гриль.",
    )
}

/// Barbecue view: gallery plus the decorative order form
///
/// The form is a placeholder: no action, no handler. Activating the
/// submit control produces no network call and no state change.
pub(crate) fn page(config: &SiteConfig) -> PageRender {
    let mut out = String::new();

    out.push_str("<section class=\"page\">");
    out.push_str("<h2>Шашлыки с доставкой</h2>");
    out.push_str(&image_grid(&config.bbq_gallery, "Шашлык"));

    let mut form = String::from("<form class=\"order-form\">");
    form.push_str(&input("Ваше имя", "text"));
    form.push_str(&input("Телефон", "tel"));
    form.push_str(&input("Выберите набор", "text"));
    form.push_str(&textarea("Комментарии к заказу"));
    form.push_str(&button("Отправить заказ", "rounded"));
    form.push_str("</form>");

    out.push_str(&card(Some("Заказать шашлык"), &form, "rounded-xl"));
    out.push_str("</section>");

    PageRender {
        fragment: out,
        metadata: metadata(),
    }
}

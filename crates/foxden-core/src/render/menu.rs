use crate::config::SiteConfig;
use crate::model::PageMetadata;
use crate::render::ui::card;
use crate::render::PageRender;

const SECTIONS: [(&str, &str); 3] = [
    ("Супы", "Борщ, солянка, куриный бульон…"),
    ("Горячее", "Котлеты, рагу, рыба на пару…"),
    ("Десерты", "Чизкейк, штрудель, медовик…"),
];

pub(crate) fn metadata() -> PageMetadata {
    PageMetadata::new(
        "Меню — Лисья Нора",
        "Актуальное меню домашнего ресторана Лисья Нора: супы, горячее, десерты.",
    )
}

/// Menu view: one card per menu section
pub(crate) fn page(_config: &SiteConfig) -> PageRender {
    let mut out = String::new();

    out.push_str("<section class=\"page\">");
    out.push_str("<h2>Меню</h2>");
    out.push_str("<div class=\"grid grid-3\">");
    for (title, dishes) in SECTIONS {
        out.push_str(&card(Some(title), dishes, ""));
    }
    out.push_str("</div></section>");

    PageRender {
        fragment: out,
        metadata: metadata(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_metadata() {
        assert_eq!(metadata().title, "Меню — Лисья Нора");
    }

    #[test]
    fn test_menu_renders_three_section_cards() {
        let page = page(&SiteConfig::default());
        for (title, _) in SECTIONS {
            assert!(page.fragment.contains(title), "missing section {}", title);
        }
        assert_eq!(page.fragment.matches("card-title").count(), 3);
    }

    #[test]
    fn test_menu_lists_dishes() {
        let page = page(&SiteConfig::default());
        assert!(page.fragment.contains("Борщ, солянка, куриный бульон…"));
        assert!(page.fragment.contains("Чизкейк, штрудель, медовик…"));
    }
}

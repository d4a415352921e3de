/// Scenario 1: Home To Menu Navigation
///
/// End-to-end walk of the primary user journey: land on the home page,
/// activate the menu link, and arrive on the menu view with the right
/// cards and document title.
use foxden_core::render::render_view;
use foxden_core::{
    apply, Command, DocumentHead, RoutePath, SiteConfig, SiteState, ViewId,
};

mod common;

#[test]
fn test_scenario_01_menu_link_reaches_menu_view() {
    let table = common::table();
    let config = SiteConfig::default();

    // GIVEN the site mounted at the home route
    let state = SiteState::initial();
    let home = render_view(ViewId::Home, &config);
    assert!(home.fragment.contains("href=\"/menu\""), "home must link to the menu");

    let mut head = DocumentHead::new(&config.theme_color, &config.brand);
    head.publish(&home.metadata);
    assert_eq!(head.title(), "Лисья Нора — Домашний ресторан");

    // WHEN the menu link is activated
    let state = apply(
        state,
        Command::Navigate {
            path: RoutePath::parse("/menu").expect("link path should parse"),
        },
        &table,
    )
    .expect("navigation should apply");

    // AND the home view finishes its exit
    let state = apply(state, Command::ExitComplete, &table).expect("exit should complete");

    // THEN the menu view is steady and publishes its metadata
    assert_eq!(state.transition().target().view, ViewId::Menu);
    let menu = render_view(ViewId::Menu, &config);
    head.publish(&menu.metadata);
    assert_eq!(head.title(), "Меню — Лисья Нора");

    // AND the view shows the three menu sections
    for section in ["Супы", "Горячее", "Десерты"] {
        assert!(menu.fragment.contains(section), "missing card {}", section);
    }
}

#[test]
fn test_scenario_01_double_activation_is_harmless() {
    let table = common::table();

    // GIVEN the site already on the menu route
    let state = common::switch_to(SiteState::initial(), ViewId::Menu, &table);
    let settled = state.clone();

    // WHEN the menu link is activated again
    let state = apply(
        state,
        Command::Navigate {
            path: RoutePath::parse("/menu").unwrap(),
        },
        &table,
    )
    .unwrap();

    // THEN nothing moved: no second transition, same state
    assert_eq!(state, settled);
}

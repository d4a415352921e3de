use foxden_core::{apply, Command, RoutePath, RouteTable, SiteState, ViewId};

/// Create the production route table for testing
#[allow(dead_code)]
pub fn table() -> RouteTable {
    RouteTable::site_default()
}

/// Drive a state through a full navigation: navigate, then complete the
/// exit so the target view lands
#[allow(dead_code)]
pub fn switch_to(state: SiteState, view: ViewId, table: &RouteTable) -> SiteState {
    let state = apply(
        state,
        Command::Navigate {
            path: RoutePath::canonical(view),
        },
        table,
    )
    .expect("navigate should apply");

    if state.transition().is_switching() {
        apply(state, Command::ExitComplete, table).expect("exit should complete")
    } else {
        state
    }
}

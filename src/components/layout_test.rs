use super::*;

#[test]
fn active_route_gets_active_class() {
    assert_eq!(
        nav_item_class(AppRoute::Dashboard, Some(AppRoute::Dashboard)),
        "side-menu__item side-menu__item--active"
    );
}

#[test]
fn other_routes_are_plain() {
    assert_eq!(nav_item_class(AppRoute::Home, Some(AppRoute::Dashboard)), "side-menu__item");
    assert_eq!(nav_item_class(AppRoute::Home, None), "side-menu__item");
}

#[test]
fn exactly_one_nav_entry_active_per_protected_path() {
    for path in ["/", "/dashboard", "/contact"] {
        let active = AppRoute::from_path(path);
        let count = AppRoute::NAV
            .into_iter()
            .filter(|route| nav_item_class(*route, active).ends_with("--active"))
            .count();
        assert_eq!(count, 1, "path {path}");
    }
}

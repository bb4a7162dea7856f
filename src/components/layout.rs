//! Shared page chrome: side menu plus content column.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::util::route::AppRoute;

/// CSS class for a sidebar entry; `active` is the route being viewed.
#[must_use]
pub fn nav_item_class(route: AppRoute, active: Option<AppRoute>) -> &'static str {
    if active == Some(route) { "side-menu__item side-menu__item--active" } else { "side-menu__item" }
}

#[component]
pub fn SideMenu() -> impl IntoView {
    let location = use_location();
    let active = move || AppRoute::from_path(&location.pathname.get());

    view! {
        <nav class="side-menu">
            <ul class="side-menu__list">
                {AppRoute::NAV
                    .into_iter()
                    .map(|route| {
                        view! {
                            <li class=move || nav_item_class(route, active())>
                                <A href=route.path()>{route.label()}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="side-menu__footer">
                <a class="side-menu__signout" href=AppRoute::Logout.path()>
                    {AppRoute::Logout.label()}
                </a>
            </div>
        </nav>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <SideMenu/>
            <main class="layout__content">{children()}</main>
        </div>
    }
}

/// Titled content card with an optional action row.
#[component]
pub fn Card(title: &'static str, text: &'static str, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <div class="card">
            <h5 class="card__title">{title}</h5>
            <p class="card__text">{text}</p>
            {children.map(|c| c())}
        </div>
    }
}

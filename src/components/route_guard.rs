//! Route guard gating the protected page subtree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the shared layout of `/`, `/dashboard` and `/contact` as a parent
//! route, so it mounts once for the whole subtree. Navigating between
//! protected pages keeps the guard mounted and does not re-check the session.
//!
//! DESIGN
//! ======
//! The guard starts in [`GuardState::Checking`] and resolves exactly once from
//! the session authority's answer. Children are only built in
//! [`GuardState::Authorized`], so protected content never flashes while the
//! check (and a possible refresh) is outstanding. An unauthorized visitor is
//! sent to `/login`; the requested path is not remembered.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::util::route::AppRoute;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Checking,
    Authorized,
    Unauthorized,
}

impl GuardState {
    /// Apply the authority's answer. Only `Checking` transitions; a resolved
    /// guard keeps its first decision.
    #[must_use]
    pub fn resolve(self, authenticated: bool) -> Self {
        match self {
            Self::Checking if authenticated => Self::Authorized,
            Self::Checking => Self::Unauthorized,
            resolved => resolved,
        }
    }

    #[must_use]
    pub fn shows_children(self) -> bool {
        self == Self::Authorized
    }

    #[must_use]
    pub fn redirect_target(self) -> Option<AppRoute> {
        (self == Self::Unauthorized).then_some(AppRoute::Login)
    }
}

#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let state = RwSignal::new(GuardState::Checking);
    let navigate = use_navigate();

    #[cfg(feature = "csr")]
    {
        let authority = expect_context::<crate::app::AuthorityContext>().get_value();
        leptos::task::spawn_local(async move {
            let authenticated = authority.is_authenticated().await;
            state.update(|s| *s = s.resolve(authenticated));
        });
    }

    Effect::new(move || {
        if let Some(route) = state.get().redirect_target() {
            navigate(route.path(), NavigateOptions { replace: true, ..Default::default() });
        }
    });

    move || {
        if state.get().shows_children() {
            children().into_any()
        } else {
            view! { <div class="route-guard route-guard--checking" aria-busy="true"></div> }.into_any()
        }
    }
}

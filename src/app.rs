//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::route_guard::RouteGuard;
use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::pages::{
    contact::ContactPage, dashboard::DashboardPage, home::HomePage, login::LoginPage, logout::LogoutPage,
    register::RegisterPage,
};
use crate::state::session::{SessionAuthority, system_clock};
use crate::util::route::AppRoute;
use crate::util::storage::CredentialStore;

/// Context handle for the session authority. Its store and API client are
/// `Rc`-based, so it lives in thread-local arena storage.
pub type AuthorityContext = StoredValue<SessionAuthority, LocalStorage>;

/// Root application component.
///
/// Provides the API client and session authority, and splits routes into the
/// public auth pages and the guarded content subtree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = HttpApi::new(ClientConfig::from_build_env());
    let authority = SessionAuthority::new(CredentialStore::browser(), Rc::new(api.clone()), system_clock());
    provide_context(api);
    provide_context::<AuthorityContext>(StoredValue::new_local(authority));

    view! {
        <Title text="Receipt Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment(AppRoute::Login.segment()) view=LoginPage/>
                <Route path=StaticSegment(AppRoute::Register.segment()) view=RegisterPage/>
                <Route path=StaticSegment(AppRoute::Logout.segment()) view=LogoutPage/>
                <ParentRoute path=StaticSegment(AppRoute::Home.segment()) view=ProtectedShell>
                    <Route path=StaticSegment(AppRoute::Home.segment()) view=HomePage/>
                    <Route path=StaticSegment(AppRoute::Dashboard.segment()) view=DashboardPage/>
                    <Route path=StaticSegment(AppRoute::Contact.segment()) view=ContactPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Guarded layout shared by every protected page.
#[component]
fn ProtectedShell() -> impl IntoView {
    view! {
        <RouteGuard>
            <Layout>
                <Outlet/>
            </Layout>
        </RouteGuard>
    }
}

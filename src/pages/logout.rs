//! Synthetic `/logout` route: visiting it clears the session.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::app::AuthorityContext;
use crate::state::auth_flow::AuthFlows;

#[component]
pub fn LogoutPage() -> impl IntoView {
    let authority = expect_context::<AuthorityContext>();
    let target = authority.with_value(|authority| AuthFlows::from_authority(authority).logout());

    view! { <Redirect path=target.path()/> }
}

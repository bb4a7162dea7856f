//! Login page.

use leptos::prelude::*;

use crate::components::auth_form::AuthForm;
use crate::state::form::FormMode;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <AuthForm mode=FormMode::Login/> }
}

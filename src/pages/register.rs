//! Registration page. A successful registration lands on `/login`.

use leptos::prelude::*;

use crate::components::auth_form::AuthForm;
use crate::state::form::FormMode;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! { <AuthForm mode=FormMode::Register/> }
}

//! Username/password form shared by the login and registration pages.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::form::{FormMode, FormState, validate_credentials};

#[component]
pub fn AuthForm(mode: FormMode) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(FormState::default());
    let navigate = use_navigate();
    #[cfg(feature = "csr")]
    let authority = expect_context::<crate::app::AuthorityContext>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = match validate_credentials(mode, &username.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                form.update(|f| f.reject(message));
                return;
            }
        };
        if !form.try_update(FormState::begin).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "csr")]
        {
            use crate::state::auth_flow::AuthFlows;

            let flows = AuthFlows::from_authority(&authority.get_value());
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = match mode {
                    FormMode::Login => flows.login(&credentials).await,
                    FormMode::Register => flows.register(&credentials).await,
                };
                form.update(|f| f.finish(&result));
                if let Ok(route) = result {
                    navigate(route.path(), leptos_router::NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (credentials, &navigate);
        }
    };

    let (switch_prompt, switch_label, switch_route) = mode.switch_link();
    let busy = move || form.with(|f| f.busy);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">{mode.title()}</h1>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || form.with(|f| f.error.is_some())>
                        <div class="auth-form__error" role="alert" id="error-message">
                            {move || form.with(|f| f.error.clone().unwrap_or_default())}
                        </div>
                    </Show>
                    <label class="auth-form__label" for="username">"Username"</label>
                    <input
                        class="auth-input"
                        type="text"
                        id="username"
                        placeholder="Username"
                        autocomplete="username"
                        required=true
                        disabled=busy
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="password">"Password"</label>
                    <input
                        class="auth-input"
                        type="password"
                        id="password"
                        placeholder="Password"
                        autocomplete=mode.password_autocomplete()
                        required=true
                        disabled=busy
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button
                        class="auth-button"
                        type="submit"
                        disabled=move || form.with(|f| username.with(|u| password.with(|p| f.submit_disabled(u, p))))
                    >
                        {move || if busy() { mode.busy_label() } else { mode.title() }}
                    </button>
                </form>
                <hr class="auth-card__divider"/>
                <p class="auth-card__switch">
                    {switch_prompt}
                    " "
                    <A href=switch_route.path()>{switch_label}</A>
                </p>
            </div>
        </div>
    }
}

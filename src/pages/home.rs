//! Home page: greeting plus the receipt upload card.
//!
//! The upload goes to the bearer-protected upload endpoint; its outcome is
//! shown inline under the card.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::app::AuthorityContext;
use crate::components::layout::Card;
use crate::net::api::ApiError;
use crate::net::types::UploadReceipt;
use crate::state::session::SessionAuthority;

/// Inline status of the most recent upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadStatus {
    Uploading,
    Succeeded,
    Failed,
    Errored,
}

impl UploadStatus {
    /// Rejected by the server is `Failed`; anything that never got a server
    /// verdict is `Errored`.
    #[must_use]
    pub fn from_result(result: &Result<UploadReceipt, ApiError>) -> Self {
        match result {
            Ok(_) => Self::Succeeded,
            Err(ApiError::Rejected { .. }) => Self::Failed,
            Err(_) => Self::Errored,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Uploading => "Uploading...",
            Self::Succeeded => "Upload successful",
            Self::Failed => "Upload failed",
            Self::Errored => "Error uploading file",
        }
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let authority = expect_context::<AuthorityContext>();
    let name = authority.with_value(SessionAuthority::display_name);
    let status = RwSignal::new(None::<UploadStatus>);
    let file_input = NodeRef::<leptos::html::Input>::new();
    #[cfg(feature = "csr")]
    let api = expect_context::<crate::net::api::HttpApi>();

    let on_try = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(input) = file_input.get() {
                input.click();
            }
        }
    };

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let api = api.clone();
            let store = authority.with_value(|a| a.store().clone());
            status.set(Some(UploadStatus::Uploading));
            leptos::task::spawn_local(async move {
                let result = api.upload(&store, &file).await;
                if let Err(e) = &result {
                    log::warn!("upload failed: {e}");
                }
                status.set(Some(UploadStatus::from_result(&result)));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    view! {
        <h1 class="page__title">{format!("Hi {name} 👋🏻")}</h1>
        <div class="page__cards">
            <Card
                title="Snap & Store"
                text="Take a photo or screenshot of your receipts and let AI organize them automatically."
            >
                <div class="card__actions">
                    <button class="card__action card__action--primary" type="button" on:click=on_try>
                        "Try it !"
                    </button>
                    <span class="card__action">"See data"</span>
                </div>
                <Show when=move || status.get().is_some()>
                    <p class="card__status">{move || status.get().map(UploadStatus::message)}</p>
                </Show>
            </Card>
        </div>
        <input
            node_ref=file_input
            type="file"
            accept="image/*"
            capture="environment"
            style="display: none"
            on:change=on_file
        />
    }
}

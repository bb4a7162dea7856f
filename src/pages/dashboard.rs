//! Dashboard ("Numbers") page.

use leptos::prelude::*;

use crate::components::layout::Card;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <h1 class="page__title">"Numbers"</h1>
        <div class="page__cards">
            <Card title="Receipts" text="Totals from your uploaded receipts will appear here."/>
        </div>
    }
}

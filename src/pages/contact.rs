use leptos::prelude::*;

use crate::components::layout::Card;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <h1 class="page__title">"Contact"</h1>
        <div class="page__cards">
            <Card title="Get in touch" text="Questions or feedback? Reach out and we will get back to you."/>
        </div>
    }
}

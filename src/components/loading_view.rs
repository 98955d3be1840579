//! Loading View Component

use leptos::prelude::*;

/// Spinner shown while the status check is running
#[component]
pub fn LoadingView() -> impl IntoView {
    view! {
        <section id="loading-view" class="view loading-view">
            <div class="loading-spinner" />
            <p class="loading-text">"Loading your account..."</p>
        </section>
    }
}

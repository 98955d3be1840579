//! Mini App Root
//!
//! Provides the store, boots once on mount and renders the current view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DashboardView, LoadingView, MessageBanner, RegistrationForm};
use crate::controller;
use crate::flow::View;
use crate::store::{AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store = AppStore::new(AppState::new());
    provide_context(store);

    // Boot once; the effect has no tracked dependencies
    Effect::new(move |_| {
        spawn_local(controller::boot(store));
    });

    view! {
        <main class="miniapp">
            <MessageBanner />
            {move || match store.view().get() {
                View::Loading => view! { <LoadingView /> }.into_any(),
                View::Registration => view! { <RegistrationForm /> }.into_any(),
                View::Dashboard => view! { <DashboardView /> }.into_any(),
            }}
        </main>
    }
}

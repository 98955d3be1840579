//! Message Banner Component
//!
//! Shows the current success or error message from the store.

use leptos::prelude::*;

use crate::flow::MessageKind;
use crate::store::{use_app_store, AppStateStoreFields};

/// Success/error banner; at most one is visible
#[component]
pub fn MessageBanner() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || store.message().get().map(|message| {
            let (id, class) = match message.kind {
                MessageKind::Success => ("success-message", "message success"),
                MessageKind::Error => ("error-message", "message error"),
            };
            view! {
                <div id=id class=class role="alert">
                    {message.text}
                </div>
            }
        })}
    }
}

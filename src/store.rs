//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::config::MESSAGE_TIMEOUT_MS;
use crate::flow::{Message, View};
use crate::models::DashboardProfile;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Currently visible screen
    pub view: View,
    /// Success or error banner, if any
    pub message: Option<Message>,
    /// Bumped on every message change so stale hide timers do nothing
    pub message_generation: u32,
    /// Dashboard fields of the registered user
    pub profile: DashboardProfile,
    /// Registration request in flight
    pub submitting: bool,
    /// Status check in flight
    pub checking_status: bool,
    /// `window.Telegram.WebApp` was found at boot
    pub telegram_available: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Switch to a view; all others become hidden
pub fn store_show_view(store: &AppStore, view: View) {
    log::debug!("[VIEW] show {:?}", view);
    store.view().set(view);
}

/// Show a message and hide it again after [`MESSAGE_TIMEOUT_MS`]
pub fn store_display_message(store: &AppStore, message: Message) {
    let generation = next_generation(store);
    store.message().set(Some(message));

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(MESSAGE_TIMEOUT_MS).await;
        if store.message_generation().get_untracked() == generation {
            store.message().set(None);
        }
    });
}

/// Hide any message immediately
pub fn store_clear_message(store: &AppStore) {
    next_generation(store);
    store.message().set(None);
}

/// Show `saved` again if nothing replaced it in the meantime
pub fn store_keep_message(store: &AppStore, saved: Option<Message>) {
    if let Some(message) = saved {
        if store.message().get_untracked().is_none() {
            store_display_message(store, message);
        }
    }
}

pub fn store_set_profile(store: &AppStore, profile: DashboardProfile) {
    store.profile().set(profile);
}

pub fn store_set_submitting(store: &AppStore, submitting: bool) {
    store.submitting().set(submitting);
}

pub fn store_set_checking_status(store: &AppStore, checking: bool) {
    store.checking_status().set(checking);
}

fn next_generation(store: &AppStore) -> u32 {
    store.message_generation().update(|g| *g = g.wrapping_add(1));
    store.message_generation().get_untracked()
}

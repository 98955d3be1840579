//! Mini App Workflows
//!
//! Status check, registration and startup, applied to the store.

use leptos::prelude::*;

use crate::api;
use crate::flow::{self, Message, View};
use crate::store::{
    store_clear_message, store_display_message, store_keep_message, store_set_checking_status, store_set_profile,
    store_set_submitting, store_show_view, AppStateStoreFields, AppStore,
};
use crate::telegram::{self, WebApp};

/// Fetch the user's registration status and show the matching view
pub async fn fetch_user_status(store: AppStore) {
    let Some(app) = telegram::web_app() else {
        log::error!("[STATUS] Telegram WebApp not available, showing registration");
        store_show_view(&store, View::Registration);
        return;
    };

    store_set_checking_status(&store, true);
    store_show_view(&store, View::Loading);
    store_clear_message(&store);

    let init_data = app.init_data();
    log::info!("[STATUS] Fetching status ({} bytes of init data)", init_data.len());

    let result = api::fetch_status(&init_data).await;
    match &result {
        Ok(status) => log::info!("[STATUS] is_registered={}", status.is_registered),
        Err(e) => log::error!("[STATUS] Error fetching user status: {}", e),
    }

    let outcome = flow::status_outcome(&result);
    if let Some(profile) = outcome.profile {
        store_set_profile(&store, profile);
    }
    if let Some(message) = outcome.message {
        store_display_message(&store, message);
    }
    store_show_view(&store, outcome.view);
    store_set_checking_status(&store, false);
    app.signal_ready();
}

/// Re-check the status unless a check is already running
pub async fn refresh_status(store: AppStore) {
    if store.checking_status().get_untracked() {
        log::debug!("[STATUS] Refresh ignored, check in flight");
        return;
    }
    fetch_user_status(store).await;
}

/// Validate the form, register, then refresh the status on success
pub async fn register_user(store: AppStore, phone_number: String, referral_code: String) {
    if store.submitting().get_untracked() {
        return;
    }
    store_clear_message(&store);
    store_set_submitting(&store, true);

    let app = telegram::web_app();
    let user = app.as_ref().and_then(WebApp::user);

    let request = match flow::validate_registration(&phone_number, &referral_code, user.as_ref()) {
        Ok(request) => request,
        Err(e) => {
            log::warn!("[REGISTER] Rejected form: {}", e);
            store_display_message(&store, Message::error(e.to_string()));
            store_set_submitting(&store, false);
            return;
        }
    };

    let init_data = app.as_ref().map(WebApp::init_data).unwrap_or_default();
    log::info!(
        "[REGISTER] Registering telegram_id={} referral={}",
        request.telegram_id,
        request.referral_code.is_some()
    );

    let result = api::register(&init_data, &request).await;
    if let Err(e) = &result {
        log::error!("[REGISTER] Error during registration: {}", e);
    }

    let succeeded = matches!(&result, Ok(resp) if resp.success);
    store_display_message(&store, flow::registration_message(&result));

    if succeeded {
        if let Ok(resp) = &result {
            log::info!(
                "[REGISTER] Linked custom_user_id={:?} created={:?}",
                resp.custom_user_id,
                resp.created
            );
        }
        // Keep the success message visible across the status refresh
        let message = store.message().get_untracked();
        fetch_user_status(store).await;
        store_keep_message(&store, message);
    }

    store_set_submitting(&store, false);
}

/// Initial view selection once the app is mounted
pub async fn boot(store: AppStore) {
    store_show_view(&store, View::Loading);

    match telegram::web_app() {
        Some(app) => {
            store.telegram_available().set(true);
            app.signal_ready();
            log::info!("[BOOT] Telegram WebApp initialized");
            log::debug!("[BOOT] InitData: {}", app.init_data());
            log::debug!("[BOOT] User: {:?}", app.user());
            fetch_user_status(store).await;
        }
        None => {
            log::error!("[BOOT] Telegram WebApp object not found. Are you running in Telegram?");
            store.telegram_available().set(false);
            store_show_view(&store, View::Registration);
            store_display_message(&store, Message::error("Not running in Telegram. Features might be limited."));
        }
    }
}

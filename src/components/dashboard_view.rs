//! Dashboard Component
//!
//! Account summary for registered users.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn DashboardView() -> impl IntoView {
    let store = use_app_store();
    let profile = move || store.profile().get();

    let refresh = move |_| {
        spawn_local(controller::refresh_status(store));
    };

    view! {
        <section id="dashboard-view" class="view dashboard-view">
            <h2>"Welcome, " <span id="dashboard-username">{move || profile().username}</span></h2>
            <dl class="dashboard-fields">
                <DashboardRow label="Phone number" id="dashboard-phone-number" value=Signal::derive(move || profile().phone_number) />
                <DashboardRow label="Telegram username" id="dashboard-telegram-username" value=Signal::derive(move || profile().telegram_username) />
                <DashboardRow label="Share balance" id="dashboard-share-balance" value=Signal::derive(move || profile().share_balance) />
                <DashboardRow label="Referrals" id="dashboard-referral-count" value=Signal::derive(move || profile().referral_count) />
            </dl>
            <button
                class="refresh-btn"
                disabled=move || store.checking_status().get()
                on:click=refresh
            >
                "Refresh"
            </button>
        </section>
    }
}

#[component]
fn DashboardRow(
    label: &'static str,
    id: &'static str,
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="dashboard-row">
            <dt>{label}</dt>
            <dd id=id>{move || value.get()}</dd>
        </div>
    }
}

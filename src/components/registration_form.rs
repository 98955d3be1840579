//! Registration Form Component
//!
//! Phone number and optional referral code for linking a Telegram user.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RegistrationForm() -> impl IntoView {
    let store = use_app_store();

    let (phone_number, set_phone_number) = signal(String::new());
    let (referral_code, set_referral_code) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store.submitting().get_untracked() {
            return;
        }
        let phone = phone_number.get_untracked();
        let referral = referral_code.get_untracked();
        spawn_local(controller::register_user(store, phone, referral));
    };

    view! {
        <section id="registration-view" class="view registration-view">
            <h2>"Create your account"</h2>
            <Show when=move || !store.telegram_available().get()>
                <p class="hint">"Open this app from Telegram to register."</p>
            </Show>
            <form class="registration-form" on:submit=submit>
                <label for="phone-number-input">"Phone number"</label>
                <input
                    id="phone-number-input"
                    type="tel"
                    autocomplete="tel"
                    placeholder="+251..."
                    prop:value=move || phone_number.get()
                    on:input=move |ev| set_phone_number.set(event_target_value(&ev))
                />

                <label for="referral-code-input">"Referral code (optional)"</label>
                <input
                    id="referral-code-input"
                    type="text"
                    prop:value=move || referral_code.get()
                    on:input=move |ev| set_referral_code.set(event_target_value(&ev))
                />

                <button
                    id="register-button"
                    type="submit"
                    disabled=move || store.submitting().get()
                >
                    {move || if store.submitting().get() { "Registering..." } else { "Register" }}
                </button>
            </form>
        </section>
    }
}

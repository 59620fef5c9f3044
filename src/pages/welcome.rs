//! Welcome Page
//!
//! First-visit screen: asks for a display name and starts a local
//! session before handing over to the dashboard.

use chrono::Timelike;
use leptos::*;

use crate::components::Logo;
use crate::state::global::{GlobalState, Screen};
use crate::state::session::{greeting, save_session, Session};
use crate::storage::LocalStore;

#[component]
pub fn Welcome() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let value = name.get();
        if value.trim().is_empty() {
            state.show_error("Please enter your name");
            return;
        }

        let session = Session::new(&value);
        save_session(&LocalStore, &session);
        state.session.set(Some(session));
        state.screen.set(Screen::Dashboard);
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="w-full max-w-sm text-center">
                <div class="flex justify-center mb-6">
                    <Logo size=72 />
                </div>

                <h1 class="text-3xl font-bold mb-2">"WaBulk"</h1>
                <p class="text-gray-500 dark:text-gray-400 mb-8">
                    {format!("{}! ", greeting(chrono::Local::now().hour()))}
                    "Send WhatsApp messages to your whole contact list, one tap per place."
                </p>

                <form on:submit=on_submit class="space-y-4">
                    <input
                        type="text"
                        placeholder="What should we call you?"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class="w-full bg-white dark:bg-gray-800 rounded-lg px-4 py-3 text-center
                               border border-gray-200 dark:border-gray-700 focus:border-emerald-500 focus:outline-none"
                        aria-label="Your name"
                    />

                    <button
                        type="submit"
                        class="w-full px-4 py-3 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg
                               font-medium transition-colors"
                    >
                        "Get Started"
                    </button>
                </form>
            </div>
        </div>
    }
}

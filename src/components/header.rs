//! Header Component
//!
//! App bar with the logo, a time-of-day greeting and global actions.

use chrono::Timelike;
use leptos::*;

use crate::components::logo::Logo;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::global::GlobalState;
use crate::state::session::greeting;

#[component]
pub fn Header(on_add_list: impl Fn() + 'static) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let session = state.session;

    view! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <Logo size=36 />
                    <div>
                        <h1 class="text-xl font-bold">"WaBulk"</h1>
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            {move || {
                                session.get()
                                    .map(|user| format!(
                                        "{}, {}",
                                        greeting(chrono::Local::now().hour()),
                                        user.first_name()
                                    ))
                                    .unwrap_or_else(|| "Bulk WhatsApp outreach".to_string())
                            }}
                        </p>
                    </div>
                </div>

                <div class="flex items-center gap-2">
                    <ThemeToggle />
                    <button
                        on:click=move |_| on_add_list()
                        class="px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg
                               font-medium transition-colors"
                    >
                        "+ New List"
                    </button>
                </div>
            </div>
        </header>
    }
}

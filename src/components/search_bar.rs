//! Search Bar Component

use leptos::*;

/// Free-text search over place names and phones
#[component]
pub fn SearchBar(
    value: RwSignal<String>,
    #[prop(default = "Search places...")]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="relative">
            <span class="absolute inset-y-0 start-0 flex items-center ps-3 text-gray-400" aria-hidden="true">
                "🔍"
            </span>
            <input
                type="search"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full bg-white dark:bg-gray-800 rounded-lg ps-10 pe-4 py-3
                       border border-gray-200 dark:border-gray-700 focus:border-emerald-500 focus:outline-none"
                aria-label="Search places"
            />
        </div>
    }
}

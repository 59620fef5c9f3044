//! Stats Card Component
//!
//! Per-status tallies shown above the place grid.

use leptos::*;

/// Single tally card
#[component]
pub fn StatsCard(
    label: &'static str,
    #[prop(into)]
    value: Signal<u32>,
    icon: &'static str,
    /// Text color class for the number
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-xl p-4 border border-gray-200 dark:border-gray-700">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm text-gray-500 dark:text-gray-400">{label}</p>
                    <p class=format!("text-2xl font-bold mt-1 {}", accent)>
                        {move || value.get()}
                    </p>
                </div>
                <span class="text-2xl" aria-hidden="true">{icon}</span>
            </div>
        </div>
    }
}

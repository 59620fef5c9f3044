//! Status Filter Component
//!
//! Chip row narrowing the grid to one connectivity status.

use leptos::*;

use crate::api::types::{StatusCounts, StatusFilter};

/// Filter chips with per-status counts
#[component]
pub fn StatusFilterBar(
    active: RwSignal<StatusFilter>,
    #[prop(into)]
    counts: Signal<StatusCounts>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2" role="tablist" aria-label="Filter by status">
            {StatusFilter::tabs().iter().map(|&filter| {
                view! {
                    <button
                        role="tab"
                        aria-selected=move || (active.get() == filter).to_string()
                        on:click=move |_| active.set(filter)
                        class=move || {
                            let base = "px-3 py-2 rounded-full text-sm font-medium transition-colors";
                            if active.get() == filter {
                                format!("{} bg-emerald-600 text-white", base)
                            } else {
                                format!(
                                    "{} bg-gray-100 text-gray-600 hover:bg-gray-200 \
                                     dark:bg-gray-800 dark:text-gray-400 dark:hover:bg-gray-700",
                                    base
                                )
                            }
                        }
                    >
                        {filter.label()}
                        <span class="ms-1.5 opacity-75">
                            {move || counts.get().for_filter(filter)}
                        </span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

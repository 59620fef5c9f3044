//! List Selector Component
//!
//! Chip row of the user's lists; picking one drives the place grid.

use leptos::*;

use crate::state::global::GlobalState;

#[component]
pub fn ListSelector() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let lists = state.lists;
    let selected = state.selected_list;

    view! {
        <div class="flex flex-wrap gap-2" role="tablist" aria-label="Lists">
            {move || {
                lists.get().into_iter().map(|list| {
                    let id = list.id;
                    let name = list.name;

                    view! {
                        <button
                            role="tab"
                            aria-selected=move || (selected.get() == Some(id)).to_string()
                            on:click=move |_| selected.set(Some(id))
                            class=move || {
                                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                                if selected.get() == Some(id) {
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
                            {name}
                        </button>
                    }
                }).collect_view()
            }}
        </div>
    }
}

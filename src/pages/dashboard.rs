//! Dashboard Page
//!
//! Main screen composing the header, status tallies, list selection,
//! search and the place grid.

use leptos::*;

use crate::api;
use crate::api::types::StatusFilter;
use crate::components::{
    AddListDialog, EditMessageDialog, Header, ListSelector, Loading, PlacesGrid, SearchBar,
    StatsCard, StatusFilterBar,
};
use crate::state::global::GlobalState;
use crate::state::places::{FeedState, QueryKey};

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (show_add, set_show_add) = create_signal(false);
    let (show_edit, set_show_edit) = create_signal(false);

    let search = create_rw_signal(String::new());
    let filter = create_rw_signal(StatusFilter::default());
    let refresh = create_rw_signal(0u32);

    // Inert until the grid resets it for the first selected list
    let feed = create_rw_signal(FeedState::new(QueryKey {
        list_id: 0,
        filter: StatusFilter::default(),
        search: String::new(),
    }));

    // Fetch lists on mount, selecting the first one by default
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_lists().await {
                Ok(lists) => {
                    if state.selected_list.get_untracked().is_none() {
                        if let Some(first) = lists.first() {
                            state.selected_list.set(Some(first.id));
                        }
                    }
                    state.lists.set(lists);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch lists: {}", e).into());
                    state.show_error(&format!("Failed to load lists: {}", e));
                }
            }

            state.loading.set(false);
        });
    });

    let counts = Signal::derive(move || feed.with(|feed_state| feed_state.counts()));

    let lists = state.lists;
    let loading = state.loading;
    let selected = state.selected_list;
    // Memoized so switching lists does not remount the grid
    let has_selection = create_memo(move |_| selected.get().is_some());

    let state_for_edit = state.clone();

    view! {
        <div class="min-h-screen">
            <Header on_add_list=move || set_show_add.set(true) />

            <main class="container mx-auto px-4 py-6 space-y-6">
                // Status tallies for the active list
                {move || has_selection.get().then(|| view! {
                    <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
                        <StatsCard
                            label="Total Places"
                            value=Signal::derive(move || counts.get().total())
                            icon="📍"
                            accent="text-gray-900 dark:text-white"
                        />
                        <StatsCard
                            label="Connected"
                            value=Signal::derive(move || counts.get().connected)
                            icon="✅"
                            accent="text-emerald-600"
                        />
                        <StatsCard
                            label="Not Connected"
                            value=Signal::derive(move || counts.get().not_connected)
                            icon="⏳"
                            accent="text-amber-600"
                        />
                        <StatsCard
                            label="Unsupported"
                            value=Signal::derive(move || counts.get().unsupported)
                            icon="🚫"
                            accent="text-gray-500"
                        />
                    </div>
                })}

                // List chips and the template editor
                {move || (!lists.get().is_empty()).then(|| view! {
                    <div class="flex flex-wrap items-center justify-between gap-3">
                        <ListSelector />
                        {has_selection.get().then(|| view! {
                            <button
                                on:click=move |_| set_show_edit.set(true)
                                class="px-3 py-2 text-sm bg-gray-100 hover:bg-gray-200 dark:bg-gray-800
                                       dark:hover:bg-gray-700 rounded-lg font-medium transition-colors"
                            >
                                "✏️ Edit Message"
                            </button>
                        })}
                    </div>
                })}

                // First visit states
                {move || (loading.get() && lists.get().is_empty()).then(|| view! { <Loading /> })}
                {move || (!loading.get() && lists.get().is_empty()).then(|| view! {
                    <NoListsYet on_add=move || set_show_add.set(true) />
                })}

                // Search, filter and the grid, mounted once a list exists
                {move || if has_selection.get() {
                    view! {
                        <div class="space-y-4">
                            <SearchBar value=search />
                            <StatusFilterBar active=filter counts=counts />
                            <PlacesGrid search=search filter=filter feed=feed refresh=refresh />
                        </div>
                    }
                    .into_view()
                } else {
                    ().into_view()
                }}
            </main>

            // Create list modal
            {move || {
                show_add.get().then(|| view! {
                    <AddListDialog on_close=move || set_show_add.set(false) />
                })
            }}

            // Edit template modal for the active list
            {move || {
                if show_edit.get() {
                    state_for_edit.selected().map(|list| view! {
                        <EditMessageDialog
                            list=list
                            on_saved=move || refresh.update(|n| *n += 1)
                            on_close=move || set_show_edit.set(false)
                        />
                    }).into_view()
                } else {
                    ().into_view()
                }
            }}
        </div>
    }
}

/// Hero state for a fresh account with no lists
#[component]
fn NoListsYet(on_add: impl Fn() + 'static) -> impl IntoView {
    view! {
        <div class="text-center py-20">
            <div class="text-5xl mb-4">"📋"</div>
            <h2 class="text-xl font-semibold mb-2">"No lists yet"</h2>
            <p class="text-gray-500 dark:text-gray-400 mb-6">
                "Upload a JSON file of places to start your first campaign."
            </p>
            <button
                on:click=move |_| on_add()
                class="px-6 py-3 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg
                       font-medium transition-colors"
            >
                "Create Your First List"
            </button>
        </div>
    }
}

//! Places Grid Component
//!
//! Paginated, searchable grid of place cards with infinite scroll.
//! Pages load through the feed state, which drops responses arriving
//! after the query key has moved on.

use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::api;
use crate::api::types::{PlaceStatus, StatusFilter};
use crate::components::loading::{InlineLoading, SkeletonGrid};
use crate::components::place_card::PlaceCard;
use crate::state::global::GlobalState;
use crate::state::places::{visible_places, FeedState, QueryKey, PAGE_SIZE};

/// Delay before refilling the grid after a card leaves it
const BACKFILL_DELAY_MS: u32 = 300;

/// Claim and fetch the next page for the feed
fn load_next(feed: RwSignal<FeedState>) {
    let mut claimed = None;
    feed.update(|state| claimed = state.request_next());

    if let Some(request) = claimed {
        spawn_local(async move {
            let result = api::fetch_places_page(
                request.key.list_id,
                request.page,
                PAGE_SIZE,
                request.key.filter,
                &request.key.search,
            )
            .await;

            match result {
                Ok(page) => {
                    feed.update(|state| {
                        state.apply_page(&request, page);
                    });

                    // A short page can leave the first screen unfilled
                    if feed.with_untracked(|state| state.needs_backfill()) {
                        schedule_backfill(feed);
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch places: {}", e).into());
                    feed.update(|state| {
                        state.fail(&request, e.to_string());
                    });
                }
            }
        });
    }
}

/// Fetch another page shortly, after the removal animation settles
fn schedule_backfill(feed: RwSignal<FeedState>) {
    gloo_timers::callback::Timeout::new(BACKFILL_DELAY_MS, move || {
        if feed.with_untracked(|state| state.needs_backfill()) {
            load_next(feed);
        }
    })
    .forget();
}

#[component]
pub fn PlacesGrid(
    search: RwSignal<String>,
    filter: RwSignal<StatusFilter>,
    feed: RwSignal<FeedState>,
    /// Bumped by callers to force a reload of the current key
    refresh: RwSignal<u32>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let selected = state.selected_list;
    let lists = state.lists;

    // Message template of the active list, for composing deep links
    let template = Signal::derive(move || {
        let id = selected.get();
        lists
            .get()
            .iter()
            .find(|list| Some(list.id) == id)
            .map(|list| list.message_template.clone())
            .unwrap_or_default()
    });

    // Active query key; any change restarts the feed from page 1
    let query = create_memo(move |_| {
        selected.get().map(|list_id| QueryKey {
            list_id,
            filter: filter.get(),
            search: search.get(),
        })
    });

    create_effect(move |_| {
        refresh.get();
        if let Some(key) = query.get() {
            feed.update(|state| state.reset(key));
            load_next(feed);
        }
    });

    // Sentinel near the bottom triggers the next page
    let sentinel = create_node_ref::<html::Div>();

    create_effect(move |_| {
        if let Some(element) = sentinel.get() {
            observe_sentinel(&element, feed);
        }
    });

    // Scroll fallback for browsers where the observer misses
    create_effect(move |_| {
        attach_scroll_fallback(feed);
    });

    let state_for_status = state.clone();
    let handle_status = move |place_id: u64, status: PlaceStatus| {
        let mut change = None;
        feed.update(|feed_state| change = feed_state.apply_status(place_id, status));

        if change.is_none() {
            return;
        }

        let state = state_for_status.clone();
        spawn_local(async move {
            if let Err(e) = api::update_place_status(place_id, status).await {
                // The server kept the old status; restore it locally
                if let Some(change) = change {
                    feed.update(|feed_state| feed_state.revert_status(change));
                }
                state.show_error(&format!("Failed to update status: {}", e));
            }
        });

        if feed.with_untracked(|feed_state| feed_state.needs_backfill()) {
            schedule_backfill(feed);
        }
    };

    view! {
        <div>
            {move || {
                let search_term = search.get();
                let active_filter = filter.get();

                feed.with(|feed_state| {
                    if feed_state.is_initial_load() {
                        return view! { <SkeletonGrid /> }.into_view();
                    }

                    if feed_state.places().is_empty() {
                        if let Some(message) = feed_state.error() {
                            let message = message.to_string();
                            return view! {
                                <ErrorPanel message=message on_retry=move || load_next(feed) />
                            }
                            .into_view();
                        }

                        return view! {
                            <EmptyState
                                filter=active_filter
                                searching=!search_term.trim().is_empty()
                            />
                        }
                        .into_view();
                    }

                    let cards = visible_places(feed_state.places(), &search_term, active_filter)
                        .into_iter()
                        .map(|place| {
                            let place = place.clone();
                            let id = place.id;
                            let on_status = handle_status.clone();

                            view! {
                                <PlaceCard
                                    place=place
                                    template=template
                                    on_status=move |status| on_status(id, status)
                                />
                            }
                        })
                        .collect_view();

                    view! {
                        <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-4">{cards}</div>

                        // Errors while older pages are still on screen
                        {feed_state.error().map(|message| {
                            let message = message.to_string();
                            view! {
                                <div class="flex items-center justify-between mt-4 px-4 py-3 bg-red-50 text-red-700
                                            dark:bg-red-900/30 dark:text-red-400 rounded-lg text-sm">
                                    <span>{message}</span>
                                    <button
                                        on:click=move |_| load_next(feed)
                                        class="font-medium underline"
                                    >
                                        "Retry"
                                    </button>
                                </div>
                            }
                        })}

                        {feed_state.is_loading().then(|| view! {
                            <div class="flex justify-center py-6">
                                <InlineLoading />
                            </div>
                        })}

                        {(!feed_state.has_next() && !feed_state.places().is_empty()).then(|| view! {
                            <p class="text-center text-sm text-gray-400 py-6">
                                "You have reached the end of this list"
                            </p>
                        })}
                    }
                    .into_view()
                })
            }}

            // Infinite scroll sentinel
            <div node_ref=sentinel class="h-px" aria-hidden="true" />
        </div>
    }
}

/// Full-width error card with a retry action
#[component]
fn ErrorPanel(
    #[prop(into)]
    message: String,
    on_retry: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <div class="text-center py-12">
            <div class="text-4xl mb-3">"⚠️"</div>
            <p class="text-gray-600 dark:text-gray-300 mb-1">"Could not load places"</p>
            <p class="text-sm text-gray-400 mb-4">{message}</p>
            <button
                on:click=move |_| on_retry()
                class="px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg
                       font-medium transition-colors"
            >
                "Try Again"
            </button>
        </div>
    }
}

/// Per-filter empty message
#[component]
fn EmptyState(filter: StatusFilter, searching: bool) -> impl IntoView {
    let message = if searching {
        "No places match your search"
    } else {
        match filter {
            StatusFilter::NotConnected => "Nothing left to check here",
            StatusFilter::Connected => "No connected places yet",
            StatusFilter::Unsupported => "No unsupported places",
            StatusFilter::All => "This list has no places",
        }
    };

    view! {
        <div class="text-center py-12">
            <div class="text-4xl mb-3">"📭"</div>
            <p class="text-gray-500 dark:text-gray-400">{message}</p>
        </div>
    }
}

fn observe_sentinel(element: &web_sys::Element, feed: RwSignal<FeedState>) {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        let intersecting = entries.iter().any(|entry| {
            entry
                .dyn_ref::<web_sys::IntersectionObserverEntry>()
                .map(|entry| entry.is_intersecting())
                .unwrap_or(false)
        });

        if intersecting {
            load_next(feed);
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_root_margin("200px");
    options.set_threshold(&JsValue::from(0.1));

    if let Ok(observer) =
        web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    {
        observer.observe(element);
    }
    callback.forget();
}

fn attach_scroll_fallback(feed: RwSignal<FeedState>) {
    if let Some(window) = web_sys::window() {
        let callback = Closure::wrap(Box::new(move || {
            if near_page_bottom() {
                load_next(feed);
            }
        }) as Box<dyn FnMut()>);

        let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        callback.forget();
    }
}

/// Whether the viewport is close enough to the document end to load more
fn near_page_bottom() -> bool {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return false,
    };

    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|document| document.document_element())
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(f64::MAX);

    scroll_y + viewport >= document_height - 300.0
}

//! Add List Dialog
//!
//! Collects a name, a message template and a JSON file of places, then
//! creates the list on the server. The file picker stays disabled until
//! both text fields are filled in.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::api::types::CreateListRequest;
use crate::state::global::GlobalState;
use crate::upload;

#[component]
pub fn AddListDialog(on_close: impl Fn() + 'static + Clone) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (template, set_template) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let ready = move || !name.get().trim().is_empty() && !template.get().trim().is_empty();

    // Clone on_close for each place it's used
    let on_close_for_file = on_close.clone();
    let on_close_for_x = on_close.clone();
    let on_close_for_cancel = on_close;

    let state_for_file = state;
    let handle_file = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();

        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                // Reset so picking the same file again re-fires change
                input.set_value("");

                set_error.set(None);
                set_submitting.set(true);

                let state_clone = state_for_file.clone();
                let on_close_inner = on_close_for_file.clone();
                let file_reader = web_sys::FileReader::new().unwrap();

                let onload = {
                    let file_reader = file_reader.clone();
                    wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web_sys::Event| {
                        let text = file_reader
                            .result()
                            .ok()
                            .and_then(|value| value.as_string())
                            .unwrap_or_default();

                        match upload::parse_places(&text) {
                            Ok(places) => {
                                let request = CreateListRequest {
                                    name: name.get_untracked().trim().to_string(),
                                    message_template: template.get_untracked(),
                                    places,
                                };

                                let state_inner = state_clone.clone();
                                let on_close_done = on_close_inner.clone();
                                spawn_local(async move {
                                    match api::create_list(&request).await {
                                        Ok(list) => {
                                            state_inner.upsert_list(list.clone());
                                            state_inner.select_list(list.id);
                                            state_inner.show_success("List created successfully");
                                            on_close_done();

                                            // Sync the collection with the server
                                            if let Ok(lists) = api::fetch_lists().await {
                                                state_inner.lists.set(lists);
                                            }
                                        }
                                        Err(e) => {
                                            set_error.set(Some(format!(
                                                "Failed to upload list: {}",
                                                e
                                            )));
                                            set_submitting.set(false);
                                        }
                                    }
                                });
                            }
                            Err(e) => {
                                set_error.set(Some(e.to_string()));
                                set_submitting.set(false);
                            }
                        }
                    })
                        as Box<dyn FnMut(_)>)
                };

                file_reader.set_onload(Some(onload.as_ref().unchecked_ref()));
                onload.forget();

                let _ = file_reader.read_as_text(&file);
            }
        }
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-white dark:bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold">"New List"</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-gray-900 dark:hover:text-white"
                        aria-label="Close"
                    >
                        "✕"
                    </button>
                </div>

                <div class="space-y-4">
                    // Name
                    <div>
                        <label class="block text-sm text-gray-500 dark:text-gray-400 mb-2">"List Name"</label>
                        <input
                            type="text"
                            placeholder="e.g., Cairo cafes"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            class="w-full bg-gray-50 dark:bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-200 dark:border-gray-600 focus:border-emerald-500 focus:outline-none"
                        />
                    </div>

                    // Message template
                    <div>
                        <label class="block text-sm text-gray-500 dark:text-gray-400 mb-2">"Message Template"</label>
                        <textarea
                            rows=4
                            placeholder="Hi {name}! ..."
                            prop:value=move || template.get()
                            on:input=move |ev| set_template.set(event_target_value(&ev))
                            class="w-full bg-gray-50 dark:bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-200 dark:border-gray-600 focus:border-emerald-500 focus:outline-none"
                        />
                        <p class="text-xs text-gray-400 mt-1">
                            "Placeholders: {name}, {phone_number}, {facebook_url}"
                        </p>
                    </div>

                    // File upload, enabled once name and template are set
                    <label class=move || {
                        let base = "flex items-center justify-center px-4 py-6 rounded-lg
                                    border-2 border-dashed transition-colors";
                        if ready() && !submitting.get() {
                            format!("{} border-gray-300 dark:border-gray-600 hover:border-emerald-500 cursor-pointer", base)
                        } else {
                            format!("{} border-gray-200 dark:border-gray-700 opacity-50 cursor-not-allowed", base)
                        }
                    }>
                        <input
                            type="file"
                            accept=".json,application/json"
                            class="hidden"
                            on:change=handle_file
                            disabled=move || !ready() || submitting.get()
                        />
                        <span class="flex items-center gap-2 text-sm text-gray-500 dark:text-gray-400">
                            {move || if submitting.get() {
                                view! { <span class="loading-spinner w-4 h-4" /> }.into_view()
                            } else {
                                view! { <span>"📁"</span> }.into_view()
                            }}
                            {move || if submitting.get() {
                                "Uploading..."
                            } else if ready() {
                                "Choose a JSON file of places"
                            } else {
                                "Fill in the name and template first"
                            }}
                        </span>
                    </label>

                    // Inline dialog error
                    {move || {
                        error.get().map(|message| view! {
                            <div class="px-3 py-2 bg-red-50 text-red-700 dark:bg-red-900/30 dark:text-red-400
                                        rounded-lg text-sm">
                                {message}
                            </div>
                        })
                    }}

                    <button
                        type="button"
                        on:click=move |_| on_close_for_cancel()
                        class="w-full px-4 py-3 bg-gray-100 hover:bg-gray-200 dark:bg-gray-700 dark:hover:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}

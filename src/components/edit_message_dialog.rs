//! Edit Message Dialog
//!
//! Edits the active list's message template and saves it to the server.
//! A successful save reloads the feed so server-rendered messages pick
//! up the new template.

use leptos::*;

use crate::api;
use crate::api::types::List;
use crate::components::loading::LoadingOverlay;
use crate::state::global::GlobalState;

#[component]
pub fn EditMessageDialog(
    list: List,
    on_saved: impl Fn() + 'static + Clone,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (template, set_template) = create_signal(list.message_template.clone());
    let (saving, set_saving) = create_signal(false);

    let list_id = list.id;
    let list_name = list.name;

    let on_close_for_submit = on_close.clone();
    let on_close_for_x = on_close.clone();
    let on_close_for_cancel = on_close;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let value = template.get();
        if value.trim().is_empty() {
            state.show_error("Message template cannot be empty");
            return;
        }

        set_saving.set(true);

        let state_clone = state.clone();
        let on_saved_inner = on_saved.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            match api::update_message_template(list_id, &value).await {
                Ok(updated) => {
                    state_clone.upsert_list(updated);
                    state_clone.show_success("Message template updated");
                    on_saved_inner();
                    on_close_inner();
                }
                Err(e) => {
                    state_clone.show_error(&e.to_string());
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-white dark:bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold">"Edit Message"</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-gray-900 dark:hover:text-white"
                        aria-label="Close"
                    >
                        "✕"
                    </button>
                </div>

                <LoadingOverlay loading=saving>
                <form on:submit=on_submit class="space-y-4">
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Template for " <span class="font-medium">{list_name}</span>
                    </p>

                    <textarea
                        rows=5
                        prop:value=move || template.get()
                        on:input=move |ev| set_template.set(event_target_value(&ev))
                        class="w-full bg-gray-50 dark:bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-200 dark:border-gray-600 focus:border-emerald-500 focus:outline-none"
                    />
                    <p class="text-xs text-gray-400">
                        "Placeholders: {name}, {phone_number}, {facebook_url}"
                    </p>

                    <div class="flex gap-3 pt-2">
                        <button
                            type="button"
                            on:click=move |_| on_close_for_cancel()
                            class="flex-1 px-4 py-3 bg-gray-100 hover:bg-gray-200 dark:bg-gray-700 dark:hover:bg-gray-600
                                   rounded-lg font-medium transition-colors"
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            disabled=move || saving.get()
                            class="flex-1 px-4 py-3 bg-emerald-600 hover:bg-emerald-700 disabled:bg-gray-400
                                   text-white rounded-lg font-medium transition-colors"
                        >
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
                </LoadingOverlay>
            </div>
        </div>
    }
}

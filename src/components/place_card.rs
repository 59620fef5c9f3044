//! Place Card Component
//!
//! One contact with its status and actions: copy the phone, open the
//! Facebook page, send the WhatsApp message, record connectivity.

use leptos::*;
use wasm_bindgen_futures::JsFuture;

use crate::api::types::{Place, PlaceStatus};
use crate::whatsapp;

fn status_pill_class(status: PlaceStatus) -> &'static str {
    match status {
        PlaceStatus::Connected => {
            "bg-emerald-100 text-emerald-700 dark:bg-emerald-900/40 dark:text-emerald-400"
        }
        PlaceStatus::NotConnected => {
            "bg-amber-100 text-amber-700 dark:bg-amber-900/40 dark:text-amber-400"
        }
        PlaceStatus::Unsupported => "bg-gray-100 text-gray-500 dark:bg-gray-700 dark:text-gray-400",
    }
}

#[component]
pub fn PlaceCard(
    place: Place,
    #[prop(into)]
    template: Signal<String>,
    on_status: impl Fn(PlaceStatus) + 'static + Clone,
) -> impl IntoView {
    let (copied, set_copied) = create_signal(false);

    let status = place.status;

    let phone_for_copy = place.phone.clone();
    let copy_phone = move |_| {
        let phone = phone_for_copy.clone();
        spawn_local(async move {
            if let Some(window) = web_sys::window() {
                let promise = window.navigator().clipboard().write_text(&phone);
                if JsFuture::from(promise).await.is_ok() {
                    set_copied.set(true);
                    gloo_timers::callback::Timeout::new(2000, move || {
                        set_copied.set(false);
                    })
                    .forget();
                }
            }
        });
    };

    let place_for_send = place.clone();
    let send_message = move |_| {
        let message = whatsapp::message_for(&place_for_send, &template.get_untracked());
        let url = whatsapp::wa_me_url(&place_for_send.phone, &message);

        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(&url, "_blank");
        }
    };

    let on_status_for_connected = on_status.clone();
    let on_status_for_unsupported = on_status;

    view! {
        <article class="bg-white dark:bg-gray-800 rounded-xl p-4 border border-gray-200 dark:border-gray-700
                        hover:border-emerald-300 dark:hover:border-gray-600 transition-colors">
            // Name and status pill
            <div class="flex items-start justify-between gap-2">
                <h3 class="font-semibold truncate">{place.name.clone()}</h3>
                <span class=format!(
                    "text-xs px-2 py-0.5 rounded-full whitespace-nowrap {}",
                    status_pill_class(status)
                )>
                    {status.label()}
                </span>
            </div>

            // Phone with copy action
            <div class="flex items-center gap-2 mt-1 text-sm text-gray-500 dark:text-gray-400">
                <span dir="ltr">{place.phone.clone()}</span>
                <button
                    on:click=copy_phone
                    class="hover:text-emerald-600 transition-colors"
                    title="Copy phone number"
                    aria-label="Copy phone number"
                >
                    {move || if copied.get() { "✓ Copied" } else { "📋" }}
                </button>
            </div>

            // Actions
            <div class="flex items-center gap-2 mt-4">
                <button
                    on:click=send_message
                    disabled=status == PlaceStatus::Unsupported
                    class="flex-1 px-3 py-2 bg-emerald-600 hover:bg-emerald-700 disabled:bg-gray-300
                           dark:disabled:bg-gray-700 text-white rounded-lg text-sm font-medium transition-colors"
                >
                    "Send WhatsApp"
                </button>

                {place.facebook_url.clone().filter(|url| !url.is_empty()).map(|url| view! {
                    <a
                        href=url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-3 py-2 bg-gray-100 hover:bg-gray-200 dark:bg-gray-700 dark:hover:bg-gray-600
                               rounded-lg text-sm transition-colors"
                        title="Open Facebook page"
                        aria-label="Open Facebook page"
                    >
                        "f"
                    </a>
                })}
            </div>

            // Connectivity actions, only shown before the number is checked
            {(status == PlaceStatus::NotConnected).then(|| view! {
                <div class="flex items-center gap-2 mt-2">
                    <button
                        on:click=move |_| on_status_for_connected(PlaceStatus::Connected)
                        class="flex-1 px-3 py-1.5 text-sm rounded-lg border border-emerald-300 text-emerald-700
                               hover:bg-emerald-50 dark:border-emerald-800 dark:text-emerald-400
                               dark:hover:bg-emerald-900/30 transition-colors"
                    >
                        "✓ Connected"
                    </button>
                    <button
                        on:click=move |_| on_status_for_unsupported(PlaceStatus::Unsupported)
                        class="flex-1 px-3 py-1.5 text-sm rounded-lg border border-gray-300 text-gray-600
                               hover:bg-gray-50 dark:border-gray-600 dark:text-gray-400
                               dark:hover:bg-gray-700 transition-colors"
                    >
                        "✕ Unsupported"
                    </button>
                </div>
            })}
        </article>
    }
}

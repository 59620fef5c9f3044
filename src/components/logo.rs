//! Logo Component

use leptos::*;

/// Inline chat-bubble logo mark
#[component]
pub fn Logo(
    #[prop(default = 32)]
    size: u32,
) -> impl IntoView {
    view! {
        <svg
            width=size
            height=size
            viewBox="0 0 32 32"
            fill="none"
            aria-hidden="true"
        >
            <circle cx="16" cy="16" r="16" class="fill-emerald-500" />
            <path
                d="M16 7c-5 0-9 3.8-9 8.5 0 1.7.5 3.2 1.4 4.5L7 25l5.2-1.3c1.2.5 2.5.8 3.8.8 5 0 9-3.8 9-8.5S21 7 16 7z"
                class="fill-white"
            />
            <path
                d="M13 13.5c.4-.9 1-.9 1.4 0l.5 1.1c.2.4.1.9-.2 1.2l-.5.5c.6 1.2 1.6 2.2 2.8 2.8l.5-.5c.3-.3.8-.4 1.2-.2l1.1.5c.9.4.9 1 0 1.4-1 .5-2.2.6-3.2.2-2-.7-3.6-2.3-4.3-4.3-.4-1-.3-2.2.2-3.2z"
                class="fill-emerald-500"
            />
        </svg>
    }
}

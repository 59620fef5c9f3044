//! App Root Component
//!
//! Main application component with global providers and screen switching.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::Toast;
use crate::pages::{Dashboard, Welcome};
use crate::state::global::{provide_global_state, GlobalState, Screen};
use crate::state::theme::{provide_theme_state, ThemeState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();
    provide_theme_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = use_context::<ThemeState>().expect("ThemeState not found");

    // Ctrl/Cmd+Shift+T toggles the theme from anywhere
    register_theme_shortcut(theme);

    let screen = state.screen;

    view! {
        <div class="min-h-screen bg-gray-50 text-gray-900 dark:bg-gray-900 dark:text-white">
            {move || match screen.get() {
                Screen::Welcome => view! { <Welcome /> }.into_view(),
                Screen::Dashboard => view! { <Dashboard /> }.into_view(),
            }}

            // Toast notifications
            <Toast />
        </div>
    }
}

/// Global keydown listener for the theme shortcut
fn register_theme_shortcut(theme: ThemeState) {
    let closure = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
        let combo = (ev.ctrl_key() || ev.meta_key()) && ev.shift_key();
        if combo && ev.key().eq_ignore_ascii_case("t") {
            ev.prevent_default();
            theme.toggle_mode();
        }
    }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

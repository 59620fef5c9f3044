//! Theme Toggle Component
//!
//! Header control that flips between light and dark mode, with a small
//! settings panel for text direction and contrast.

use leptos::*;

use crate::state::theme::{ThemeMode, ThemeState};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_context::<ThemeState>().expect("ThemeState not found");

    let (panel_open, set_panel_open) = create_signal(false);

    let mode = theme.mode;
    let rtl = theme.rtl;
    let high_contrast = theme.high_contrast;

    let theme_for_click = theme.clone();
    let theme_for_style = theme.clone();
    let theme_for_panel = theme;

    view! {
        <div class="relative flex items-center gap-1">
            <button
                on:click=move |_| theme_for_click.toggle_mode()
                class="p-2 rounded-lg bg-gray-100 hover:bg-gray-200 dark:bg-gray-800 dark:hover:bg-gray-700 transition-colors"
                style=move || format!("transition-duration: {}ms", theme_for_style.transition_ms())
                title="Toggle theme (Ctrl+Shift+T)"
                aria-label="Toggle theme"
            >
                {move || match mode.get() {
                    ThemeMode::Light => "🌙",
                    ThemeMode::Dark => "☀️",
                }}
            </button>

            <button
                on:click=move |_| set_panel_open.update(|open| *open = !*open)
                class="p-2 rounded-lg bg-gray-100 hover:bg-gray-200 dark:bg-gray-800 dark:hover:bg-gray-700 transition-colors"
                title="Theme settings"
                aria-label="Theme settings"
                aria-expanded=move || panel_open.get().to_string()
            >
                "⚙️"
            </button>

            {move || panel_open.get().then(|| {
                let theme_for_light = theme_for_panel.clone();
                let theme_for_dark = theme_for_panel.clone();
                let theme_for_rtl = theme_for_panel.clone();
                let theme_for_contrast = theme_for_panel.clone();

                view! {
                    <div class="absolute end-0 top-12 w-64 bg-white dark:bg-gray-800 border border-gray-200
                                dark:border-gray-700 rounded-xl shadow-lg p-4 space-y-4 z-40">
                        <h3 class="text-sm font-semibold">"Theme Settings"</h3>

                        // Appearance
                        <div class="flex rounded-lg bg-gray-100 dark:bg-gray-700 p-1" role="radiogroup" aria-label="Appearance">
                            <button
                                on:click=move |_| {
                                    if mode.get_untracked() == ThemeMode::Dark {
                                        theme_for_light.toggle_mode();
                                    }
                                }
                                aria-checked=move || (mode.get() == ThemeMode::Light).to_string()
                                role="radio"
                                class=move || segment_class(mode.get() == ThemeMode::Light)
                            >
                                "☀️ Light"
                            </button>
                            <button
                                on:click=move |_| {
                                    if mode.get_untracked() == ThemeMode::Light {
                                        theme_for_dark.toggle_mode();
                                    }
                                }
                                aria-checked=move || (mode.get() == ThemeMode::Dark).to_string()
                                role="radio"
                                class=move || segment_class(mode.get() == ThemeMode::Dark)
                            >
                                "🌙 Dark"
                            </button>
                        </div>

                        <SwitchRow
                            label="Right-to-Left"
                            checked=rtl
                            on_toggle=move || theme_for_rtl.set_rtl(!rtl.get_untracked())
                        />
                        <SwitchRow
                            label="High Contrast"
                            checked=high_contrast
                            on_toggle=move || {
                                theme_for_contrast.set_high_contrast(!high_contrast.get_untracked())
                            }
                        />

                        <p class="text-xs text-gray-400 pt-3 border-t border-gray-200 dark:border-gray-700">
                            "Ctrl+Shift+T toggles the theme"
                        </p>
                    </div>
                }
            })}
        </div>
    }
}

fn segment_class(active: bool) -> String {
    let base = "flex-1 px-3 py-1.5 rounded-md text-sm font-medium transition-colors";
    if active {
        format!("{} bg-white dark:bg-gray-800 shadow-sm", base)
    } else {
        format!("{} text-gray-500 dark:text-gray-400", base)
    }
}

/// Labeled switch for one boolean preference
#[component]
fn SwitchRow(
    label: &'static str,
    #[prop(into)]
    checked: Signal<bool>,
    on_toggle: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between gap-6">
            <span class="text-sm font-medium">{label}</span>
            <button
                role="switch"
                aria-checked=move || checked.get().to_string()
                aria-label=label
                on:click=move |_| on_toggle()
                class=move || {
                    let base = "relative w-11 h-6 rounded-full transition-colors";
                    if checked.get() {
                        format!("{} bg-emerald-600", base)
                    } else {
                        format!("{} bg-gray-300 dark:bg-gray-600", base)
                    }
                }
            >
                <span class=move || {
                    let base = "absolute top-1 w-4 h-4 rounded-full bg-white transition-all";
                    if checked.get() {
                        format!("{} start-6", base)
                    } else {
                        format!("{} start-1", base)
                    }
                } />
            </button>
        </div>
    }
}

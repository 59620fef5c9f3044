//! Theme State
//!
//! Dark mode, text direction and accessibility flags for the whole app.
//! Startup resolution order: stored override, then the OS preference,
//! then the default. OS-level preference changes keep applying until the
//! user sets an explicit override.

use std::rc::Rc;

use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::storage::{
    KeyValueStore, LocalStore, StoreHandle, THEME_HIGH_CONTRAST_KEY, THEME_MODE_KEY, THEME_RTL_KEY,
};

/// Duration of the mode switch animation
const TRANSITION_MS: u32 = 300;

/// Languages rendered right-to-left
pub const RTL_LANGUAGES: &[&str] = &["ar", "he", "fa", "ur", "ku", "dv"];

/// Custom properties set on the document root for the light palette
const LIGHT_PALETTE: &[(&str, &str)] = &[
    ("--color-bg-primary", "#f9fafb"),
    ("--color-bg-surface", "#ffffff"),
    ("--color-text-primary", "#111827"),
    ("--color-text-secondary", "#4b5563"),
    ("--color-border", "#e5e7eb"),
    ("--color-accent", "#059669"),
];

/// Custom properties set on the document root for the dark palette
const DARK_PALETTE: &[(&str, &str)] = &[
    ("--color-bg-primary", "#111827"),
    ("--color-bg-surface", "#1f2937"),
    ("--color-text-primary", "#ffffff"),
    ("--color-text-secondary", "#9ca3af"),
    ("--color-border", "#374151"),
    ("--color-accent", "#10b981"),
];

fn palette(mode: ThemeMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        ThemeMode::Light => LIGHT_PALETTE,
        ThemeMode::Dark => DARK_PALETTE,
    }
}

/// Color mode for the whole document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Whether a language tag reads right-to-left
///
/// Accepts full BCP 47 tags; only the primary subtag matters.
pub fn is_rtl_language(language: &str) -> bool {
    let primary = language.split('-').next().unwrap_or(language);
    RTL_LANGUAGES.contains(&primary)
}

/// Resolve the starting mode from a stored override and the OS preference
pub fn resolve_mode(stored: Option<&str>, os_prefers_dark: bool) -> ThemeMode {
    match stored.and_then(ThemeMode::parse) {
        Some(mode) => mode,
        None if os_prefers_dark => ThemeMode::Dark,
        None => ThemeMode::Light,
    }
}

/// Resolve a boolean flag from a stored override and an OS default
pub fn resolve_flag(stored: Option<&str>, os_default: bool) -> bool {
    match stored {
        Some(value) => value == "true",
        None => os_default,
    }
}

/// Flip the mode and persist the explicit choice
pub fn toggle_and_persist(store: &dyn KeyValueStore, current: ThemeMode) -> ThemeMode {
    let next = current.toggled();
    store.set(THEME_MODE_KEY, next.as_str());
    next
}

/// Process-wide theme service provided to all components
#[derive(Clone)]
pub struct ThemeState {
    store: StoreHandle,
    /// Active color mode
    pub mode: RwSignal<ThemeMode>,
    /// Right-to-left layout
    pub rtl: RwSignal<bool>,
    /// High contrast colors
    pub high_contrast: RwSignal<bool>,
    /// OS-level reduced motion preference, never persisted
    pub reduced_motion: RwSignal<bool>,
}

impl ThemeState {
    /// Build the theme state from stored overrides and OS preferences
    ///
    /// Without a stored override, text direction follows the browser
    /// language.
    pub fn load(store: StoreHandle) -> Self {
        let mode = resolve_mode(
            store.get(THEME_MODE_KEY).as_deref(),
            media_query_matches("(prefers-color-scheme: dark)"),
        );
        let rtl = resolve_flag(
            store.get(THEME_RTL_KEY).as_deref(),
            browser_language().map(|lang| is_rtl_language(&lang)).unwrap_or(false),
        );
        let high_contrast = resolve_flag(
            store.get(THEME_HIGH_CONTRAST_KEY).as_deref(),
            media_query_matches("(prefers-contrast: more)"),
        );
        let reduced_motion = media_query_matches("(prefers-reduced-motion: reduce)");

        Self {
            store,
            mode: create_rw_signal(mode),
            rtl: create_rw_signal(rtl),
            high_contrast: create_rw_signal(high_contrast),
            reduced_motion: create_rw_signal(reduced_motion),
        }
    }

    /// Toggle dark mode, animating the switch and persisting the choice
    pub fn toggle_mode(&self) {
        begin_transition();

        let next = toggle_and_persist(self.store.as_ref(), self.mode.get_untracked());
        self.mode.set(next);
        self.apply_to_document();
    }

    pub fn set_rtl(&self, rtl: bool) {
        self.rtl.set(rtl);
        self.store
            .set(THEME_RTL_KEY, if rtl { "true" } else { "false" });
        self.apply_to_document();
    }

    pub fn set_high_contrast(&self, on: bool) {
        self.high_contrast.set(on);
        self.store
            .set(THEME_HIGH_CONTRAST_KEY, if on { "true" } else { "false" });
        self.apply_to_document();
    }

    /// Animation duration honoring the reduced motion preference
    pub fn transition_ms(&self) -> u32 {
        if self.reduced_motion.get() {
            0
        } else {
            TRANSITION_MS
        }
    }

    /// Write the current theme onto the document root
    pub fn apply_to_document(&self) {
        if let Some(root) = document_root() {
            let class_list = root.class_list();

            match self.mode.get_untracked() {
                ThemeMode::Dark => {
                    let _ = class_list.add_1("dark");
                }
                ThemeMode::Light => {
                    let _ = class_list.remove_1("dark");
                }
            }

            if self.high_contrast.get_untracked() {
                let _ = class_list.add_1("high-contrast");
            } else {
                let _ = class_list.remove_1("high-contrast");
            }

            if self.reduced_motion.get_untracked() {
                let _ = class_list.add_1("reduced-motion");
            } else {
                let _ = class_list.remove_1("reduced-motion");
            }

            // Document language follows direction; the UI has no separate
            // language picker
            if self.rtl.get_untracked() {
                let _ = root.set_attribute("dir", "rtl");
                let _ = root.set_attribute("lang", "ar");
            } else {
                let _ = root.set_attribute("dir", "ltr");
                let _ = root.set_attribute("lang", "en");
            }

            let vars = palette(self.mode.get_untracked());
            if let Some(html) = root.dyn_ref::<web_sys::HtmlElement>() {
                let style = html.style();
                for (name, value) in vars {
                    let _ = style.set_property(name, value);
                }
            }

            // Browser chrome color follows the page background
            if let Some(meta) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| {
                    document
                        .query_selector("meta[name='theme-color']")
                        .ok()
                        .flatten()
                })
            {
                let background = vars
                    .iter()
                    .find(|(name, _)| *name == "--color-bg-primary")
                    .map(|(_, value)| *value)
                    .unwrap_or("#ffffff");
                let _ = meta.set_attribute("content", background);
            }
        }
    }

    /// Follow OS preference changes until the user stores an override
    fn listen_for_os_changes(&self) {
        let state = self.clone();
        on_media_change("(prefers-color-scheme: dark)", move |matches| {
            if state.store.get(THEME_MODE_KEY).is_none() {
                state.mode.set(if matches {
                    ThemeMode::Dark
                } else {
                    ThemeMode::Light
                });
                state.apply_to_document();
            }
        });

        let state = self.clone();
        on_media_change("(prefers-reduced-motion: reduce)", move |matches| {
            state.reduced_motion.set(matches);
            state.apply_to_document();
        });
    }
}

/// Provide the theme to the component tree and apply it once
pub fn provide_theme_state() {
    let state = ThemeState::load(Rc::new(LocalStore));
    state.apply_to_document();
    state.listen_for_os_changes();
    provide_context(state);
}

fn document_root() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

/// The browser's preferred language tag, e.g. "ar-EG"
fn browser_language() -> Option<String> {
    web_sys::window()?.navigator().language()
}

/// Evaluate a media query, false when the API is unavailable
fn media_query_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

/// Subscribe to changes of a media query for the page's lifetime
fn on_media_change(query: &str, handler: impl Fn(bool) + 'static) {
    if let Some(list) = web_sys::window().and_then(|w| w.match_media(query).ok().flatten()) {
        let closure = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
            handler(event.matches());
        }) as Box<dyn FnMut(_)>);

        let _ = list.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Add the transition class for the duration of the mode switch
fn begin_transition() {
    if let Some(root) = document_root() {
        let _ = root.class_list().add_1("theme-transition");

        gloo_timers::callback::Timeout::new(TRANSITION_MS, move || {
            if let Some(root) = document_root() {
                let _ = root.class_list().remove_1("theme-transition");
            }
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_resolve_mode_prefers_stored_value() {
        assert_eq!(resolve_mode(Some("dark"), false), ThemeMode::Dark);
        assert_eq!(resolve_mode(Some("light"), true), ThemeMode::Light);
    }

    #[test]
    fn test_palettes_define_the_same_properties() {
        let light: Vec<&str> = palette(ThemeMode::Light).iter().map(|(n, _)| *n).collect();
        let dark: Vec<&str> = palette(ThemeMode::Dark).iter().map(|(n, _)| *n).collect();
        assert_eq!(light, dark);
        assert!(light.contains(&"--color-bg-primary"));
    }

    #[test]
    fn test_resolve_mode_falls_back_to_os_then_default() {
        assert_eq!(resolve_mode(None, true), ThemeMode::Dark);
        assert_eq!(resolve_mode(None, false), ThemeMode::Light);
        // Junk in storage behaves like no override
        assert_eq!(resolve_mode(Some("purple"), true), ThemeMode::Dark);
    }

    #[test]
    fn test_resolve_flag_parses_stored_value() {
        assert!(resolve_flag(Some("true"), false));
        assert!(!resolve_flag(Some("false"), true));
        assert!(resolve_flag(None, true));
    }

    #[test]
    fn test_double_toggle_returns_to_start_and_persists() {
        let store = MemoryStore::new();

        let once = toggle_and_persist(&store, ThemeMode::Light);
        assert_eq!(once, ThemeMode::Dark);
        assert_eq!(store.get(THEME_MODE_KEY), Some("dark".to_string()));

        let twice = toggle_and_persist(&store, once);
        assert_eq!(twice, ThemeMode::Light);
        assert_eq!(store.get(THEME_MODE_KEY), Some("light".to_string()));
    }

    #[test]
    fn test_rtl_language_detection() {
        assert!(is_rtl_language("ar"));
        assert!(is_rtl_language("he"));
        assert!(!is_rtl_language("en"));
        assert!(!is_rtl_language("fr"));

        // Region subtags are ignored
        assert!(is_rtl_language("ar-EG"));
        assert!(is_rtl_language("fa-IR"));
        assert!(!is_rtl_language("en-US"));
    }
}

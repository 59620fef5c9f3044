//! State Management
//!
//! Global application state, theme service and the place feed model.

pub mod global;
pub mod places;
pub mod session;
pub mod theme;

pub use global::{provide_global_state, GlobalState, Screen};
pub use places::{visible_places, FeedState, PageRequest, QueryKey, StatusChange, PAGE_SIZE};
pub use session::{clear_session, greeting, load_session, save_session, Session};
pub use theme::{provide_theme_state, ThemeMode, ThemeState};

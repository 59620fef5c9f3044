//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod add_list_dialog;
pub mod edit_message_dialog;
pub mod header;
pub mod list_selector;
pub mod loading;
pub mod logo;
pub mod place_card;
pub mod places_grid;
pub mod search_bar;
pub mod stats_card;
pub mod status_filter;
pub mod theme_toggle;
pub mod toast;

pub use add_list_dialog::AddListDialog;
pub use edit_message_dialog::EditMessageDialog;
pub use header::Header;
pub use list_selector::ListSelector;
pub use loading::{InlineLoading, Loading, LoadingOverlay, PlaceCardSkeleton, SkeletonGrid};
pub use logo::Logo;
pub use place_card::PlaceCard;
pub use places_grid::PlacesGrid;
pub use search_bar::SearchBar;
pub use stats_card::StatsCard;
pub use status_filter::StatusFilterBar;
pub use theme_toggle::ThemeToggle;
pub use toast::Toast;

//! Pages
//!
//! Top-level page components for each screen.

pub mod dashboard;
pub mod welcome;

pub use dashboard::Dashboard;
pub use welcome::Welcome;

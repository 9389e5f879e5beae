//! HTTP API handlers.

pub mod health;
pub mod history;
pub mod leaderboard;
pub mod profile;
pub mod ui;

pub use health::health_routes;
pub use history::get_history;
pub use leaderboard::{get_leaderboard, RankedEntry};
pub use profile::get_profile;
pub use ui::{serve_app_js, serve_index};

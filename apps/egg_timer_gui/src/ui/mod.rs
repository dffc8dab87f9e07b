//! UI layer: app shell, egg painter, and theme.

pub mod app;
pub mod egg;
pub mod theme;

pub use app::EggTimerApp;

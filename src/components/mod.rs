//! UI Components
//!
//! Reusable Leptos components for the app shell.

pub mod nav;
pub mod toast;

pub use nav::Nav;
pub use toast::Toast;

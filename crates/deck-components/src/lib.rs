//! # deck-components
//!
//! Leptos UI components for the chart deck page.

pub mod card;
pub mod dashboard;

pub use card::*;
pub use dashboard::*;

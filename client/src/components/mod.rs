//! Reusable UI components.

pub mod filter_bar;
pub mod nav_bar;

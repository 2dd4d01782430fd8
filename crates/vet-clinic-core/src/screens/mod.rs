//! Fetch-driven screens.
//!
//! Each screen owns a [`Fetcher`](crate::fetch::Fetcher) and turns its state
//! into a [`ScreenView`](crate::render::ScreenView). Screens do not depend on
//! each other; the host decides when to show or close them.

mod employees;
mod pet_history;

pub use employees::*;
pub use pet_history::*;

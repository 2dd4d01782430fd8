//! Declarative views and their plain-text rendering.
//!
//! Screens turn their [`FetchState`] into a [`ScreenView`]; hosts either walk
//! the view structure or call [`RenderText::render_text`].

mod accordion;
mod table;

pub use accordion::*;
pub use table::*;

use crate::fetch::FetchState;

/// Text shown while a screen's request is in flight.
pub const LOADING_TEXT: &str = "Cargando datos...";

/// Prefix of the message shown when a screen's request failed.
pub const ERROR_PREFIX: &str = "Error al cargar los datos";

/// The user-visible failure message for a failure reason.
pub fn error_message(reason: &str) -> String {
    format!("{}: {}", ERROR_PREFIX, reason)
}

/// Anything that renders to plain text.
pub trait RenderText {
    fn render_text(&self) -> String;
}

/// What a fetch-driven screen shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView<V> {
    /// Nothing requested
    Blank,
    /// Loading indicator only
    Loading,
    /// The error message only, never partial content
    Error(String),
    Content(V),
}

impl<V> ScreenView<V> {
    /// Build the view for a fetch state.
    pub fn from_state<T, F>(state: FetchState<T>, build: F) -> Self
    where
        F: FnOnce(T) -> V,
    {
        match state {
            FetchState::Idle => ScreenView::Blank,
            FetchState::Loading => ScreenView::Loading,
            FetchState::Loaded(value) => ScreenView::Content(build(value)),
            FetchState::Failed(reason) => ScreenView::Error(error_message(&reason)),
        }
    }

    pub fn content(&self) -> Option<&V> {
        match self {
            ScreenView::Content(view) => Some(view),
            _ => None,
        }
    }

    pub fn content_mut(&mut self) -> Option<&mut V> {
        match self {
            ScreenView::Content(view) => Some(view),
            _ => None,
        }
    }

    pub fn error_text(&self) -> Option<&str> {
        match self {
            ScreenView::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl<V: RenderText> RenderText for ScreenView<V> {
    fn render_text(&self) -> String {
        match self {
            ScreenView::Blank => String::new(),
            ScreenView::Loading => LOADING_TEXT.to_string(),
            ScreenView::Error(message) => message.clone(),
            ScreenView::Content(view) => view.render_text(),
        }
    }
}

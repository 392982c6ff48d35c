// crates/travel-core/src/controller.rs

//! # Interaction Controller
//!
//! The widget reduced to a closed command set applied to explicit state:
//!
//! ```text
//! Search: input blank?  -> Warning, state unchanged
//!         load failed?  -> logged, state unchanged
//!         otherwise     -> normalize + query + render, view replaced
//! Reset:  input and view cleared -> Info
//! ```
//!
//! Front ends own the real UI. They copy the input field into [`UiState`],
//! send a [`Command`], then paint the returned state and show the notice.

use crate::loader::DatasetSource;
use crate::render::{render, View};
use crate::time::Clock;
use crate::traits::RecommendationSearch;

pub const EMPTY_SEARCH_WARNING: &str = "Please enter a search term.";
pub const RESET_CONFIRMATION: &str = "Search results cleared.";

/// Everything the widget displays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Contents of the search field.
    pub input: String,
    /// Contents of the output area.
    pub view: View,
}

impl UiState {
    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            view: View::Cleared,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Search,
    Reset,
}

/// A message for the user, shown outside the output area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Warning(&'static str),
    Info(&'static str),
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Warning(m) | Notice::Info(m) => m,
        }
    }
}

/// Result of handling one command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: UiState,
    pub notice: Option<Notice>,
}

impl Transition {
    fn quiet(state: UiState) -> Self {
        Self { state, notice: None }
    }
}

/// Runs commands against a dataset source and a clock.
pub struct Controller<S, C> {
    source: S,
    clock: C,
}

impl<S: DatasetSource, C: Clock> Controller<S, C> {
    pub fn new(source: S, clock: C) -> Self {
        Self { source, clock }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn handle(&self, state: UiState, command: Command) -> Transition {
        match command {
            Command::Search => self.search(state),
            Command::Reset => Self::reset(),
        }
    }

    fn search(&self, mut state: UiState) -> Transition {
        let term = state.input.trim();
        if term.is_empty() {
            return Transition {
                state,
                notice: Some(Notice::Warning(EMPTY_SEARCH_WARNING)),
            };
        }

        // Reloaded on every search.
        let db = match self.source.load() {
            Ok(db) => db,
            Err(e) => {
                log::warn!("error fetching travel recommendations: {e}");
                return Transition::quiet(state);
            }
        };

        let results = db.recommend(term);
        state.view = render(&results, &self.clock);
        Transition::quiet(state)
    }

    fn reset() -> Transition {
        Transition {
            state: UiState::default(),
            notice: Some(Notice::Info(RESET_CONFIRMATION)),
        }
    }
}

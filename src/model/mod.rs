//! Widget model - the complete state of one tokens input
//!
//! Following the Elm Architecture, the model is plain data. All changes go
//! through [`crate::update::update`].

pub mod mode;

pub use mode::{action_label, evaluate, Mode, TaggingState};

use crate::buffer::TokenBuffer;
use crate::palette::TokenColorPalette;
use crate::token::TokenSet;

/// Title shown above the field when the host supplies none
pub const DEFAULT_TITLE: &str = "Assign Tags to ...";

/// State of one tokens input instance
#[derive(Debug, Clone)]
pub struct TokensModel {
    /// Typed text and committed chips
    pub buffer: TokenBuffer,
    /// Swatches for new tokens
    pub palette: TokenColorPalette,
    /// Universe of tokens the host offers, refreshed before each update
    pub available: TokenSet,
    /// Mode from the most recent evaluation
    pub mode: Mode,
    /// Heading text
    pub title: String,
}

impl Default for TokensModel {
    fn default() -> Self {
        Self::new()
    }
}

impl TokensModel {
    pub fn new() -> Self {
        Self {
            buffer: TokenBuffer::new(),
            palette: TokenColorPalette::default(),
            available: TokenSet::new(),
            mode: Mode::default(),
            title: DEFAULT_TITLE.to_string(),
        }
    }

    /// Model offering `available` with nothing committed yet
    pub fn with_available(available: TokenSet) -> Self {
        Self {
            available,
            ..Self::new()
        }
    }

    pub fn state(&self) -> TaggingState {
        self.mode.state
    }

    /// Committed tokens
    pub fn tokens(&self) -> TokenSet {
        self.buffer.tokens()
    }

    pub fn current_text(&self) -> String {
        self.buffer.current_text()
    }

    /// Mode the current buffer and available set call for
    pub fn compute_mode(&self) -> Mode {
        evaluate(
            &self.buffer.current_text(),
            &self.available,
            &self.buffer.tokens(),
        )
    }
}

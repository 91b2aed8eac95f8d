//! Message types for the Elm-style architecture
//!
//! Every user action and host instruction reaching the widget is one of
//! these messages.

use crate::color::Color;
use crate::token::Token;

/// Messages handled by [`crate::update::update`]
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // === Text Input ===
    /// Replace the free text (host text field changed)
    TextChanged(String),
    /// Type a character; newline commits, tab is swallowed
    InsertChar(char),
    /// Backspace: last character, or the trailing chip when no text is left
    DeleteBackward,

    // === Commit ===
    /// Turn the current text into a token (Enter)
    Commit,
    /// Suggestion list item clicked
    SelectSuggestion(Token),
    /// "Create new token" clicked with a swatch color
    RequestNewFromColor(Color),
    /// Remove a committed chip by title
    RemoveToken(String),

    // === Palette ===
    /// Swatch clicked
    SelectColor(usize),
    /// Replace the palette (empty keeps the current one)
    SetColors(Vec<Color>),

    // === Host ===
    /// Replace the heading text
    SetTitle(String),
    /// Re-evaluate the mode, e.g. after the available tokens changed
    Refresh,
}

//! Error kinds for token and palette operations
//!
//! None of these ever reach the end user. The update loop logs them and
//! degrades to "nothing happened".

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token creation from text that is blank after trimming
    #[error("token title is empty")]
    EmptyTitle,

    /// Palette selection outside `0..len`
    #[error("color index {index} out of range for palette of {len}")]
    InvalidIndex { index: usize, len: usize },

    /// Hex string that is not `#RGB`, `#RRGGBB` or `#AARRGGBB`
    #[error("invalid color format: {0}")]
    InvalidColor(String),
}

//! Tagging mode - which panel the widget shows for the current text

use crate::token::{Token, TokenSet};

/// Which panel the host should show under the text field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaggingState {
    /// Nothing typed, browsing the suggestion list
    #[default]
    Initial,
    /// Typed text matches no available token, offering the color picker
    NewToken,
    /// Typed text is exactly the title of an available, uncommitted token
    ExistingToken,
}

/// Everything the host needs to render the current mode
#[derive(Debug, Clone, Default)]
pub struct Mode {
    pub state: TaggingState,
    /// Suggestion list, descending by title
    pub suggestions: Vec<Token>,
    /// Label for the create-new-token button
    pub action_label: String,
}

// Token identity is its title, but a recolored suggestion still has to
// reach the host, so suggestions compare by title and color here.
impl PartialEq for Mode {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
            && self.action_label == other.action_label
            && self.suggestions.len() == other.suggestions.len()
            && self
                .suggestions
                .iter()
                .zip(&other.suggestions)
                .all(|(a, b)| a == b && a.color() == b.color())
    }
}

impl Eq for Mode {}

/// Label shown on the create button for the given text
pub fn action_label(text: &str) -> String {
    format!("Create new token: `{}`", text.trim())
}

/// Compute the mode for `text` given the available and committed tokens
///
/// Matching is exact and case-sensitive on the trimmed text.
pub fn evaluate(text: &str, available: &TokenSet, committed: &TokenSet) -> Mode {
    let name = text.trim();
    let label = action_label(name);

    if !name.is_empty() {
        if let Some(existing) = available.get(name).filter(|_| !committed.contains(name)) {
            return Mode {
                state: TaggingState::ExistingToken,
                suggestions: vec![existing.clone()],
                action_label: label,
            };
        }
    }

    let state = if name.is_empty() {
        TaggingState::Initial
    } else {
        TaggingState::NewToken
    };
    let mut suggestions: Vec<Token> = available.difference(committed).into_iter().collect();
    suggestions.reverse();

    Mode {
        state,
        suggestions,
        action_label: label,
    }
}

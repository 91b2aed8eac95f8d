//! Command types for the Elm-style architecture
//!
//! Commands are the notifications an update wants published. The runtime
//! delivers them to the host delegate in order.

use crate::color::Color;
use crate::model::{Mode, TaggingState};
use crate::palette::PaletteSelection;
use crate::token::{Token, TokenSet};

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// The panel to show, or its contents, changed
    ModeChanged {
        state: TaggingState,
        suggestions: Vec<Token>,
        action_label: String,
    },
    /// Authoritative committed token set after a change
    TokensChanged(TokenSet),
    /// Preferred widget size may have changed
    ContentSizeChanged,
    /// Swatch list replaced or extended
    PaletteChanged(Vec<Color>),
    /// Selected swatch moved
    PaletteSelectionChanged(PaletteSelection),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands, dropping `None`s
    ///
    /// Collapses to the single command (or `None`) when there is no need
    /// for a batch.
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    pub fn mode_changed(mode: &Mode) -> Self {
        Cmd::ModeChanged {
            state: mode.state,
            suggestions: mode.suggestions.clone(),
            action_label: mode.action_label.clone(),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Cmd::None)
    }

    /// Flatten nested batches into delivery order
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            cmd => vec![cmd],
        }
    }

    /// Convert Option<Cmd> with None to Cmd::None
    pub fn from_option(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }

    /// `None` becomes `Option::None`
    pub fn into_option(self) -> Option<Cmd> {
        if self.is_none() {
            None
        } else {
            Some(self)
        }
    }
}

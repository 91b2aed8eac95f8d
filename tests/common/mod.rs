//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use tokens_input::model::{TaggingState, TokensModel};
use tokens_input::palette::PaletteSelection;
use tokens_input::runtime::{HostConfig, TokenSource, TokensDelegate, TokensView};
use tokens_input::token::{Token, TokenSet};
use tokens_input::{Cmd, Color};

pub fn token(title: &str, hex: &str) -> Token {
    Token::from_hex(title, hex).unwrap()
}

/// `bug` (red) and `feature` (blue)
pub fn bug_and_feature() -> TokenSet {
    vec![token("bug", "#ff0000"), token("feature", "#0000ff")].into()
}

/// Model offering `available`, already settled into the browse list
pub fn test_model(available: TokenSet) -> TokensModel {
    let mut model = TokensModel::with_available(available);
    model.mode = model.compute_mode();
    model
}

pub fn suggestion_titles(model: &TokensModel) -> Vec<String> {
    model
        .mode
        .suggestions
        .iter()
        .map(|t| t.title().to_string())
        .collect()
}

pub fn token_titles(tokens: &TokenSet) -> Vec<String> {
    tokens.titles().map(str::to_string).collect()
}

/// Every `TokensChanged` payload inside a command
pub fn tokens_changed(cmd: &Option<Cmd>) -> Vec<TokenSet> {
    let Some(cmd) = cmd.clone() else {
        return Vec::new();
    };
    cmd.flatten()
        .into_iter()
        .filter_map(|c| match c {
            Cmd::TokensChanged(set) => Some(set),
            _ => None,
        })
        .collect()
}

/// Notification log entry
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Mode(TaggingState, Vec<String>, String),
    Tokens(Vec<String>),
    Size,
    Swatch(usize, usize),
    /// Swatch count after the palette changed
    Palette(usize),
}

/// Host that serves fixed tokens and records everything it is told
#[derive(Default)]
pub struct RecordingHost {
    pub available: TokenSet,
    pub initial: TokenSet,
    pub config: HostConfig,
    pub events: Vec<Event>,
    /// Owner record, persisted from `tokens_changed`
    pub saved: TokenSet,
}

impl RecordingHost {
    pub fn new(available: TokenSet) -> Self {
        Self {
            available,
            ..Self::default()
        }
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

impl TokenSource for RecordingHost {
    fn available_tokens(&self) -> TokenSet {
        self.available.clone()
    }

    fn initial_tokens(&self) -> TokenSet {
        self.initial.clone()
    }

    fn host_config(&self) -> HostConfig {
        self.config.clone()
    }
}

impl TokensDelegate for RecordingHost {
    fn mode_changed(&mut self, state: TaggingState, suggestions: &[Token], action_label: &str) {
        self.events.push(Event::Mode(
            state,
            suggestions.iter().map(|t| t.title().to_string()).collect(),
            action_label.to_string(),
        ));
    }

    fn tokens_changed(&mut self, tokens: &TokenSet) {
        self.saved = tokens.clone();
        self.events.push(Event::Tokens(token_titles(tokens)));
    }

    fn content_size_changed(&mut self) {
        self.events.push(Event::Size);
    }

    fn palette_changed(&mut self, colors: &[Color]) {
        self.events.push(Event::Palette(colors.len()));
    }

    fn palette_selection_changed(&mut self, selection: PaletteSelection) {
        self.events
            .push(Event::Swatch(selection.previous, selection.current));
    }
}

/// Shown view bound to a recording host, events cleared
pub fn shown_view(host: RecordingHost) -> (TokensView, Rc<RefCell<RecordingHost>>) {
    let host = Rc::new(RefCell::new(host));
    let mut view = TokensView::attach(&host, &host);
    view.will_show();
    view.did_show();
    host.borrow_mut().take_events();
    (view, host)
}

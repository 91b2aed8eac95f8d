//! Host binding - the widget as seen by the surrounding UI
//!
//! [`TokensView`] owns the model and holds non-owning handles to the host's
//! [`TokenSource`] and [`TokensDelegate`]. Every dispatch pulls a fresh set
//! of available tokens, runs [`update`], and delivers the resulting commands
//! to the delegate before returning. When the host has gone away the view
//! keeps working but publishes nothing.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::color::Color;
use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::{TaggingState, TokensModel};
use crate::palette::PaletteSelection;
use crate::token::{Token, TokenSet};
use crate::update::update;

/// Optional host settings, resolved once each time the widget is shown
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostConfig {
    /// Palette swatches; `None` or empty keeps the built-in palette
    pub colors: Option<Vec<Color>>,
    /// Heading text; `None` keeps the default
    pub title: Option<String>,
}

/// Data the host supplies to the widget
pub trait TokenSource {
    /// Full universe of assignable tokens; called on every dispatch
    fn available_tokens(&self) -> TokenSet;

    /// Tokens committed when the widget is first shown
    fn initial_tokens(&self) -> TokenSet;

    fn host_config(&self) -> HostConfig {
        HostConfig::default()
    }
}

impl<T: TokenSource> TokenSource for RefCell<T> {
    fn available_tokens(&self) -> TokenSet {
        self.borrow().available_tokens()
    }

    fn initial_tokens(&self) -> TokenSet {
        self.borrow().initial_tokens()
    }

    fn host_config(&self) -> HostConfig {
        self.borrow().host_config()
    }
}

/// Notifications the widget publishes
pub trait TokensDelegate {
    /// Switch panels: browse list, color picker, or existing-token suggestion
    ///
    /// Called whenever the state, the suggestions (title or color) or the
    /// action label change. While typing a new token the label follows the
    /// text, so this fires on every keystroke in [`TaggingState::NewToken`].
    fn mode_changed(&mut self, state: TaggingState, suggestions: &[Token], action_label: &str);

    /// New authoritative token set; the owning record should persist it
    fn tokens_changed(&mut self, tokens: &TokenSet);

    /// The widget's preferred size may have changed
    fn content_size_changed(&mut self) {}

    /// Swatch list replaced by the host or extended by a custom color
    fn palette_changed(&mut self, _colors: &[Color]) {}

    /// Selected swatch moved from `previous` to `current`
    fn palette_selection_changed(&mut self, _selection: PaletteSelection) {}
}

/// One tokens input bound to its host
pub struct TokensView {
    model: TokensModel,
    source: Weak<dyn TokenSource>,
    delegate: Weak<RefCell<dyn TokensDelegate>>,
}

impl TokensView {
    pub fn new(source: Weak<dyn TokenSource>, delegate: Weak<RefCell<dyn TokensDelegate>>) -> Self {
        Self {
            model: TokensModel::new(),
            source,
            delegate,
        }
    }

    /// Bind to host objects without taking ownership of them
    pub fn attach<S, D>(source: &Rc<S>, delegate: &Rc<RefCell<D>>) -> Self
    where
        S: TokenSource + 'static,
        D: TokensDelegate + 'static,
    {
        let source: Rc<dyn TokenSource> = source.clone();
        let delegate: Rc<RefCell<dyn TokensDelegate>> = delegate.clone();
        Self::new(Rc::downgrade(&source), Rc::downgrade(&delegate))
    }

    pub fn model(&self) -> &TokensModel {
        &self.model
    }

    pub fn state(&self) -> TaggingState {
        self.model.state()
    }

    pub fn tokens(&self) -> TokenSet {
        self.model.tokens()
    }

    /// Apply host configuration and show the browse list
    pub fn will_show(&mut self) {
        let Some(source) = self.source.upgrade() else {
            tracing::warn!("Token source dropped before show");
            return;
        };
        let config = source.host_config();
        drop(source);

        if let Some(colors) = config.colors {
            self.dispatch(Msg::SetColors(colors));
        }
        if let Some(title) = config.title {
            self.dispatch(Msg::SetTitle(title));
        }
        self.dispatch(Msg::Refresh);
    }

    /// Commit the host's initial tokens
    pub fn did_show(&mut self) {
        let Some(source) = self.source.upgrade() else {
            return;
        };
        let initial = source.initial_tokens();
        drop(source);

        tracing::debug!(count = initial.len(), "Prefilling initial tokens");
        for token in initial {
            self.dispatch(Msg::SelectSuggestion(token));
        }
    }

    /// Run one message and publish what it produced
    pub fn dispatch(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(source) = self.source.upgrade() {
            self.model.available = source.available_tokens();
        }

        let cmd = update(&mut self.model, msg)?;
        self.deliver(&cmd);
        Some(cmd)
    }

    pub fn text_changed(&mut self, text: &str) -> Option<Cmd> {
        self.dispatch(Msg::TextChanged(text.to_string()))
    }

    pub fn insert_char(&mut self, ch: char) -> Option<Cmd> {
        self.dispatch(Msg::InsertChar(ch))
    }

    pub fn delete_backward(&mut self) -> Option<Cmd> {
        self.dispatch(Msg::DeleteBackward)
    }

    pub fn commit(&mut self) -> Option<Cmd> {
        self.dispatch(Msg::Commit)
    }

    pub fn select_suggestion(&mut self, token: Token) -> Option<Cmd> {
        self.dispatch(Msg::SelectSuggestion(token))
    }

    pub fn request_new_from_color(&mut self, color: Color) -> Option<Cmd> {
        self.dispatch(Msg::RequestNewFromColor(color))
    }

    pub fn select_color(&mut self, index: usize) -> Option<Cmd> {
        self.dispatch(Msg::SelectColor(index))
    }

    pub fn remove_token(&mut self, title: &str) -> Option<Cmd> {
        self.dispatch(Msg::RemoveToken(title.to_string()))
    }

    fn deliver(&self, cmd: &Cmd) {
        let Some(handle) = self.delegate.upgrade() else {
            tracing::trace!("No delegate, dropping notifications");
            return;
        };
        let Ok(mut delegate) = handle.try_borrow_mut() else {
            tracing::warn!("Delegate busy, dropping notifications");
            return;
        };
        deliver_to(&mut *delegate, cmd);
    }
}

fn deliver_to(delegate: &mut dyn TokensDelegate, cmd: &Cmd) {
    match cmd {
        Cmd::None => {}
        Cmd::ModeChanged {
            state,
            suggestions,
            action_label,
        } => delegate.mode_changed(*state, suggestions, action_label),
        Cmd::TokensChanged(tokens) => delegate.tokens_changed(tokens),
        Cmd::ContentSizeChanged => delegate.content_size_changed(),
        Cmd::PaletteChanged(colors) => delegate.palette_changed(colors),
        Cmd::PaletteSelectionChanged(selection) => delegate.palette_selection_changed(*selection),
        Cmd::Batch(cmds) => {
            for cmd in cmds {
                deliver_to(delegate, cmd);
            }
        }
    }
}

//! Commit handlers - turning text or a picked suggestion into a chip

use crate::color::Color;
use crate::commands::Cmd;
use crate::error::TokenError;
use crate::model::TokensModel;
use crate::token::Token;

use super::settle;

/// Commit the current text as a token
///
/// Empty text is a no-op. Otherwise the text is cleared and the token is
/// inserted unless a chip with that title already exists. An available token
/// with the exact title is reused; anything else becomes a new token in the
/// selected palette color.
pub fn commit(model: &mut TokensModel) -> Option<Cmd> {
    let text = model.buffer.current_text();
    if text.is_empty() {
        tracing::trace!("Commit with empty text ignored");
        return None;
    }

    let token = match resolve_token(model, &text) {
        Ok(token) => token,
        Err(e) => {
            tracing::warn!(%e, "Ignoring commit");
            return None;
        }
    };

    model.buffer.remove_text_keep_tokens();
    let inserted = model.buffer.insert(token);
    if inserted {
        tracing::debug!(title = %text, "Token committed");
    } else {
        tracing::debug!(title = %text, "Token already committed, text cleared");
    }
    settle(model, inserted)
}

fn resolve_token(model: &TokensModel, text: &str) -> Result<Token, TokenError> {
    match model.available.get(text) {
        Some(existing) => Ok(existing.clone()),
        None => Token::new(text, model.palette.selected_color()),
    }
}

/// Insert a token picked from the suggestion list
///
/// Picking a token that is already committed does nothing. Any typed text
/// is discarded, so the widget returns to browsing.
pub fn select_suggestion(model: &mut TokensModel, token: Token) -> Option<Cmd> {
    if model.buffer.contains(token.title()) {
        tracing::debug!(title = token.title(), "Suggestion already committed");
        return None;
    }

    tracing::debug!(title = token.title(), "Suggestion selected");
    model.buffer.remove_text_keep_tokens();
    model.buffer.insert(token);
    settle(model, true)
}

/// "Create new token" with an explicit swatch color
///
/// A color missing from the palette is appended first, and the host hears
/// about the new swatch list before the selection moves onto it.
pub fn request_new_from_color(model: &mut TokensModel, color: Color) -> Option<Cmd> {
    let swatches = model.palette.len();
    let selection = model.palette.set_selected_color(color);

    let colors_cmd = if model.palette.len() != swatches {
        Cmd::PaletteChanged(model.palette.colors().to_vec())
    } else {
        Cmd::None
    };
    let selection_cmd = if selection.moved() {
        Cmd::PaletteSelectionChanged(selection)
    } else {
        Cmd::None
    };

    Cmd::batch(vec![colors_cmd, selection_cmd, Cmd::from_option(commit(model))]).into_option()
}

/// Remove a committed chip by title
pub fn remove_token(model: &mut TokensModel, title: &str) -> Option<Cmd> {
    match model.buffer.remove_token(title) {
        Some(_) => {
            tracing::debug!(title, "Token removed");
            settle(model, true)
        }
        None => None,
    }
}

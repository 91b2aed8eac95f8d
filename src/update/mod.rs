//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod commit;
mod palette;
mod text;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::TokensModel;

#[cfg(debug_assertions)]
use crate::tracing::TokensSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use commit::{commit, remove_token, request_new_from_color, select_suggestion};
pub use palette::update_palette;
pub use text::update_text;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut TokensModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut TokensModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::TextChanged(_) | Msg::InsertChar(_) | Msg::DeleteBackward => update_text(model, msg),
        Msg::Commit => commit(model),
        Msg::SelectSuggestion(token) => select_suggestion(model, token),
        Msg::RequestNewFromColor(color) => request_new_from_color(model, color),
        Msg::RemoveToken(title) => remove_token(model, &title),
        Msg::SelectColor(_) | Msg::SetColors(_) => update_palette(model, msg),
        Msg::SetTitle(title) => {
            if model.title == title {
                return None;
            }
            model.title = title;
            Some(Cmd::ContentSizeChanged)
        }
        Msg::Refresh => settle(model, false),
    }
}

/// Re-evaluate the mode and collect the notifications a change calls for
///
/// Mode notifications come first, then the new token set, then a single
/// size hint if anything changed.
pub(crate) fn settle(model: &mut TokensModel, tokens_changed: bool) -> Option<Cmd> {
    let mut cmds = Vec::new();

    let mode = model.compute_mode();
    let mode_changed = mode != model.mode;
    if mode_changed {
        model.mode = mode;
        cmds.push(Cmd::mode_changed(&model.mode));
    }
    if tokens_changed {
        cmds.push(Cmd::TokensChanged(model.tokens()));
    }
    if mode_changed || tokens_changed {
        cmds.push(Cmd::ContentSizeChanged);
    }

    Cmd::batch(cmds).into_option()
}

#[cfg(debug_assertions)]
fn update_traced(model: &mut TokensModel, msg: Msg) -> Option<Cmd> {
    let msg_name = format!("{:?}", msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = TokensSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = TokensSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "tagging", %diff, "state changed");
    }
    model.buffer.assert_invariants(&msg_name);

    result
}

//! Free-text input handlers (typing, backspace, host text replacement)

use crate::buffer::Deleted;
use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::TokensModel;

use super::{commit, settle};

/// Handle text input messages
pub fn update_text(model: &mut TokensModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::TextChanged(text) => {
            model.buffer.set_text(&text);
            settle(model, false)
        }

        // Enter commits, tab never reaches the buffer
        Msg::InsertChar('\n' | '\r') => commit(model),
        Msg::InsertChar('\t') => None,
        Msg::InsertChar(ch) => {
            model.buffer.push_char(ch);
            settle(model, false)
        }

        Msg::DeleteBackward => match model.buffer.delete_backward() {
            Deleted::Nothing => None,
            Deleted::Char(_) => settle(model, false),
            Deleted::Chip(token) => {
                tracing::debug!(title = token.title(), "Chip removed by backspace");
                settle(model, true)
            }
        },

        _ => None,
    }
}

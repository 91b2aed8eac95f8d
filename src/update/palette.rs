//! Color picker handlers

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::TokensModel;

/// Handle palette messages
pub fn update_palette(model: &mut TokensModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::SelectColor(index) => match model.palette.select(index) {
            Ok(selection) => Some(Cmd::PaletteSelectionChanged(selection)),
            Err(e) => {
                tracing::warn!(%e, "Ignoring color selection");
                None
            }
        },

        Msg::SetColors(colors) => {
            let selection = model.palette.set_colors(colors)?;
            let selection_cmd = if selection.moved() {
                Cmd::PaletteSelectionChanged(selection)
            } else {
                Cmd::None
            };
            Cmd::batch(vec![
                Cmd::PaletteChanged(model.palette.colors().to_vec()),
                selection_cmd,
                Cmd::ContentSizeChanged,
            ])
            .into_option()
        }

        _ => None,
    }
}

//! Tokens input - the core of a tag-entry widget
//!
//! A text field where typed text turns into colored chips. This crate holds
//! the widget's state machine and its text/chip bookkeeping, following the
//! Elm Architecture: [`Msg`] values go through [`update::update`], which
//! mutates a [`TokensModel`] and returns a [`Cmd`] naming the notifications
//! to publish. [`runtime::TokensView`] binds that loop to a host UI.

pub mod buffer;
pub mod cli;
pub mod color;
pub mod commands;
pub mod config;
pub mod error;
pub mod messages;
pub mod model;
pub mod palette;
pub mod runtime;
pub mod token;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use color::Color;
pub use commands::Cmd;
pub use error::TokenError;
pub use messages::Msg;
pub use model::{TaggingState, TokensModel};
pub use palette::TokenColorPalette;
pub use runtime::TokensView;
pub use token::{Token, TokenSet};

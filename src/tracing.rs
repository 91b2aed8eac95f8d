//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! tagging-state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=tagging=debug,message=debug` - scoped filtering
//! - `RUST_LOG=tokens_input::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/tokens-input/logs/tokens.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{TaggingState, TokensModel};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`) and goes to stderr so
/// it never interleaves with driver output. File logging writes debug level
/// with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "tokens.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of widget state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct TokensSnapshot {
    pub state: TaggingState,
    pub text: String,
    pub tokens: Vec<String>,
    pub selected_color: usize,
}

impl TokensSnapshot {
    pub fn from_model(model: &TokensModel) -> Self {
        Self {
            state: model.mode.state,
            text: model.buffer.current_text(),
            tokens: model.buffer.chips().map(|t| t.title().to_string()).collect(),
            selected_color: model.palette.selected_index(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &TokensSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.state != other.state {
            changes.push(format!("state: {:?} → {:?}", self.state, other.state));
        }
        if self.text != other.text {
            changes.push(format!("text: {:?} → {:?}", self.text, other.text));
        }
        if self.tokens != other.tokens {
            changes.push(format!(
                "tokens: [{}] → [{}]",
                self.tokens.join(", "),
                other.tokens.join(", ")
            ));
        }
        if self.selected_color != other.selected_color {
            changes.push(format!(
                "color: #{} → #{}",
                self.selected_color, other.selected_color
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

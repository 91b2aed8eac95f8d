//! Command-line arguments and line commands for the terminal driver
//!
//! The driver reads one command per line:
//! - plain text replaces the text in the field
//! - `:enter` commits, `:back` deletes backward
//! - `:pick <title>` clicks a suggestion
//! - `:color <n>` selects a swatch, `:create <hex>` creates with a color
//! - `:remove <title>` removes a chip
//! - `:quit` exits

use clap::Parser;
use std::path::PathBuf;

use crate::color::Color;
use crate::error::TokenError;

/// Terminal driver for the tokens input widget
#[derive(Parser, Debug)]
#[command(name = "tokens-input", version, about = "Drive a tokens input from the terminal")]
pub struct CliArgs {
    /// Config file (defaults to ~/.config/tokens-input/config.yaml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the heading text
    #[arg(short, long)]
    pub title: Option<String>,

    /// Start with no initial tokens
    #[arg(short = 'n', long)]
    pub empty: bool,

    /// Write the final token set back as the initial tokens on exit
    #[arg(short, long)]
    pub save: bool,
}

/// One parsed driver line
#[derive(Debug, Clone, PartialEq)]
pub enum DriverCommand {
    Text(String),
    Enter,
    Back,
    Pick(String),
    Color(usize),
    Create(Color),
    Remove(String),
    Quit,
}

impl DriverCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim_end_matches(['\n', '\r']);
        let Some(rest) = line.strip_prefix(':') else {
            return Ok(DriverCommand::Text(line.to_string()));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name {
            "enter" => Ok(DriverCommand::Enter),
            "back" => Ok(DriverCommand::Back),
            "quit" | "q" => Ok(DriverCommand::Quit),
            "pick" => non_empty(arg, "pick").map(DriverCommand::Pick),
            "remove" => non_empty(arg, "remove").map(DriverCommand::Remove),
            "color" => arg
                .parse()
                .map(DriverCommand::Color)
                .map_err(|_| format!("Expected a swatch number, got '{}'", arg)),
            "create" => Color::from_hex(arg)
                .map(DriverCommand::Create)
                .map_err(|e: TokenError| e.to_string()),
            other => Err(format!("Unknown command ':{}'", other)),
        }
    }
}

fn non_empty(arg: &str, command: &str) -> Result<String, String> {
    if arg.is_empty() {
        Err(format!(":{} needs a token title", command))
    } else {
        Ok(arg.to_string())
    }
}

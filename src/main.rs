//! Terminal driver for the tokens input widget
//!
//! Plays the host: supplies tokens and config, prints every notification the
//! widget publishes, and owns the committed token set.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;

use tokens_input::cli::{CliArgs, DriverCommand};
use tokens_input::color::Color;
use tokens_input::config::TokensConfig;
use tokens_input::model::TaggingState;
use tokens_input::palette::PaletteSelection;
use tokens_input::runtime::{HostConfig, TokenSource, TokensDelegate, TokensView};
use tokens_input::token::{Token, TokenSet};

/// Host side of the widget: config in, notifications out
struct TerminalHost {
    config: TokensConfig,
    /// Owner's copy of the committed tokens, updated from notifications
    committed: TokenSet,
    /// Last suggestion list, used to resolve `:pick`
    suggestions: Vec<Token>,
    skip_initial: bool,
}

impl TokenSource for TerminalHost {
    fn available_tokens(&self) -> TokenSet {
        self.config.available_tokens.clone()
    }

    fn initial_tokens(&self) -> TokenSet {
        if self.skip_initial {
            TokenSet::new()
        } else {
            self.config.initial_tokens.clone()
        }
    }

    fn host_config(&self) -> HostConfig {
        self.config.host_config()
    }
}

impl TokensDelegate for TerminalHost {
    fn mode_changed(&mut self, state: TaggingState, suggestions: &[Token], action_label: &str) {
        self.suggestions = suggestions.to_vec();
        match state {
            TaggingState::NewToken => println!("[new] {}", action_label),
            TaggingState::ExistingToken => println!("[existing]"),
            TaggingState::Initial => println!("[browse]"),
        }
        for token in suggestions {
            println!("    {} {}", token.color_hex(), token.title());
        }
    }

    fn tokens_changed(&mut self, tokens: &TokenSet) {
        self.committed = tokens.clone();
        let chips: Vec<String> = tokens
            .iter()
            .map(|t| format!("[{} {}]", t.title(), t.color_hex()))
            .collect();
        println!("tokens: {}", chips.join(" "));
    }

    fn palette_changed(&mut self, colors: &[Color]) {
        let swatches: Vec<String> = colors.iter().map(Color::to_hex).collect();
        println!("palette: {}", swatches.join(" "));
    }

    fn palette_selection_changed(&mut self, selection: PaletteSelection) {
        println!("swatch: {} -> {}", selection.previous, selection.current);
    }
}

fn main() -> Result<()> {
    tokens_input::tracing::init();

    let args = CliArgs::parse();
    let mut config = match &args.config {
        Some(path) => TokensConfig::load_from(path),
        None => TokensConfig::load(),
    };
    if let Some(title) = &args.title {
        config.title = Some(title.clone());
    }

    let host = Rc::new(RefCell::new(TerminalHost {
        config,
        committed: TokenSet::new(),
        suggestions: Vec::new(),
        skip_initial: args.empty,
    }));

    let mut view = TokensView::attach(&host, &host);
    view.will_show();
    println!("{}", view.model().title);
    view.did_show();

    run(&mut view, &host)?;

    if args.save {
        let mut config = host.borrow().config.clone();
        config.initial_tokens = host.borrow().committed.clone();
        let result = match &args.config {
            Some(path) => config.save_to(path),
            None => config.save(),
        };
        result.map_err(anyhow::Error::msg).context("saving tokens")?;
    }

    Ok(())
}

fn run(view: &mut TokensView, host: &Rc<RefCell<TerminalHost>>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("reading input")?;
        let command = match DriverCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match command {
            DriverCommand::Text(text) => {
                view.text_changed(&text);
            }
            DriverCommand::Enter => {
                view.commit();
            }
            DriverCommand::Back => {
                view.delete_backward();
            }
            DriverCommand::Pick(title) => {
                let picked = host
                    .borrow()
                    .suggestions
                    .iter()
                    .find(|t| t.title() == title)
                    .cloned();
                match picked {
                    Some(token) => {
                        view.select_suggestion(token);
                    }
                    None => eprintln!("No suggestion titled '{}'", title),
                }
            }
            DriverCommand::Color(index) => {
                view.select_color(index);
            }
            DriverCommand::Create(color) => {
                view.request_new_from_color(color);
            }
            DriverCommand::Remove(title) => {
                view.remove_token(&title);
            }
            DriverCommand::Quit => break,
        }
        stdout.flush()?;
    }

    Ok(())
}

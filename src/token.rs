//! Token value type and the title-keyed token set

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::TokenError;

/// A named, colored tag
///
/// Identity is the title alone: two tokens with the same title and different
/// colors are the same token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawToken")]
pub struct Token {
    title: String,
    color: Color,
}

/// Unvalidated shape used when deserializing
#[derive(Deserialize)]
struct RawToken {
    title: String,
    color: Color,
}

impl TryFrom<RawToken> for Token {
    type Error = TokenError;

    fn try_from(raw: RawToken) -> Result<Self, Self::Error> {
        Token::new(&raw.title, raw.color)
    }
}

impl Token {
    /// Create a token, trimming the title
    pub fn new(title: &str, color: Color) -> Result<Self, TokenError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TokenError::EmptyTitle);
        }
        Ok(Self {
            title: title.to_string(),
            color,
        })
    }

    /// Create a token from a hex color string
    pub fn from_hex(title: &str, hex: &str) -> Result<Self, TokenError> {
        Token::new(title, Color::from_hex(hex)?)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Normalized hex string of the display color
    pub fn color_hex(&self) -> String {
        self.color.to_hex()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        self.title.cmp(&other.title)
    }
}

/// Set of tokens keyed by title
///
/// Iteration is in ascending title order. Inserting a token whose title is
/// already present keeps the existing entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Token>", into = "Vec<Token>")]
pub struct TokenSet {
    tokens: BTreeMap<String, Token>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token, returning false if its title was already present
    pub fn insert(&mut self, token: Token) -> bool {
        if self.tokens.contains_key(token.title()) {
            return false;
        }
        self.tokens.insert(token.title().to_string(), token);
        true
    }

    pub fn remove(&mut self, title: &str) -> Option<Token> {
        self.tokens.remove(title)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.tokens.contains_key(title)
    }

    /// Look up by exact, case-sensitive title
    pub fn get(&self, title: &str) -> Option<&Token> {
        self.tokens.get(title)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.values()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(String::as_str)
    }

    /// Tokens in `self` whose titles are not in `other`
    pub fn difference(&self, other: &TokenSet) -> TokenSet {
        self.iter()
            .filter(|token| !other.contains(token.title()))
            .cloned()
            .collect()
    }
}

impl FromIterator<Token> for TokenSet {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut set = TokenSet::new();
        for token in iter {
            set.insert(token);
        }
        set
    }
}

impl Extend<Token> for TokenSet {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
        for token in iter {
            self.insert(token);
        }
    }
}

impl IntoIterator for TokenSet {
    type Item = Token;
    type IntoIter = std::collections::btree_map::IntoValues<String, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_values()
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a Token;
    type IntoIter = std::collections::btree_map::Values<'a, String, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.values()
    }
}

impl From<Vec<Token>> for TokenSet {
    fn from(tokens: Vec<Token>) -> Self {
        tokens.into_iter().collect()
    }
}

impl From<TokenSet> for Vec<Token> {
    fn from(set: TokenSet) -> Self {
        set.into_iter().collect()
    }
}

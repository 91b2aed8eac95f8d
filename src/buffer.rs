//! Text buffer mixing typed text with committed token chips
//!
//! The buffer is an ordered list of segments. Free text lives in `Text`
//! segments and each committed token is a single `Chip`. Chip titles are
//! unique within a buffer, and free text never contains
//! [`OBJECT_REPLACEMENT`], the marker a flat-string host uses to stand in
//! for a chip.

use crate::token::{Token, TokenSet};

/// Marker a flat-string rendering uses for each chip
pub const OBJECT_REPLACEMENT: char = '\u{FFFC}';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Chip(Token),
}

/// What a backspace removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deleted {
    Nothing,
    Char(char),
    Chip(Token),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenBuffer {
    segments: Vec<Segment>,
}

impl TokenBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding the given tokens as chips and no text
    pub fn with_tokens(tokens: impl IntoIterator<Item = Token>) -> Self {
        let mut buffer = Self::new();
        for token in tokens {
            buffer.insert(token);
        }
        buffer
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// All committed tokens
    pub fn tokens(&self) -> TokenSet {
        self.chips().cloned().collect()
    }

    /// Chips in buffer order
    pub fn chips(&self) -> impl Iterator<Item = &Token> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Chip(token) => Some(token),
            Segment::Text(_) => None,
        })
    }

    pub fn chip_count(&self) -> usize {
        self.chips().count()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.chips().any(|token| token.title() == title)
    }

    /// Free text exactly as typed, across all text segments
    pub fn raw_text(&self) -> String {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Text(text) => Some(text.as_str()),
                Segment::Chip(_) => None,
            })
            .collect()
    }

    /// Free text trimmed, the candidate title for a new token
    pub fn current_text(&self) -> String {
        self.raw_text().trim().to_string()
    }

    pub fn has_text(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Text(_)))
    }

    /// Replace all free text, keeping chips
    pub fn set_text(&mut self, text: &str) {
        self.remove_text_keep_tokens();
        self.push_str(text);
    }

    /// Append typed text after the last segment
    pub fn push_str(&mut self, text: &str) {
        let clean: String = text.chars().filter(|&c| c != OBJECT_REPLACEMENT).collect();
        if clean.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(Segment::Text(last)) => last.push_str(&clean),
            _ => self.segments.push(Segment::Text(clean)),
        }
    }

    pub fn push_char(&mut self, ch: char) {
        let mut tmp = [0u8; 4];
        self.push_str(ch.encode_utf8(&mut tmp));
    }

    /// Remove the last character, or the last chip if it ends the buffer
    pub fn delete_backward(&mut self) -> Deleted {
        let deleted = match self.segments.last_mut() {
            None => return Deleted::Nothing,
            Some(Segment::Text(text)) => match text.pop() {
                Some(ch) => Deleted::Char(ch),
                None => Deleted::Nothing,
            },
            Some(Segment::Chip(_)) => match self.segments.pop() {
                Some(Segment::Chip(token)) => return Deleted::Chip(token),
                _ => Deleted::Nothing,
            },
        };
        if matches!(self.segments.last(), Some(Segment::Text(text)) if text.is_empty()) {
            self.segments.pop();
        }
        deleted
    }

    /// Drop every text segment, leaving chips in place
    pub fn remove_text_keep_tokens(&mut self) {
        self.segments
            .retain(|segment| matches!(segment, Segment::Chip(_)));
    }

    /// Append a chip unless a chip with the same title exists
    ///
    /// Returns whether the token set changed.
    pub fn insert(&mut self, token: Token) -> bool {
        if self.contains(token.title()) {
            return false;
        }
        self.segments.push(Segment::Chip(token));
        true
    }

    pub fn remove_token(&mut self, title: &str) -> Option<Token> {
        let index = self
            .segments
            .iter()
            .position(|segment| matches!(segment, Segment::Chip(t) if t.title() == title))?;
        match self.segments.remove(index) {
            Segment::Chip(token) => {
                self.merge_adjacent_text();
                Some(token)
            }
            Segment::Text(_) => None,
        }
    }

    /// Flat rendering with one marker per chip
    pub fn display_string(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Chip(_) => out.push(OBJECT_REPLACEMENT),
            }
        }
        out
    }

    /// Panic with `context` if the segment list is malformed
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self, context: &str) {
        let mut seen = std::collections::HashSet::new();
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Chip(token) => assert!(
                    seen.insert(token.title()),
                    "[{}] duplicate chip '{}'",
                    context,
                    token.title()
                ),
                Segment::Text(text) => {
                    assert!(!text.is_empty(), "[{}] empty text segment at {}", context, i);
                    assert!(
                        !text.contains(OBJECT_REPLACEMENT),
                        "[{}] chip marker in free text at {}",
                        context,
                        i
                    );
                    assert!(
                        !matches!(self.segments.get(i + 1), Some(Segment::Text(_))),
                        "[{}] adjacent text segments at {}",
                        context,
                        i
                    );
                }
            }
        }
    }

    #[cfg(not(debug_assertions))]
    pub fn assert_invariants(&self, _context: &str) {}

    fn merge_adjacent_text(&mut self) {
        let mut merged: Vec<Segment> = Vec::with_capacity(self.segments.len());
        for segment in self.segments.drain(..) {
            match (merged.last_mut(), segment) {
                (Some(Segment::Text(prev)), Segment::Text(next)) => prev.push_str(&next),
                (_, segment) => merged.push(segment),
            }
        }
        self.segments = merged;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(title: &str) -> Token {
        Token::from_hex(title, "#d50000").unwrap()
    }

    #[test]
    fn test_current_text_is_trimmed_and_marker_free() {
        let mut buffer = TokenBuffer::new();
        buffer.push_str("  ur\u{FFFC}gent ");
        assert_eq!(buffer.raw_text(), "  urgent ");
        assert_eq!(buffer.current_text(), "urgent");
    }

    #[test]
    fn test_insert_is_idempotent_by_title() {
        let mut buffer = TokenBuffer::new();
        assert!(buffer.insert(token("bug")));
        assert!(!buffer.insert(Token::from_hex("bug", "#0000ff").unwrap()));
        assert_eq!(buffer.chip_count(), 1);
    }

    #[test]
    fn test_remove_text_keep_tokens() {
        let mut buffer = TokenBuffer::new();
        buffer.push_str("first ");
        buffer.insert(token("bug"));
        buffer.push_str("second");
        buffer.remove_text_keep_tokens();
        assert_eq!(buffer.segments(), &[Segment::Chip(token("bug"))]);
        assert_eq!(buffer.current_text(), "");
    }

    #[test]
    fn test_set_text_moves_text_after_chips() {
        let mut buffer = TokenBuffer::with_tokens(vec![token("a"), token("b")]);
        buffer.set_text("new");
        assert_eq!(buffer.display_string(), "\u{FFFC}\u{FFFC}new");
        buffer.set_text("");
        assert!(!buffer.has_text());
    }

    #[test]
    fn test_delete_backward_chars_then_chip() {
        let mut buffer = TokenBuffer::with_tokens(vec![token("bug")]);
        buffer.push_str("ab");
        assert_eq!(buffer.delete_backward(), Deleted::Char('b'));
        assert_eq!(buffer.delete_backward(), Deleted::Char('a'));
        assert!(!buffer.has_text());
        assert_eq!(buffer.delete_backward(), Deleted::Chip(token("bug")));
        assert_eq!(buffer.delete_backward(), Deleted::Nothing);
    }

    #[test]
    fn test_remove_token_merges_text() {
        let mut buffer = TokenBuffer::new();
        buffer.push_str("ab");
        buffer.insert(token("x"));
        buffer.push_str("cd");
        assert_eq!(buffer.remove_token("x"), Some(token("x")));
        assert_eq!(buffer.segments(), &[Segment::Text("abcd".to_string())]);
        assert_eq!(buffer.remove_token("x"), None);
    }
}

//! Color palette offered when creating a new token

use crate::color::Color;
use crate::error::TokenError;

/// Built-in swatches used until the host supplies its own list
pub const DEFAULT_COLORS: [Color; 10] = [
    Color::rgb(0xD5, 0x00, 0x00),
    Color::rgb(0x4E, 0x34, 0x2E),
    Color::rgb(0xC6, 0x7C, 0x00),
    Color::rgb(0xC7, 0xA5, 0x00),
    Color::rgb(0x00, 0x96, 0x24),
    Color::rgb(0x00, 0x88, 0xA3),
    Color::rgb(0x29, 0x62, 0xFF),
    Color::rgb(0x62, 0x00, 0xEA),
    Color::rgb(0xAA, 0x00, 0xFF),
    Color::rgb(0x45, 0x5A, 0x64),
];

/// Result of a successful selection, so the host can unhighlight the old swatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteSelection {
    pub previous: usize,
    pub current: usize,
}

impl PaletteSelection {
    pub fn moved(&self) -> bool {
        self.previous != self.current
    }
}

/// Ordered swatches plus the currently selected one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenColorPalette {
    colors: Vec<Color>,
    selected_index: usize,
}

impl Default for TokenColorPalette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
            selected_index: 0,
        }
    }
}

impl TokenColorPalette {
    pub fn new(colors: Vec<Color>) -> Self {
        let mut palette = Self::default();
        palette.set_colors(colors);
        palette
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Replace the palette wholesale
    ///
    /// An empty list keeps the current palette and returns `None`. Otherwise
    /// the selection is clamped back to the first swatch when it no longer
    /// fits, and the (possibly unchanged) selection is returned.
    pub fn set_colors(&mut self, colors: Vec<Color>) -> Option<PaletteSelection> {
        if colors.is_empty() {
            tracing::debug!("Empty color list supplied, keeping current palette");
            return None;
        }
        let previous = self.selected_index;
        self.colors = colors;
        if self.selected_index >= self.colors.len() {
            self.selected_index = 0;
        }
        Some(PaletteSelection {
            previous,
            current: self.selected_index,
        })
    }

    pub fn select(&mut self, index: usize) -> Result<PaletteSelection, TokenError> {
        if index >= self.colors.len() {
            return Err(TokenError::InvalidIndex {
                index,
                len: self.colors.len(),
            });
        }
        let previous = self.selected_index;
        self.selected_index = index;
        Ok(PaletteSelection {
            previous,
            current: index,
        })
    }

    pub fn selected_color(&self) -> Color {
        self.colors
            .get(self.selected_index)
            .copied()
            .unwrap_or(Color::FALLBACK)
    }

    /// Make `color` the effective selection
    ///
    /// Selects the matching swatch, or appends `color` and selects it when the
    /// palette does not contain it.
    pub fn set_selected_color(&mut self, color: Color) -> PaletteSelection {
        let index = match self.colors.iter().position(|c| *c == color) {
            Some(index) => index,
            None => {
                self.colors.push(color);
                self.colors.len() - 1
            }
        };
        let previous = self.selected_index;
        self.selected_index = index;
        PaletteSelection {
            previous,
            current: index,
        }
    }
}

use crate::error::{PlaqueError, Result};
use crate::width::char_width;

/// Basic terminal colors plus the two sentinel values used by compositing.
///
/// `Normal` is the terminal's default color. `Transparent` only matters
/// during overlay: a transparent channel lets the cell underneath show
/// through, and it falls back to `Normal` at emission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Transparent,
    Normal,
}

impl Color {
    /// SGR color offset: 0-7 for the concrete colors, 9 for default.
    pub(crate) fn sgr_offset(self) -> u8 {
        match self {
            Color::Black => 0,
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
            Color::Magenta => 5,
            Color::Cyan => 6,
            Color::White => 7,
            Color::Transparent | Color::Normal => 9,
        }
    }
}

/// One styled character cell of terminal output.
///
/// A value type: every transform returns a fresh cell, nothing is mutated
/// after construction. The character, if set, occupies exactly one terminal
/// column; constructing a cell with a wider or zero-width character fails
/// with [`PlaqueError::CharWidth`]. The style flags are tri-state: `None`
/// means unset and displays the same as off.
#[derive(Debug, Clone, Copy)]
pub struct CharCell {
    char: Option<char>,
    foreground: Color,
    background: Color,
    bold: Option<bool>,
    underline: Option<bool>,
    italic: Option<bool>,
}

impl Default for CharCell {
    fn default() -> Self {
        Self {
            char: Some(' '),
            foreground: Color::Normal,
            background: Color::Normal,
            bold: Some(false),
            underline: Some(false),
            italic: Some(false),
        }
    }
}

impl CharCell {
    /// A default cell with the given character, validated to one column.
    pub fn new(ch: char) -> Result<Self> {
        Self::default().with_char(ch)
    }

    /// The default blank cell: a space with normal colors, styles off.
    pub fn blank() -> Self {
        Self::default()
    }

    /// A fully unset cell: no character, normal colors, unset styles.
    pub fn unset() -> Self {
        Self {
            char: None,
            foreground: Color::Normal,
            background: Color::Normal,
            bold: None,
            underline: None,
            italic: None,
        }
    }

    /// Replace the character, validating the one-column invariant.
    pub fn with_char(self, ch: char) -> Result<Self> {
        if char_width(ch) != 1 {
            return Err(PlaqueError::CharWidth(ch));
        }
        Ok(Self {
            char: Some(ch),
            ..self
        })
    }

    // Internal setter for compile-time glyph constants already known to be
    // one column wide.
    pub(crate) fn with_char_unchecked(self, ch: char) -> Self {
        debug_assert_eq!(char_width(ch), 1);
        Self {
            char: Some(ch),
            ..self
        }
    }

    pub fn with_foreground(self, color: Color) -> Self {
        Self {
            foreground: color,
            ..self
        }
    }

    pub fn with_background(self, color: Color) -> Self {
        Self {
            background: color,
            ..self
        }
    }

    pub fn with_bold(self, on: bool) -> Self {
        Self {
            bold: Some(on),
            ..self
        }
    }

    pub fn with_underline(self, on: bool) -> Self {
        Self {
            underline: Some(on),
            ..self
        }
    }

    pub fn with_italic(self, on: bool) -> Self {
        Self {
            italic: Some(on),
            ..self
        }
    }

    pub fn char(&self) -> Option<char> {
        self.char
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Character as displayed: unset renders as a space.
    pub fn display_char(&self) -> char {
        self.char.unwrap_or(' ')
    }

    /// Foreground as displayed: `Transparent` falls back to `Normal`.
    pub fn visible_foreground(&self) -> Color {
        match self.foreground {
            Color::Transparent => Color::Normal,
            other => other,
        }
    }

    /// Background as displayed: `Transparent` falls back to `Normal`.
    pub fn visible_background(&self) -> Color {
        match self.background {
            Color::Transparent => Color::Normal,
            other => other,
        }
    }

    pub fn bold_on(&self) -> bool {
        self.bold.unwrap_or(false)
    }

    pub fn underline_on(&self) -> bool {
        self.underline.unwrap_or(false)
    }

    pub fn italic_on(&self) -> bool {
        self.italic.unwrap_or(false)
    }

    /// Whether the cell renders as an empty column (space or unset char).
    pub fn is_blank(&self) -> bool {
        matches!(self.char, None | Some(' '))
    }

    /// Composite `top` over this cell.
    ///
    /// The top cell wins wholesale, except a `Transparent` foreground or
    /// background keeps this cell's value for that channel.
    pub fn overlay(&self, top: &CharCell) -> CharCell {
        CharCell {
            char: top.char,
            foreground: if top.foreground == Color::Transparent {
                self.foreground
            } else {
                top.foreground
            },
            background: if top.background == Color::Transparent {
                self.background
            } else {
                top.background
            },
            bold: top.bold,
            underline: top.underline,
            italic: top.italic,
        }
    }
}

/// Visual equality: two cells compare equal when they would look the same
/// on screen. Background and underline must always match; beyond that, two
/// blank cells are equal no matter their other attributes, while non-blank
/// cells must also agree on character, foreground, and bold. Italic never
/// participates.
impl PartialEq for CharCell {
    fn eq(&self, other: &Self) -> bool {
        if self.visible_background() != other.visible_background()
            || self.underline_on() != other.underline_on()
        {
            return false;
        }
        if self.is_blank() && other.is_blank() {
            return true;
        }
        self.display_char() == other.display_char()
            && self.visible_foreground() == other.visible_foreground()
            && self.bold_on() == other.bold_on()
    }
}

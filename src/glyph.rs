// WHY: Glyph stream model shared by the segmenter, painter and CLI
// Mirrors the host's showText argument: numbers are spacing adjustments, objects are shaped characters

use serde::{Deserialize, Serialize};

/// Spacing adjustments below this value are inter-word spaces
pub const WORD_SPACE_THRESHOLD: f64 = -100.0;

/// Marker substituted for placeholder glyphs inside word text
pub const WORD_JOINER: char = '\u{2060}';

/// Shaped character unit carrying a Unicode fragment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharGlyph {
    pub unicode: String,
    #[serde(rename = "isSpace", default)]
    pub is_space: bool,
}

/// One element of a text-draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Glyph {
    /// Kerning or spacing adjustment in text space units
    Spacing(f64),
    Char(CharGlyph),
    /// Anything the host sent that is neither a number nor a character
    Unknown(serde_json::Value),
}

/// How a glyph participates in word detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphText<'a> {
    /// Inter-word spacing adjustment
    Space,
    /// Small adjustment rendered as `WORD_JOINER` in word text
    Placeholder,
    Text(&'a str),
    Opaque,
}

impl Glyph {
    /// Character glyph from a text fragment
    pub fn char(unicode: impl Into<String>) -> Self {
        let unicode = unicode.into();
        let is_space = !unicode.is_empty() && unicode.chars().all(char::is_whitespace);
        Glyph::Char(CharGlyph { unicode, is_space })
    }

    pub fn spacing(amount: f64) -> Self {
        Glyph::Spacing(amount)
    }

    pub fn text(&self) -> GlyphText<'_> {
        match self {
            Glyph::Spacing(amount) if *amount < WORD_SPACE_THRESHOLD => GlyphText::Space,
            Glyph::Spacing(_) => GlyphText::Placeholder,
            Glyph::Char(c) => GlyphText::Text(&c.unicode),
            Glyph::Unknown(_) => GlyphText::Opaque,
        }
    }

    /// Append this glyph's contribution to an accumulating word
    pub fn push_word_text(&self, word: &mut String) {
        match self.text() {
            GlyphText::Space => word.push(' '),
            GlyphText::Placeholder => word.push(WORD_JOINER),
            GlyphText::Text(text) => word.push_str(text),
            GlyphText::Opaque => {}
        }
    }

    /// Leading character is a letter other than a, e, i, o, u (any case)
    pub fn is_consonant(&self) -> bool {
        match self.text() {
            GlyphText::Text(text) => text.chars().next().is_some_and(|ch| {
                ch.is_alphabetic() && !matches!(ch.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
            }),
            _ => false,
        }
    }
}

/// Convert plain text into one character glyph per Unicode scalar value
pub fn glyphs_from_text(text: &str) -> Vec<Glyph> {
    text.chars().map(|ch| Glyph::char(ch.to_string())).collect()
}

/// Rebuild the visible text of a glyph run, spacing adjustments become spaces or nothing
pub fn glyphs_to_text(glyphs: &[Glyph]) -> String {
    let mut out = String::new();
    for glyph in glyphs {
        match glyph.text() {
            GlyphText::Space => out.push(' '),
            GlyphText::Text(text) => out.push_str(text),
            GlyphText::Placeholder | GlyphText::Opaque => {}
        }
    }
    out
}

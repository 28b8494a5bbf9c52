pub mod config;
pub mod font;
pub mod glyph;
pub mod pos;
pub mod render;
pub mod segmenter;
pub mod terminal;

// Re-export main types for convenient access
pub use glyph::{glyphs_from_text, glyphs_to_text, CharGlyph, Glyph};
pub use segmenter::{SegmentContext, Segmentation, Segmenter, Span};

// Re-export classifier types
pub use pos::{
    Classifier, LexiconTagger, PartOfSpeech, TaggedTerm,
    Tagger, TermTags, WordAnalysis
};

// Re-export host-side painting utilities
pub use config::BionicConfig;
pub use font::{compute_font, ComputedFonts, FontRequest, FontStyle};
pub use render::{BionicPainter, Canvas};
pub use terminal::TerminalCanvas;

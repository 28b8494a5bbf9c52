// WHY: Host-side consumer of segmentation output
// Applies per-span font, alpha and fill around the unmodified draw primitive

use anyhow::Result;
use tracing::debug;

use crate::config::BionicConfig;
use crate::font::{compute_font, FontRequest};
use crate::glyph::Glyph;
use crate::pos::{LexiconTagger, Tagger};
use crate::segmenter::{SegmentContext, Segmenter, Span};

/// Drawing surface the painter drives
pub trait Canvas {
    fn font(&self) -> String;
    fn set_font(&mut self, font: &str);
    fn alpha(&self) -> f64;
    fn set_alpha(&mut self, alpha: f64);
    fn fill_style(&self) -> String;
    fn set_fill_style(&mut self, style: &str);
    /// Push the current drawing state
    fn save(&mut self);
    /// Pop the most recently saved drawing state
    fn restore(&mut self);
    /// The host's unmodified glyph-draw primitive
    fn show_text(&mut self, glyphs: &[Glyph]) -> Result<()>;
}

/// Segments and paints consecutive draw calls of one text flow
pub struct BionicPainter<T: Tagger = LexiconTagger> {
    segmenter: Segmenter<T>,
    /// Previous call ended mid-word
    continuation: bool,
}

impl BionicPainter<LexiconTagger> {
    pub fn with_default_tagger() -> Result<Self> {
        Ok(Self::new(Segmenter::with_default_tagger()?))
    }
}

impl<T: Tagger> BionicPainter<T> {
    pub fn new(segmenter: Segmenter<T>) -> Self {
        Self {
            segmenter,
            continuation: false,
        }
    }

    pub fn segmenter(&self) -> &Segmenter<T> {
        &self.segmenter
    }

    pub fn continuation(&self) -> bool {
        self.continuation
    }

    /// Document boundary: forget continuation state and cached classifications
    pub fn reset(&mut self) {
        self.continuation = false;
        self.segmenter.reset();
    }

    /// Segment one draw call, carrying continuation state into the next
    pub fn segment<'g>(&mut self, glyphs: &'g [Glyph], config: &BionicConfig) -> Vec<Span<'g>> {
        let context = SegmentContext {
            parsing_offset: config.parsing_offset,
            continuation: self.continuation,
        };
        let segmentation = self.segmenter.segment(glyphs, context);
        self.continuation = segmentation.continuation;
        segmentation.spans
    }

    /// Draw one glyph run with emphasis and highlighting applied per span
    pub fn paint<C: Canvas>(&mut self, canvas: &mut C, glyphs: &[Glyph], config: &BionicConfig) -> Result<()> {
        if !config.needs_processing() {
            return canvas.show_text(glyphs);
        }

        let saved_font = canvas.font();
        let saved_alpha = canvas.alpha();
        let saved_fill = canvas.fill_style();

        let fonts = compute_font(&FontRequest {
            font: &saved_font,
            alpha: saved_alpha,
            opacity_contrast: config.opacity_contrast,
            weight_contrast: config.weight_contrast,
            weight_offset: config.weight_offset,
        });

        let spans = self.segment(glyphs, config);
        debug!(spans = spans.len(), "Painting glyph run");

        for span in &spans {
            let highlighted = if config.highlight_verbs && span.is_highlighted_verb {
                canvas.save();
                canvas.set_fill_style(&config.verb_color);
                true
            } else if config.highlight_nouns && span.is_highlighted_noun {
                canvas.save();
                canvas.set_fill_style(&config.noun_color);
                true
            } else {
                false
            };

            if config.enabled {
                if span.is_bold {
                    canvas.set_font(&fonts.bold.font);
                } else {
                    canvas.set_font(&fonts.light.font);
                    if config.opacity_contrast > 1.0 {
                        canvas.set_alpha(fonts.light.alpha);
                    }
                }
            }

            let drawn = canvas.show_text(span.glyphs);

            if highlighted {
                canvas.restore();
            }
            canvas.set_font(&saved_font);
            canvas.set_alpha(saved_alpha);
            canvas.set_fill_style(&saved_fill);

            drawn?;
        }

        Ok(())
    }
}

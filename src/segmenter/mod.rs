// WHY: Glyph segmentation engine for one text-draw call
// Partitions the glyph run into emphasis spans; the caller threads continuation state between calls

use anyhow::Result;
use regex_automata::meta::Regex;
use serde::Serialize;
use std::ops::Range;
use tracing::{debug, info};

use crate::glyph::{Glyph, GlyphText};
use crate::pos::{Classifier, LexiconTagger, PartOfSpeech, Tagger};

pub mod bold;

pub use bold::{bold_split, BoldSplit};

/// Punctuation, symbol and separator classes; letters of any script never match
pub const SEPARATOR_PATTERN: &str = r"[\p{P}\p{S}\p{Z}]";

/// At least one letter or decimal digit
pub const CONVERTIBLE_PATTERN: &str = r"[\p{L}\p{Nd}]";

/// Sentence-terminating punctuation, ASCII and full-width
pub const SENTENCE_END_CHARS: &[&str] = &[".", "?", "!", "\u{3002}", "\u{FF1F}", "\u{FF01}"];

/// Contiguous glyphs sharing one emphasis outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Span<'g> {
    /// Index of the first glyph in the segmented run
    pub start: usize,
    pub glyphs: &'g [Glyph],
    pub is_bold: bool,
    pub is_highlighted_verb: bool,
    pub is_highlighted_noun: bool,
}

impl<'g> Span<'g> {
    fn new(glyphs: &'g [Glyph], range: Range<usize>, is_bold: bool, pos: PartOfSpeech) -> Self {
        Self {
            start: range.start,
            glyphs: &glyphs[range],
            is_bold,
            is_highlighted_verb: pos.is_verb,
            is_highlighted_noun: pos.is_noun,
        }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn end(&self) -> usize {
        self.start + self.glyphs.len()
    }
}

/// Per-call inputs read from the caller's document state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentContext {
    /// Added to every computed bold count before clamping
    pub parsing_offset: i32,
    /// The previous call on this text flow ended inside a word
    pub continuation: bool,
}

/// Result of segmenting one glyph run
#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation<'g> {
    pub spans: Vec<Span<'g>>,
    /// Continuation flag to pass to the next call on the same flow
    pub continuation: bool,
}

/// Word scanner and emphasis assigner
pub struct Segmenter<T: Tagger = LexiconTagger> {
    classifier: Classifier<T>,
    separator: Regex,
    convertible: Regex,
}

impl Segmenter<LexiconTagger> {
    /// Segmenter backed by the built-in lexicon tagger
    pub fn with_default_tagger() -> Result<Self> {
        Self::new(Classifier::new(LexiconTagger::new()?))
    }
}

impl<T: Tagger> Segmenter<T> {
    pub fn new(classifier: Classifier<T>) -> Result<Self> {
        info!("Compiling glyph segmentation patterns");
        let separator = Regex::new(SEPARATOR_PATTERN)?;
        let convertible = Regex::new(CONVERTIBLE_PATTERN)?;
        Ok(Self {
            classifier,
            separator,
            convertible,
        })
    }

    pub fn classifier(&self) -> &Classifier<T> {
        &self.classifier
    }

    pub fn classifier_mut(&mut self) -> &mut Classifier<T> {
        &mut self.classifier
    }

    /// Drop memoized classifications between unrelated documents
    pub fn reset(&mut self) {
        self.classifier.clear_cache();
    }

    /// Glyph ends any pending word
    pub fn is_separator(&self, glyph: &Glyph) -> bool {
        match glyph.text() {
            GlyphText::Space | GlyphText::Opaque => true,
            GlyphText::Placeholder => false,
            GlyphText::Text(text) => self.separator.is_match(text),
        }
    }

    /// Partition `glyphs` into emphasis spans covering every glyph exactly once, in order
    pub fn segment<'g>(&mut self, glyphs: &'g [Glyph], context: SegmentContext) -> Segmentation<'g> {
        let mut spans = Vec::with_capacity(glyphs.len());
        let mut state = context;
        let mut word_start: Option<usize> = None;
        let mut word = String::new();
        let mut sentence_ends = 0usize;

        for (index, glyph) in glyphs.iter().enumerate() {
            if !self.is_separator(glyph) {
                word_start.get_or_insert(index);
                glyph.push_word_text(&mut word);
                continue;
            }

            if let Some(start) = word_start.take() {
                state.continuation = self.finish_word(glyphs, start..index, &word, state, false, &mut spans);
                word.clear();
            }

            if let GlyphText::Text(text) = glyph.text() {
                if SENTENCE_END_CHARS.contains(&text) {
                    sentence_ends += 1;
                }
            }
            spans.push(Span::new(glyphs, index..index + 1, false, PartOfSpeech::NONE));
        }

        // WHY: a run may end mid-word without a terminating separator; only this word can continue into the next call
        if let Some(start) = word_start {
            state.continuation = self.finish_word(glyphs, start..glyphs.len(), &word, state, true, &mut spans);
        }

        let continuation = state.continuation;
        debug!(glyphs = glyphs.len(), spans = spans.len(), sentence_ends, continuation, "Segmented glyph run");
        Segmentation { spans, continuation }
    }

    /// Emit spans for one completed word and return the updated continuation flag
    ///
    /// `ends_run` marks a word closed by the end of `glyphs` instead of a separator.
    fn finish_word<'g>(
        &mut self,
        glyphs: &'g [Glyph],
        range: Range<usize>,
        word: &str,
        state: SegmentContext,
        ends_run: bool,
        spans: &mut Vec<Span<'g>>,
    ) -> bool {
        let pos = self.classifier.classify(word).exclusive();

        if range.len() == 1 || !self.convertible.is_match(word) {
            spans.push(Span::new(glyphs, range, false, pos));
            return state.continuation;
        }

        let split = bold_split(word, &glyphs[range.clone()], state.parsing_offset, state.continuation, ends_run);
        let boundary = range.start + split.bold_count;

        if split.bold_count > 0 {
            spans.push(Span::new(glyphs, range.start..boundary, true, pos));
        }
        if boundary < range.end {
            spans.push(Span::new(glyphs, boundary..range.end, false, pos));
        }

        split.broken
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::glyphs_from_text;

    fn segmenter() -> Segmenter {
        Segmenter::with_default_tagger().unwrap()
    }

    fn shape(spans: &[Span<'_>]) -> Vec<(usize, bool)> {
        spans.iter().map(|s| (s.len(), s.is_bold)).collect()
    }

    #[test]
    fn test_empty_input() {
        let result = segmenter().segment(&[], SegmentContext::default());
        assert!(result.spans.is_empty());
        assert!(!result.continuation);
    }

    #[test]
    fn test_separator_classes() {
        let segmenter = segmenter();
        for sep in [" ", ",", "+", "\u{00A0}", "\u{2014}", "$"] {
            assert!(segmenter.is_separator(&Glyph::char(sep)), "{sep:?} should separate");
        }
        for non_sep in ["a", "\u{4E2D}", "7", "\u{00E9}"] {
            assert!(!segmenter.is_separator(&Glyph::char(non_sep)), "{non_sep:?} should not separate");
        }
        assert!(segmenter.is_separator(&Glyph::spacing(-300.0)));
        assert!(!segmenter.is_separator(&Glyph::spacing(-40.0)));
        assert!(segmenter.is_separator(&Glyph::Unknown(serde_json::Value::Null)));
    }

    #[test]
    fn test_words_and_separators() {
        let glyphs = glyphs_from_text("Hello, world");
        let result = segmenter().segment(&glyphs, SegmentContext::default());

        // "He|llo" "," " " "wo|rld"
        assert_eq!(shape(&result.spans), [(3, true), (2, false), (1, false), (1, false), (3, true), (2, false)]);
        assert!(!result.continuation);
    }

    #[test]
    fn test_trailing_word_without_separator_is_bolded() {
        let glyphs = glyphs_from_text("a cat");
        let result = segmenter().segment(&glyphs, SegmentContext::default());
        assert_eq!(shape(&result.spans), [(1, false), (1, false), (1, true), (2, false)]);
    }

    #[test]
    fn test_symbol_only_word_is_not_bolded() {
        // combining marks are neither separators nor letters
        let glyphs = vec![Glyph::char("\u{0301}"), Glyph::char("\u{0302}")];
        let result = segmenter().segment(&glyphs, SegmentContext::default());
        assert_eq!(shape(&result.spans), [(2, false)]);
    }

    #[test]
    fn test_cjk_runs_form_words() {
        let glyphs = glyphs_from_text("\u{4E2D}\u{6587}\u{5B57}\u{7B26}");
        let result = segmenter().segment(&glyphs, SegmentContext::default());
        assert_eq!(shape(&result.spans), [(2, true), (2, false)]);
    }

    #[test]
    fn test_reset_clears_classifier_cache() {
        let mut segmenter = segmenter();
        let glyphs = glyphs_from_text("dogs run");
        segmenter.segment(&glyphs, SegmentContext::default());
        assert!(!segmenter.classifier().cache().is_empty());
        segmenter.reset();
        assert!(segmenter.classifier().cache().is_empty());
    }
}

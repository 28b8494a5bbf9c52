// Integration test utilities and common code
// WHY: Centralized stub tagger and glyph builders avoid duplication across integration tests

#![allow(dead_code)]

use anyhow::{bail, Result};
use std::cell::Cell;

use bionic::{glyphs_from_text, Glyph, PartOfSpeech, Segmenter, Span, TaggedTerm, Tagger};
use bionic::pos::Classifier;

/// Tagger with a fixed answer for every word, optionally failing sentence tagging
pub struct StubTagger {
    pub answer: PartOfSpeech,
    pub fail_sentences: bool,
    pub calls: Cell<usize>,
}

impl StubTagger {
    pub fn answering(answer: PartOfSpeech) -> Self {
        Self {
            answer,
            fail_sentences: false,
            calls: Cell::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            answer: PartOfSpeech::NONE,
            fail_sentences: true,
            calls: Cell::new(0),
        }
    }
}

impl Tagger for StubTagger {
    fn tag_word(&self, _word: &str) -> PartOfSpeech {
        self.calls.set(self.calls.get() + 1);
        self.answer
    }

    fn tag_text(&self, text: &str) -> Result<Vec<Vec<TaggedTerm>>> {
        if self.fail_sentences {
            bail!("stub tagger cannot parse {} bytes", text.len());
        }
        Ok(Vec::new())
    }
}

/// Segmenter whose tagger always answers `answer`
pub fn stub_segmenter(answer: PartOfSpeech) -> Segmenter<StubTagger> {
    Segmenter::new(Classifier::new(StubTagger::answering(answer))).expect("Failed to build segmenter")
}

/// Glyph run for `text` followed by a small kerning adjustment, as a wrapped line fragment
pub fn broken_fragment(text: &str) -> Vec<Glyph> {
    let mut glyphs = glyphs_from_text(text);
    glyphs.push(Glyph::spacing(-15.0));
    glyphs
}

/// Glyph run for `text` with a small kerning adjustment after every character
pub fn kerned(text: &str, amount: f64) -> Vec<Glyph> {
    glyphs_from_text(text)
        .into_iter()
        .flat_map(|glyph| [glyph, Glyph::spacing(amount)])
        .collect()
}

/// Flatten spans back into the glyph sequence they cover
pub fn reconstruct(spans: &[Span<'_>]) -> Vec<Glyph> {
    spans.iter().flat_map(|s| s.glyphs.iter().cloned()).collect()
}

/// (glyph count, bold) per span
pub fn shape(spans: &[Span<'_>]) -> Vec<(usize, bool)> {
    spans.iter().map(|s| (s.len(), s.is_bold)).collect()
}

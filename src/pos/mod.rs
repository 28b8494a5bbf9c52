// WHY: Verb/noun classifier combining a pluggable tagger with affix heuristics and exception lists
// Resolution order is fixed so every rendered word gets a deterministic highlight

use serde::Serialize;
use tracing::debug;

pub mod cache;
pub mod context;
pub mod lexicon;
pub mod tagger;

pub use cache::PosCache;
pub use context::WordAnalysis;
pub use lexicon::{AffixSignals, Lexicon};
pub use tagger::{LexiconTagger, TaggedTerm, Tagger, TermTags};

/// Characters removed from a word before classification
/// WHY: U+2060 joins word fragments split by kerning and carries no meaning for tagging
const STRIPPED_CHARS: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-',
    '_', '`', '~', '(', ')', '?', '"', '\'', '[', ']', '\u{2060}',
];

/// Verb/noun classification of one word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartOfSpeech {
    pub is_verb: bool,
    pub is_noun: bool,
}

impl PartOfSpeech {
    pub const NONE: Self = Self { is_verb: false, is_noun: false };
    pub const VERB: Self = Self { is_verb: true, is_noun: false };
    pub const NOUN: Self = Self { is_verb: false, is_noun: true };

    /// Collapse an ambiguous result so verb wins
    pub fn exclusive(self) -> Self {
        if self.is_verb && self.is_noun {
            Self::VERB
        } else {
            self
        }
    }
}

/// Lowercase and strip punctuation
pub fn cleanup_word(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|ch| !STRIPPED_CHARS.contains(ch))
        .collect()
}

/// Part-of-speech classifier with memoized results
pub struct Classifier<T: Tagger> {
    tagger: T,
    lexicon: Lexicon,
    cache: PosCache,
}

impl<T: Tagger> Classifier<T> {
    pub fn new(tagger: T) -> Self {
        Self::with_cache(tagger, PosCache::new())
    }

    pub fn with_cache(tagger: T, cache: PosCache) -> Self {
        Self {
            tagger,
            lexicon: Lexicon::new(),
            cache,
        }
    }

    pub fn tagger(&self) -> &T {
        &self.tagger
    }

    pub fn cache(&self) -> &PosCache {
        &self.cache
    }

    /// Forget all memoized results
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Classify one word, consulting and filling the cache
    pub fn classify(&mut self, word: &str) -> PartOfSpeech {
        let clean = cleanup_word(word);
        if clean.is_empty() {
            return PartOfSpeech::NONE;
        }

        if let Some(cached) = self.cache.get(&clean) {
            return cached;
        }

        if self.lexicon.is_misidentified_noun(&clean) || self.lexicon.is_common_noun(&clean) {
            self.cache.insert(&clean, PartOfSpeech::NOUN);
            return PartOfSpeech::NOUN;
        }

        let tagged = self.tagger.tag_word(&clean);
        let signals = self.lexicon.signals(&clean);
        let resolved = resolve(tagged, signals);

        debug!(word = %clean, ?tagged, ?signals, ?resolved, "Classified word");
        self.cache.insert(&clean, resolved);
        resolved
    }
}

/// Combine tagger output with affix signals for a word outside the exception sets
fn resolve(tagged: PartOfSpeech, signals: AffixSignals) -> PartOfSpeech {
    let mut result = tagged;

    if signals.noun() && !tagged.is_verb {
        result = PartOfSpeech::NOUN;
    } else if signals.verb() && !tagged.is_noun {
        result = PartOfSpeech::VERB;
    }

    if result.is_verb && result.is_noun {
        if signals.noun_suffix && !signals.verb_suffix {
            result.is_verb = false;
        } else {
            // verb suffix alone, or no decisive suffix
            result.is_noun = false;
        }
    }

    result
}

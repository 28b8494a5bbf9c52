// WHY: Sentence-level classification using the preceding term as context
// Tagger failures degrade to per-word classification and never reach the caller

use serde::Serialize;
use tracing::{debug, warn};
use unicode_segmentation::UnicodeSegmentation;

use super::{cleanup_word, Classifier, PartOfSpeech, TaggedTerm, Tagger, TermTags};

/// Classification of one word of analyzed text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordAnalysis {
    /// Word as it appeared in the input
    pub word: String,
    pub is_verb: bool,
    pub is_noun: bool,
}

impl WordAnalysis {
    fn new(word: &str, pos: PartOfSpeech) -> Self {
        Self {
            word: word.to_string(),
            is_verb: pos.is_verb,
            is_noun: pos.is_noun,
        }
    }

    pub fn part_of_speech(&self) -> PartOfSpeech {
        PartOfSpeech {
            is_verb: self.is_verb,
            is_noun: self.is_noun,
        }
    }
}

impl<T: Tagger> Classifier<T> {
    /// Classify every word of `text`, letting neighbouring terms bias the result
    pub fn analyze_context(&mut self, text: &str) -> Vec<WordAnalysis> {
        if text.is_empty() {
            return Vec::new();
        }

        match self.tagger.tag_text(text) {
            Ok(sentences) => {
                let mut results = Vec::new();
                for terms in &sentences {
                    for (index, term) in terms.iter().enumerate() {
                        let previous = index.checked_sub(1).map(|i| &terms[i]);
                        if let Some(analysis) = self.classify_in_context(term, previous) {
                            results.push(analysis);
                        }
                    }
                }
                debug!(sentences = sentences.len(), words = results.len(), "Analyzed text in context");
                results
            }
            Err(err) => {
                warn!(error = %err, "Contextual tagging failed, classifying words individually");
                text.unicode_words()
                    .map(|word| WordAnalysis::new(word, self.classify(word)))
                    .collect()
            }
        }
    }

    fn classify_in_context(&mut self, term: &TaggedTerm, previous: Option<&TaggedTerm>) -> Option<WordAnalysis> {
        let clean = cleanup_word(&term.text);
        if clean.is_empty() {
            return None;
        }

        let tagged = term.tags.part_of_speech();
        let previous_tags = previous.map(|p| p.tags).unwrap_or_default();
        let article_before = previous_tags.intersects(TermTags::DETERMINER | TermTags::ADJECTIVE);
        let auxiliary_before = previous_tags.contains(TermTags::AUXILIARY);

        let signals = self.lexicon.signals(&clean);
        let exception = self.lexicon.is_misidentified_noun(&clean);
        let common = self.lexicon.is_common_noun(&clean);

        let mut result = tagged;

        if article_before && !tagged.is_verb {
            result = PartOfSpeech::NOUN;
        } else if auxiliary_before && !tagged.is_noun {
            result = PartOfSpeech::VERB;
        }

        if (signals.noun() || common || exception) && !tagged.is_verb {
            result.is_noun = true;
        }
        if signals.verb() && !tagged.is_noun && !exception {
            result.is_verb = true;
        }

        if result.is_verb && result.is_noun {
            if exception || common || article_before {
                result.is_verb = false;
            } else if auxiliary_before {
                result.is_noun = false;
            } else if signals.noun_suffix && !signals.verb_suffix {
                result.is_verb = false;
            } else {
                result.is_noun = false;
            }
        }

        self.cache.insert(&clean, result);
        Some(WordAnalysis::new(&term.text, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos::LexiconTagger;
    use anyhow::{bail, Result};

    struct BrokenTagger;

    impl Tagger for BrokenTagger {
        fn tag_word(&self, _word: &str) -> PartOfSpeech {
            PartOfSpeech::NONE
        }

        fn tag_text(&self, _text: &str) -> Result<Vec<Vec<TaggedTerm>>> {
            bail!("sentence parser unavailable")
        }
    }

    fn analyze(text: &str) -> Vec<WordAnalysis> {
        let mut classifier = Classifier::new(LexiconTagger::new().unwrap());
        classifier.analyze_context(text)
    }

    #[test]
    fn test_empty_text() {
        assert!(analyze("").is_empty());
    }

    #[test]
    fn test_determiner_biases_toward_noun() {
        // "walk" is both verb and noun in the lexicon; "the" settles it
        let results = analyze("the walk");
        assert_eq!(results[1].word, "walk");
        assert_eq!(results[1].part_of_speech(), PartOfSpeech::NOUN);
    }

    #[test]
    fn test_auxiliary_biases_toward_verb() {
        let results = analyze("they will walk");
        assert_eq!(results[2].word, "walk");
        assert_eq!(results[2].part_of_speech(), PartOfSpeech::VERB);
    }

    #[test]
    fn test_exception_stays_noun_after_auxiliary() {
        let results = analyze("we will review");
        assert_eq!(results[2].part_of_speech(), PartOfSpeech::NOUN);
    }

    #[test]
    fn test_results_fill_cache() {
        let mut classifier = Classifier::new(LexiconTagger::new().unwrap());
        classifier.analyze_context("The dog runs.");
        assert!(classifier.cache().contains("dog"));
        assert!(classifier.cache().contains("runs"));
    }

    #[test]
    fn test_tagger_failure_falls_back_to_word_classification() {
        let mut classifier = Classifier::new(BrokenTagger);
        let results = classifier.analyze_context("Reasons matter, don't they?");

        let words: Vec<&str> = results.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, ["Reasons", "matter", "don't", "they"]);
        assert_eq!(results[0].part_of_speech(), PartOfSpeech::NOUN);
    }
}

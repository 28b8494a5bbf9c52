// WHY: Base tagger capability consumed by the classifier
// Any implementation is substitutable; LexiconTagger is the built-in English default

use anyhow::Result;
use bitflags::bitflags;
use regex_automata::meta::Regex;
use std::collections::HashSet;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use super::PartOfSpeech;

bitflags! {
    /// Grammatical tags attached to one term of a tagged sentence
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TermTags: u8 {
        const VERB       = 1 << 0;
        const NOUN       = 1 << 1;
        const DETERMINER = 1 << 2;
        const ADJECTIVE  = 1 << 3;
        const AUXILIARY  = 1 << 4;
    }
}

impl TermTags {
    pub fn part_of_speech(self) -> PartOfSpeech {
        PartOfSpeech {
            is_verb: self.contains(TermTags::VERB),
            is_noun: self.contains(TermTags::NOUN),
        }
    }
}

/// One term of a tagged sentence, text as it appeared in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedTerm {
    pub text: String,
    pub tags: TermTags,
}

/// Part-of-speech tagging capability
pub trait Tagger {
    /// Tag a single cleaned word without surrounding context
    fn tag_word(&self, word: &str) -> PartOfSpeech;

    /// Split text into sentences of tagged terms
    fn tag_text(&self, text: &str) -> Result<Vec<Vec<TaggedTerm>>>;
}

impl<T: Tagger + ?Sized> Tagger for Box<T> {
    fn tag_word(&self, word: &str) -> PartOfSpeech {
        (**self).tag_word(word)
    }

    fn tag_text(&self, text: &str) -> Result<Vec<Vec<TaggedTerm>>> {
        (**self).tag_text(text)
    }
}

const VERBS: &[&str] = &[
    "go", "make", "take", "see", "come", "know", "get", "give", "find", "think",
    "tell", "become", "show", "leave", "feel", "put", "bring", "begin", "keep", "hold",
    "write", "stand", "hear", "let", "mean", "set", "meet", "run", "pay", "sit",
    "speak", "lie", "lead", "read", "grow", "lose", "fall", "send", "build", "understand",
    "draw", "break", "spend", "cut", "rise", "drive", "buy", "wear", "choose", "say",
    "use", "work", "call", "try", "ask", "need", "seem", "help", "play", "move",
    "live", "believe", "happen", "include", "continue", "change", "follow", "stop", "create", "open",
    "walk", "win", "remember", "love", "consider", "appear", "wait", "serve", "die", "expect",
    "stay", "reach", "kill", "raise", "pass", "sell", "decide", "return", "explain", "hope",
    "develop", "carry", "add", "allow", "learn", "describe", "provide", "require", "suggest", "produce",
    "jump", "look", "want", "like", "turn", "start", "talk", "eat", "drink", "sleep",
    "record", "present", "object", "process", "contact", "address", "project", "impact", "subject", "contract",
    "contest", "conflict", "face", "offer", "study", "report", "support", "program", "review", "reason",
];

/// Irregular forms that do not derive from a base in `VERBS` by suffix stripping
const IRREGULAR_VERBS: &[&str] = &[
    "went", "gone", "made", "took", "taken", "saw", "seen", "came", "knew", "known",
    "got", "gotten", "gave", "given", "found", "thought", "told", "became", "shown", "left",
    "felt", "brought", "began", "begun", "kept", "held", "wrote", "written", "stood", "heard",
    "meant", "met", "ran", "paid", "sat", "spoke", "spoken", "led", "grew", "grown",
    "lost", "fell", "fallen", "sent", "built", "understood", "drew", "drawn", "broke", "broken",
    "spent", "rose", "risen", "drove", "driven", "bought", "wore", "worn", "chose", "chosen",
    "said", "won", "ate", "eaten", "drank", "slept", "died",
];

const NOUNS: &[&str] = &[
    "time", "year", "people", "way", "day", "man", "woman", "child", "world", "life",
    "hand", "part", "place", "case", "week", "company", "system", "program", "question", "work",
    "government", "number", "night", "point", "home", "water", "room", "mother", "area", "money",
    "story", "fact", "month", "lot", "right", "study", "book", "eye", "job", "word",
    "business", "issue", "side", "kind", "head", "house", "service", "friend", "father", "power",
    "hour", "game", "line", "end", "member", "law", "car", "city", "community", "name",
    "president", "team", "minute", "idea", "kid", "body", "information", "back", "parent", "face",
    "others", "level", "office", "door", "health", "person", "art", "war", "history", "party",
    "result", "morning", "reason", "research", "girl", "guy", "moment", "air", "doctor", "force",
    "education", "dog", "fox", "cat", "tree", "table", "paper", "text", "page", "document",
    "record", "present", "object", "content", "process", "contact", "address", "project", "impact", "subject",
    "contract", "contest", "conflict", "offer", "report", "support", "review", "thing", "group", "call",
    "change", "play", "love", "help", "use", "run", "walk", "look", "turn", "start",
];

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "my", "your", "his",
    "her", "its", "our", "their", "some", "any", "each", "every", "no", "another",
];

const ADJECTIVES: &[&str] = &[
    "good", "new", "first", "last", "long", "great", "little", "own", "other", "old",
    "big", "high", "different", "small", "large", "next", "early", "young", "important", "few",
    "public", "bad", "same", "able", "quick", "brown", "lazy", "red", "blue", "green",
];

const AUXILIARIES: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "do", "does", "did", "will", "would", "shall", "should", "can", "could",
    "may", "might", "must",
];

/// Dictionary-backed English tagger
pub struct LexiconTagger {
    verbs: HashSet<&'static str>,
    irregular_verbs: HashSet<&'static str>,
    nouns: HashSet<&'static str>,
    determiners: HashSet<&'static str>,
    adjectives: HashSet<&'static str>,
    auxiliaries: HashSet<&'static str>,
    /// Terminal punctuation run followed by whitespace
    sentence_break: Regex,
}

impl LexiconTagger {
    pub fn new() -> Result<Self> {
        let sentence_break = Regex::new(r"[.!?\x{3002}\x{FF1F}\x{FF01}]+\s+")?;
        debug!("Compiled sentence break pattern for lexicon tagger");

        Ok(Self {
            verbs: VERBS.iter().copied().collect(),
            irregular_verbs: IRREGULAR_VERBS.iter().copied().collect(),
            nouns: NOUNS.iter().copied().collect(),
            determiners: DETERMINERS.iter().copied().collect(),
            adjectives: ADJECTIVES.iter().copied().collect(),
            auxiliaries: AUXILIARIES.iter().copied().collect(),
            sentence_break,
        })
    }

    /// Full tag set for one lowercase word
    pub fn tags_for(&self, word: &str) -> TermTags {
        let mut tags = TermTags::empty();
        if self.determiners.contains(word) {
            tags |= TermTags::DETERMINER;
        }
        if self.adjectives.contains(word) {
            tags |= TermTags::ADJECTIVE;
        }
        if self.auxiliaries.contains(word) {
            tags |= TermTags::AUXILIARY | TermTags::VERB;
        }
        if self.is_verb_form(word) {
            tags |= TermTags::VERB;
        }
        if self.nouns.contains(word) || self.is_plural_noun(word) {
            tags |= TermTags::NOUN;
        }
        tags
    }

    fn is_verb_form(&self, word: &str) -> bool {
        if self.verbs.contains(word) || self.irregular_verbs.contains(word) {
            return true;
        }
        verb_base_candidates(word)
            .iter()
            .any(|base| self.verbs.contains(base.as_str()))
    }

    fn is_plural_noun(&self, word: &str) -> bool {
        if let Some(stem) = word.strip_suffix("ies") {
            if self.nouns.contains(format!("{stem}y").as_str()) {
                return true;
            }
        }
        if let Some(stem) = word.strip_suffix("es") {
            if self.nouns.contains(stem) {
                return true;
            }
        }
        word.strip_suffix('s')
            .is_some_and(|stem| self.nouns.contains(stem))
    }

    fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;
        for mat in self.sentence_break.find_iter(text) {
            sentences.push(&text[start..mat.end()]);
            start = mat.end();
        }
        if start < text.len() {
            sentences.push(&text[start..]);
        }
        sentences
    }
}

/// Possible base forms of an inflected verb
fn verb_base_candidates(word: &str) -> Vec<String> {
    let mut candidates = Vec::new();
    for suffix in ["ing", "ed"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            candidates.push(stem.to_string());
            candidates.push(format!("{stem}e"));
            // doubled final consonant: "stopped", "running"
            let chars: Vec<char> = stem.chars().collect();
            if chars.len() >= 2 && chars[chars.len() - 1] == chars[chars.len() - 2] {
                candidates.push(chars[..chars.len() - 1].iter().collect());
            }
        }
    }
    if let Some(stem) = word.strip_suffix("ied") {
        candidates.push(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("ies") {
        candidates.push(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("es") {
        candidates.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('d') {
        candidates.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('s') {
        candidates.push(stem.to_string());
    }
    candidates
}

impl Tagger for LexiconTagger {
    fn tag_word(&self, word: &str) -> PartOfSpeech {
        self.tags_for(&word.to_lowercase()).part_of_speech()
    }

    fn tag_text(&self, text: &str) -> Result<Vec<Vec<TaggedTerm>>> {
        let sentences = self
            .split_sentences(text)
            .into_iter()
            .map(|sentence| {
                sentence
                    .unicode_words()
                    .map(|word| TaggedTerm {
                        text: word.to_string(),
                        tags: self.tags_for(&word.to_lowercase()),
                    })
                    .collect::<Vec<_>>()
            })
            .filter(|terms| !terms.is_empty())
            .collect();
        Ok(sentences)
    }
}

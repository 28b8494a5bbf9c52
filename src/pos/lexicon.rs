// WHY: Centralized affix and exception word tables for part-of-speech heuristics
// The tagger alone misreads many short English nouns as verbs

use std::collections::HashSet;

/// Suffixes typical of nouns, plural endings included
pub const NOUN_SUFFIXES: &[&str] = &[
    "ness", "ment", "ship", "hood", "dom", "ity", "tion", "sion", "ance", "ence",
    "ism", "ist", "er", "or", "ian", "ant", "ent", "ee", "ese", "ology", "ician",
    "acy", "al", "age", "ery", "arium", "ium", "ice", "ade", "ure", "itis",
    "s", "es",
];

/// Suffixes typical of verbs, tense endings included
pub const VERB_SUFFIXES: &[&str] = &[
    "ize", "ise", "ify", "ate", "en",
    "ed", "ing", "s", "es",
];

pub const NOUN_PREFIXES: &[&str] = &[
    "anti", "auto", "co", "counter", "cyber", "de", "eco", "ex", "extra", "mega",
    "micro", "mid", "mini", "mis", "mono", "multi", "neo", "non", "omni", "over",
    "pan", "para", "post", "pre", "pro", "pseudo", "re", "semi", "sub", "super",
    "trans", "ultra", "un", "under",
];

pub const VERB_PREFIXES: &[&str] = &[
    "be", "con", "de", "dis", "en", "em", "fore", "in", "inter", "mis",
    "out", "over", "pre", "re", "sub", "trans", "un", "under", "up",
];

/// Words that are almost always nouns in running text
pub const COMMON_NOUNS: &[&str] = &[
    "reason", "reasons", "time", "times", "day", "days", "thing", "things",
    "person", "people", "way", "ways", "man", "men", "woman", "women",
    "child", "children", "world", "place", "places", "case", "cases",
    "part", "parts", "system", "systems", "group", "groups", "fact", "facts",
];

/// Nouns that taggers and verb heuristics commonly mistake for verbs
pub const MISIDENTIFIED_NOUNS: &[&str] = &[
    "reason", "reasons", "record", "records", "present", "presents",
    "object", "objects", "content", "contents", "process", "processes",
    "contact", "contacts", "address", "addresses", "project", "projects",
    "impact", "impacts", "subject", "subjects", "contract", "contracts",
    "contest", "contests", "conflict", "conflicts", "face", "faces",
    "offer", "offers", "study", "studies", "report", "reports",
    "support", "supports", "program", "programs", "review", "reviews",
];

/// Stem must exceed a noun suffix by this many characters
const NOUN_SUFFIX_MARGIN: usize = 1;
/// Stem must exceed a verb suffix by this many characters
const VERB_SUFFIX_MARGIN: usize = 2;
/// Remainder must exceed any prefix by this many characters
const PREFIX_MARGIN: usize = 2;

/// Independent affix signals for one cleaned word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AffixSignals {
    pub noun_suffix: bool,
    pub noun_prefix: bool,
    pub verb_suffix: bool,
    pub verb_prefix: bool,
}

impl AffixSignals {
    pub fn noun(&self) -> bool {
        self.noun_suffix || self.noun_prefix
    }

    pub fn verb(&self) -> bool {
        self.verb_suffix || self.verb_prefix
    }
}

/// Exception-set lookup and affix matching
pub struct Lexicon {
    common_nouns: HashSet<&'static str>,
    misidentified_nouns: HashSet<&'static str>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self {
            common_nouns: COMMON_NOUNS.iter().copied().collect(),
            misidentified_nouns: MISIDENTIFIED_NOUNS.iter().copied().collect(),
        }
    }

    pub fn is_common_noun(&self, word: &str) -> bool {
        self.common_nouns.contains(word)
    }

    pub fn is_misidentified_noun(&self, word: &str) -> bool {
        self.misidentified_nouns.contains(word)
    }

    /// Compute all affix signals; verb signals are suppressed for misidentified nouns
    pub fn signals(&self, word: &str) -> AffixSignals {
        let len = word.chars().count();
        let exception = self.is_misidentified_noun(word);

        AffixSignals {
            noun_suffix: has_suffix(word, len, NOUN_SUFFIXES, NOUN_SUFFIX_MARGIN),
            noun_prefix: has_prefix(word, len, NOUN_PREFIXES, PREFIX_MARGIN),
            verb_suffix: !exception && has_suffix(word, len, VERB_SUFFIXES, VERB_SUFFIX_MARGIN),
            verb_prefix: !exception && has_prefix(word, len, VERB_PREFIXES, PREFIX_MARGIN),
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

fn has_suffix(word: &str, len: usize, suffixes: &[&str], margin: usize) -> bool {
    suffixes
        .iter()
        .any(|suffix| word.ends_with(suffix) && len > suffix.chars().count() + margin)
}

fn has_prefix(word: &str, len: usize, prefixes: &[&str], margin: usize) -> bool {
    prefixes
        .iter()
        .any(|prefix| word.starts_with(prefix) && len > prefix.chars().count() + margin)
}

// WHY: Bold-prefix length rules isolated from the scanning loop
// Pure function of the word and the incoming continuation flag

use tracing::debug;

use crate::glyph::{Glyph, WORD_JOINER};

/// Longest word still treated as the leading fragment of a broken word
const MAX_BROKEN_FRAGMENT: usize = 10;

/// Words shorter than this bold only their first glyph
const SHORT_WORD: usize = 4;

/// Half-word bold counts above this snap toward a nearby consonant
const SNAP_THRESHOLD: usize = 6;

/// Bold decision for one convertible word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoldSplit {
    /// Leading glyphs rendered bold; zero only for the tail of a broken word.
    /// The tail skips the offset and the lower clamp of 1, so it draws fully
    /// light instead of bolding a single glyph.
    pub bold_count: usize,
    /// This word ends mid-word and continues in the next draw call
    pub broken: bool,
}

/// Decide how many leading glyphs of a word are bold
///
/// `word_text` is the concatenated glyph text with placeholders as `WORD_JOINER`,
/// `glyphs` are the word's own glyphs. `ends_run` is true only for a word closed by
/// the end of the glyph run rather than by a separator; only such a word can be the
/// head of a word broken across draw calls.
pub fn bold_split(
    word_text: &str,
    glyphs: &[Glyph],
    parsing_offset: i32,
    previous_broken: bool,
    ends_run: bool,
) -> BoldSplit {
    let word_length = glyphs.len();

    if ends_run && word_text.ends_with(WORD_JOINER) && (1..=MAX_BROKEN_FRAGMENT).contains(&word_length) {
        debug!(word = word_text, "Word may continue in the next draw call");
        return BoldSplit {
            bold_count: clamp_with_offset(word_length, parsing_offset, word_length),
            broken: true,
        };
    }

    if previous_broken {
        // tail of a word whose head was already fully bold
        return BoldSplit { bold_count: 0, broken: false };
    }

    let base = if word_length < SHORT_WORD {
        1
    } else {
        snap_to_consonant(glyphs, word_length.div_ceil(2))
    };

    let bold_count = clamp_with_offset(base, parsing_offset, word_length);
    debug!(word = word_text, word_length, bold_count, "Computed bold prefix");
    BoldSplit { bold_count, broken: false }
}

/// Move a long word's bold count onto the closest consonant if one is adjacent
fn snap_to_consonant(glyphs: &[Glyph], bold_count: usize) -> usize {
    if bold_count <= SNAP_THRESHOLD {
        return bold_count;
    }

    let closest = glyphs
        .iter()
        .enumerate()
        .filter(|(_, glyph)| glyph.is_consonant())
        .map(|(index, _)| index)
        .min_by_key(|index| index.abs_diff(bold_count));

    match closest {
        Some(index) if index.abs_diff(bold_count) < 2 => index + 1,
        _ => bold_count,
    }
}

fn clamp_with_offset(bold_count: usize, parsing_offset: i32, word_length: usize) -> usize {
    let shifted = bold_count as i64 + i64::from(parsing_offset);
    shifted.clamp(1, word_length.max(1) as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::glyphs_from_text;

    fn split(word: &str, offset: i32, previous_broken: bool) -> BoldSplit {
        bold_split(word, &glyphs_from_text(word), offset, previous_broken, false)
    }

    #[test]
    fn test_short_words_bold_one_glyph() {
        assert_eq!(split("a", 0, false).bold_count, 1);
        assert_eq!(split("the", 0, false).bold_count, 1);
    }

    #[test]
    fn test_half_word_rounded_up() {
        assert_eq!(split("word", 0, false).bold_count, 2);
        assert_eq!(split("reads", 0, false).bold_count, 3);
        assert_eq!(split("writing", 0, false).bold_count, 4);
    }

    #[test]
    fn test_long_word_snaps_to_consonant() {
        // ceil(13/2) = 7, glyph 7 is 'd', so the prefix becomes "extraord"
        let result = split("extraordinary", 0, false);
        assert_eq!(result.bold_count, 8);
        assert!(!result.broken);
    }

    #[test]
    fn test_long_word_without_nearby_consonant_keeps_half() {
        // 14 glyphs, ceil = 7; glyphs 6..=8 are vowels
        let result = split("bcdfgbaeiobcdf", 0, false);
        assert_eq!(result.bold_count, 7);
    }

    #[test]
    fn test_offset_is_clamped() {
        assert_eq!(split("word", 5, false).bold_count, 4);
        assert_eq!(split("word", -5, false).bold_count, 1);
        assert_eq!(split("reading", 1, false).bold_count, 5);
    }

    #[test]
    fn test_broken_head_is_fully_bold() {
        let mut glyphs = glyphs_from_text("hyph");
        glyphs.push(Glyph::spacing(-12.0));
        let result = bold_split("hyph\u{2060}", &glyphs, 0, false, true);
        assert_eq!(result, BoldSplit { bold_count: 5, broken: true });
    }

    #[test]
    fn test_kerned_word_closed_by_separator_is_not_broken() {
        let mut glyphs = glyphs_from_text("hyph");
        glyphs.push(Glyph::spacing(-12.0));
        let result = bold_split("hyph\u{2060}", &glyphs, 0, false, false);
        assert_eq!(result, BoldSplit { bold_count: 3, broken: false });
    }

    #[test]
    fn test_long_joined_word_is_not_broken() {
        let mut glyphs = glyphs_from_text("internationally");
        glyphs.push(Glyph::spacing(-12.0));
        let result = bold_split("internationally\u{2060}", &glyphs, 0, false, true);
        assert!(!result.broken);
    }

    #[test]
    fn test_tail_after_broken_word_is_light() {
        let result = split("enation", 0, true);
        assert_eq!(result, BoldSplit { bold_count: 0, broken: false });
    }
}

//! Word, character and reading-time statistics for editor text.
//!
//! Word counting is script-aware: CJK text has no spaces between words, so
//! every CJK character counts as one word, while the rest of the text is
//! split on whitespace as usual.

use serde::Serialize;

/// Assumed reading speed, in words per minute.
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub words: usize,
    /// Non-whitespace characters (Unicode scalar values).
    pub characters: usize,
    pub reading_time_minutes: usize,
}

pub fn calculate_stats(text: &str) -> Stats {
    calculate_stats_with(text, DEFAULT_WORDS_PER_MINUTE)
}

/// Like [`calculate_stats`] with an explicit reading speed. Zero means the default.
pub fn calculate_stats_with(text: &str, words_per_minute: usize) -> Stats {
    if text.trim().is_empty() {
        return Stats::default();
    }

    let visible: String = text.chars().filter(|&c| !is_zero_width(c)).collect();
    let characters = visible.chars().filter(|c| !c.is_whitespace()).count();
    let words = count_words(&visible);

    let words_per_minute = match words_per_minute {
        0 => DEFAULT_WORDS_PER_MINUTE,
        wpm => wpm,
    };
    let stats = Stats {
        words,
        characters,
        reading_time_minutes: words.div_ceil(words_per_minute),
    };
    log::trace!("text stats: {stats:?}");
    stats
}

fn count_words(text: &str) -> usize {
    let cjk = text.chars().filter(|&c| is_cjk(c)).count();
    if cjk == 0 {
        return text.split_whitespace().count();
    }
    let western: String = text
        .chars()
        .map(|c| if is_cjk(c) { ' ' } else { c })
        .collect();
    cjk + western.split_whitespace().count()
}

fn is_zero_width(c: char) -> bool {
    matches!(c, '\u{200B}'..='\u{200D}' | '\u{FEFF}')
}

/// Han (unified + extension A), Hiragana/Katakana and Hangul syllables.
fn is_cjk(c: char) -> bool {
    matches!(
        c,
        '\u{4E00}'..='\u{9FFF}'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{3040}'..='\u{30FF}'
            | '\u{AC00}'..='\u{D7AF}'
    )
}

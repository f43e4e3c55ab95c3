//! Word completion for the query editor, drawn from the RQL vocabulary.

use crate::*;
use itertools::Itertools as _;

crate::reexport!(suggestion);

/// Shortest word that triggers completion.
pub const COMPLETION_THRESHOLD: usize = 3;

/// Suggestions for the word ending at byte offset `cursor` of `text`.
///
/// Nothing is suggested inside strings or comments, or before the word
/// reaches [`COMPLETION_THRESHOLD`] characters. Matching ignores case. A name
/// listed under several vocabularies is suggested once, as its first kind.
pub fn suggest(engine: &HighlightEngine, text: &str, cursor: usize) -> Suggestions {
    let cursor = cursor.min(text.len());
    if !text.is_char_boundary(cursor) || in_literal_text(engine, text, cursor) {
        return vec![];
    }

    let before = &text[..cursor];
    let start = before
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphanumeric() || *c == '_')
        .last()
        .map_or(cursor, |(idx, _)| idx);
    let word = &before[start..];
    if word.chars().count() < COMPLETION_THRESHOLD {
        return vec![];
    }

    let prefix = word.to_lowercase();
    trace!("Completing {prefix:?}");
    vocabulary()
        .filter(|s| s.text().to_lowercase().starts_with(&prefix))
        .sorted_by(|a, b| a.text().cmp(b.text()).then(a.cmp(b)))
        .dedup_by(|a, b| a.text() == b.text())
        .collect()
}

fn vocabulary() -> impl Iterator<Item = Suggestion> {
    let words = |list: &'static [&'static str], kind: fn(&'static str) -> Suggestion| {
        list.iter().copied().map(kind)
    };
    words(KEYWORDS, Suggestion::Keyword)
        .chain(words(CONSTANTS, Suggestion::Constant))
        .chain(words(BUILTIN_FUNCTIONS, Suggestion::Function))
}

fn in_literal_text(engine: &HighlightEngine, text: &str, cursor: usize) -> bool {
    engine
        .tokens(text)
        .find(|t| t.start < cursor && cursor <= t.end)
        .is_some_and(|t| t.style.is_literal_text())
}

//! Lexical layer of the RQL query editor.
//!
//! Modules:
//! - `vocabulary`  : Keyword, builtin-function and constant lists plus the raw patterns.
//! - `style`       : `StyleCategory`, the stable style ids handed to the editor.
//! - `token`       : `Token` (style + byte offsets) and `StyleSpan` (style + length).
//! - `rule`        : Ordered, first-match-wins `RuleSet` with an ordering-hazard check.
//! - `highlighter` : `HighlightEngine`, the scan loop driving a `RuleSet` over text.
//!
//! Design Principles:
//! 1. Accept any input, including half-typed queries and unterminated strings.
//! 2. Rule order is part of the contract; nothing reorders rules behind the caller.
//! 3. No state survives a call except the immutable rule table.
//!
//! Example:
//! ```rust
//! use rql_editor::EditorTheme;
//! use rql_editor::prelude::*;
//!
//! let engine = HighlightEngine::new(&EditorTheme::default()).unwrap();
//! let spans = engine.style_region("select * from t");
//! assert_eq!(spans[0], StyleSpan::new(6, StyleCategory::Keywords));
//! ```

mod highlighter;
mod rule;
mod style;
mod token;
mod vocabulary;

pub use highlighter::{HighlightEngine, Tokens};
pub use rule::{OrderingHazard, RuleSet, RuleSetBuilder, TokenRule};
pub use style::StyleCategory;
pub use token::{StyleSpan, Token};
pub use vocabulary::*;

/// Convenience prelude re-exporting the most commonly used items.
pub mod prelude {
    pub use super::{HighlightEngine, RuleSet, StyleCategory, StyleSpan, Token};
}

#[cfg(test)]
mod tests {
    use crate::EditorTheme;

    #[test]
    fn prelude_import_works() {
        use super::prelude::*;
        let engine = HighlightEngine::new(&EditorTheme::default()).unwrap();
        let tokens = engine.tokens("from x").collect::<Vec<Token>>();
        assert_eq!(tokens[0].style, StyleCategory::Keywords);
        assert_eq!(tokens.last().map(|t| t.end), Some(6));
    }
}

//! Style categories assigned to lexical tokens by the highlighter.
//!
//! The numeric id of each category is stable for the lifetime of the crate
//! and is what gets handed to an editor widget's styling API. Ids follow the
//! declaration order of the built-in theme's style table, with `Default`
//! pinned to `0` because the catch-all token uses it.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[repr(u8)]
pub enum StyleCategory {
    #[display("default")]
    Default = 0,
    #[display("keywords")]
    Keywords = 1,
    #[display("constants")]
    Constants = 2,
    #[display("comments")]
    Comments = 3,
    #[display("strings")]
    Strings = 4,
    #[display("builtInFunctions")]
    BuiltinFunctions = 5,
    #[display("operators")]
    Operators = 6,
    #[display("parens")]
    Parens = 7,
    #[display("numbers")]
    Numbers = 8,
}

impl StyleCategory {
    pub const ALL: [Self; 9] = [
        StyleCategory::Default,
        StyleCategory::Keywords,
        StyleCategory::Constants,
        StyleCategory::Comments,
        StyleCategory::Strings,
        StyleCategory::BuiltinFunctions,
        StyleCategory::Operators,
        StyleCategory::Parens,
        StyleCategory::Numbers,
    ];

    pub const fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(usize::from(id)).copied()
    }

    /// Categories whose tokens should not trigger completion or brace logic.
    pub fn is_literal_text(self) -> bool {
        matches!(self, StyleCategory::Strings | StyleCategory::Comments)
    }
}

/// A completion candidate. Variants name the vocabulary a word comes from,
/// which editors use to pick an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Suggestion {
    #[display("{_0}")]
    Keyword(&'static str),
    #[display("{_0}")]
    Constant(&'static str),
    #[display("{_0}")]
    Function(&'static str),
}
pub type Suggestions = Vec<Suggestion>;

impl Suggestion {
    pub fn text(&self) -> &'static str {
        match self {
            Suggestion::Keyword(text) | Suggestion::Constant(text) | Suggestion::Function(text) => {
                text
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Suggestion::Keyword(_) => "keyword",
            Suggestion::Constant(_) => "constant",
            Suggestion::Function(_) => "function",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_the_word() {
        assert_eq!(Suggestion::Function("read_csv").to_string(), "read_csv");
        assert_eq!(Suggestion::Constant("null").kind(), "constant");
    }

    #[test]
    fn keywords_order_first() {
        assert!(Suggestion::Keyword("zzz") < Suggestion::Constant("aaa"));
        assert!(Suggestion::Constant("zzz") < Suggestion::Function("aaa"));
    }
}

//! Ordered token rules.
//!
//! A [`RuleSet`] is an ordered table of prefix-anchored matchers. Matching is
//! first-match-wins in declaration order; there is no longest-match or
//! specificity ranking. Because of that, declaring `<` before `<=` makes `<=`
//! unreachable. [`RuleSetBuilder::build`] reports such cases for every rule
//! it can see through (word lists and operator literals); free-form patterns
//! are opaque to the check.
use crate::*;
use itertools::Itertools as _;
use regex::{Regex, RegexBuilder};

#[derive(Debug, Clone)]
enum RuleSource {
    Words(Vec<String>),
    Literals(Vec<String>),
    Pattern(String),
}

#[derive(Debug, Clone)]
struct RuleDef {
    style: StyleCategory,
    source: RuleSource,
    case_sensitive: bool,
}

#[derive(Debug, Clone)]
struct Literal {
    text: String,
    /// Word-list entries only match when followed by a non-word character.
    trailing_boundary: bool,
}

/// A compiled rule: an anchored matcher and the style it assigns.
#[derive(Debug, Clone)]
pub struct TokenRule {
    style: StyleCategory,
    matcher: Regex,
    case_sensitive: bool,
    literals: Vec<Literal>,
}

impl TokenRule {
    pub fn style(&self) -> StyleCategory {
        self.style
    }

    /// Anchored source of the compiled matcher.
    pub fn pattern(&self) -> &str {
        self.matcher.as_str()
    }

    /// Byte length of this rule's match at the start of `text`.
    ///
    /// Zero-length matches count as no match so that the scan always moves
    /// forward.
    pub fn match_prefix(&self, text: &str) -> Option<usize> {
        self.matcher
            .find(text)
            .filter(|m| m.start() == 0 && m.end() > 0)
            .map(|m| m.end())
    }

    fn compile(def: RuleDef) -> Result<Self> {
        let (body, literals) = match def.source {
            RuleSource::Words(mut words) => {
                // Longest first so `parse?` is tried before `parse`.
                words.sort_by(|a, b| b.len().cmp(&a.len()));
                let literals = words
                    .into_iter()
                    .map(|text| {
                        let trailing_boundary = text.chars().last().is_some_and(is_word_char);
                        Literal {
                            text,
                            trailing_boundary,
                        }
                    })
                    .collect::<Vec<_>>();
                let body = literals
                    .iter()
                    .map(|lit| {
                        let lead = if lit.text.chars().next().is_some_and(is_word_char) {
                            r"\b"
                        } else {
                            ""
                        };
                        let trail = if lit.trailing_boundary { r"\b" } else { "" };
                        format!("{lead}{}{trail}", regex::escape(&lit.text))
                    })
                    .join("|");
                (body, literals)
            }
            RuleSource::Literals(values) => {
                let body = values.iter().map(|v| regex::escape(v)).join("|");
                let literals = values
                    .into_iter()
                    .map(|text| Literal {
                        text,
                        trailing_boundary: false,
                    })
                    .collect();
                (body, literals)
            }
            RuleSource::Pattern(pattern) => (pattern, Vec::new()),
        };
        let matcher = RegexBuilder::new(&format!("^(?:{body})"))
            .case_insensitive(!def.case_sensitive)
            .build()?;
        Ok(Self {
            style: def.style,
            matcher,
            case_sensitive: def.case_sensitive,
            literals,
        })
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// An earlier literal that wins over a strictly longer literal declared
/// after it, making the longer one unreachable.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{shorter:?} (rule {shorter_rule}) is declared before {longer:?} (rule {longer_rule}) and shadows it")]
pub struct OrderingHazard {
    pub shorter: String,
    pub shorter_rule: usize,
    pub longer: String,
    pub longer_rule: usize,
}

#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<TokenRule>,
    hazards: Vec<OrderingHazard>,
}

impl RuleSet {
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// The RQL rule table: keywords, builtin functions, constants, numbers,
    /// line comments, operators, brackets, strings.
    pub fn rql() -> Result<Self> {
        Self::builder()
            .words(StyleCategory::Keywords, KEYWORDS.iter().copied())
            .words(StyleCategory::BuiltinFunctions, BUILTIN_FUNCTIONS.iter().copied())
            .words(StyleCategory::Constants, CONSTANTS.iter().copied())
            .pattern(StyleCategory::Numbers, NUMBER_PATTERN)
            .pattern(StyleCategory::Comments, LINE_COMMENT_PATTERN)
            .literals(StyleCategory::Operators, OPERATORS.iter().copied())
            .pattern(StyleCategory::Parens, BRACKET_PATTERN)
            .pattern(StyleCategory::Strings, STRING_PATTERN)
            .build()
    }

    pub fn rules(&self) -> &[TokenRule] {
        &self.rules
    }

    pub fn hazards(&self) -> &[OrderingHazard] {
        &self.hazards
    }

    /// First rule matching a prefix of `text`, as `(length, style)`.
    pub fn classify(&self, text: &str) -> Option<(usize, StyleCategory)> {
        self.rules
            .iter()
            .find_map(|rule| rule.match_prefix(text).map(|len| (len, rule.style)))
    }
}

#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    defs: Vec<RuleDef>,
}

impl RuleSetBuilder {
    /// Adds a word-list rule. Each word only matches as a whole word.
    pub fn words<I, S>(self, style: StyleCategory, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = nonempty(words);
        self.push(style, RuleSource::Words(words))
    }

    /// Adds a rule matching any of the literal strings, tried in the given
    /// order.
    pub fn literals<I, S>(self, style: StyleCategory, literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let literals = nonempty(literals);
        self.push(style, RuleSource::Literals(literals))
    }

    /// Adds a rule from a regular expression. It is anchored to the start of
    /// the remaining text.
    pub fn pattern(self, style: StyleCategory, pattern: impl Into<String>) -> Self {
        self.push(style, RuleSource::Pattern(pattern.into()))
    }

    /// Makes the most recently added rule case-sensitive.
    pub fn case_sensitive(mut self) -> Self {
        if let Some(last) = self.defs.last_mut() {
            last.case_sensitive = true;
        }
        self
    }

    pub fn build(self) -> Result<RuleSet> {
        let rules = self
            .defs
            .into_iter()
            .map(TokenRule::compile)
            .collect::<Result<Vec<_>>>()?;
        let hazards = find_hazards(&rules);
        for hazard in &hazards {
            warn!("Token rule ordering hazard: {hazard}");
        }
        debug!("Built {} token rules", rules.len());
        Ok(RuleSet { rules, hazards })
    }

    fn push(mut self, style: StyleCategory, source: RuleSource) -> Self {
        self.defs.push(RuleDef {
            style,
            source,
            case_sensitive: false,
        });
        self
    }
}

fn nonempty<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items
        .into_iter()
        .map(Into::into)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Walks literals in matching order and reports every pair where an earlier
/// literal matches a prefix of a later, longer one.
fn find_hazards(rules: &[TokenRule]) -> Vec<OrderingHazard> {
    let ordered = rules
        .iter()
        .enumerate()
        .flat_map(|(idx, rule)| rule.literals.iter().map(move |lit| (idx, rule, lit)))
        .collect::<Vec<_>>();

    let mut hazards = Vec::new();
    for (i, (short_idx, short_rule, short)) in ordered.iter().enumerate() {
        for (long_idx, _, long) in &ordered[i + 1..] {
            if long.text.len() <= short.text.len() {
                continue;
            }
            let Some(head) = long.text.get(..short.text.len()) else {
                continue;
            };
            let head_matches = if short_rule.case_sensitive {
                head == short.text
            } else {
                head.to_lowercase() == short.text.to_lowercase()
            };
            if !head_matches {
                continue;
            }
            // A whole-word entry cannot stop in the middle of a word.
            let next = long.text[short.text.len()..].chars().next();
            if short.trailing_boundary && next.is_some_and(is_word_char) {
                continue;
            }
            hazards.push(OrderingHazard {
                shorter: short.text.clone(),
                shorter_rule: *short_idx,
                longer: long.text.clone(),
                longer_rule: *long_idx,
            });
        }
    }
    hazards
}

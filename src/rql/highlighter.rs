use crate::*;
use regex::Regex;
use std::ops::Range;

/// Lexical highlighter for RQL source text.
///
/// Scope / Intent:
/// - Drives an ordered [`RuleSet`] across a styling region, producing spans
///   an editor widget can apply one after another.
/// - Stateless between calls: the only state is the rule table and styles
///   fixed at construction, so re-styling any substring after an edit gives
///   the same output as a fresh run over that substring.
///
/// Behavior:
/// - At each position the remaining suffix is matched against the rules in
///   declaration order; the first match wins and is consumed whole.
/// - With no match, a catch-all consumes a whitespace run, a word run, or a
///   single non-word character in the default style.
///
/// Guarantees:
/// - Never fails on input and always makes progress (≥ 1 char per step).
/// - Span lengths (UTF-8 bytes) sum to the length of the styled text.
#[derive(Debug, Clone)]
pub struct HighlightEngine {
    rules: RuleSet,
    fallback: Regex,
    multiline_string: Regex,
    styles: StyleTable,
}

impl HighlightEngine {
    pub fn new(theme: &EditorTheme) -> Result<Self> {
        Self::with_rules(RuleSet::rql()?, theme)
    }

    pub fn with_rules(rules: RuleSet, theme: &EditorTheme) -> Result<Self> {
        Ok(Self {
            rules,
            fallback: Regex::new(FALLBACK_PATTERN)?,
            multiline_string: Regex::new(MULTILINE_STRING_START)?,
            styles: theme.styles.clone(),
        })
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Theme style for a category.
    pub fn text_style(&self, category: StyleCategory) -> &TextStyle {
        self.styles.get(category)
    }

    /// Classify `text` into contiguous spans covering it exactly.
    pub fn style_region(&self, text: &str) -> Vec<StyleSpan> {
        self.tokens(text).map(StyleSpan::from).collect()
    }

    /// Re-style `range` of `buffer` after an edit. The scan restarts at the
    /// start of the range; a range that splits a UTF-8 sequence is widened to
    /// the enclosing character boundaries.
    pub fn style_range(&self, buffer: &str, range: Range<usize>) -> Vec<StyleSpan> {
        let range = char_aligned(buffer, range);
        trace!("Restyling bytes {range:?}");
        self.style_region(&buffer[range])
    }

    /// Tokens of `text` with byte offsets relative to its start.
    pub fn tokens<'a>(&'a self, text: &'a str) -> Tokens<'a> {
        Tokens {
            engine: self,
            text,
            pos: 0,
        }
    }

    /// True when `text` opens a triple-quoted string. Continuation across
    /// lines is not tracked by the scan.
    pub fn starts_multiline_string(&self, text: &str) -> bool {
        self.multiline_string.is_match(text)
    }

    fn next_token(&self, rest: &str) -> (usize, StyleCategory) {
        self.rules
            .classify(rest)
            .unwrap_or_else(|| (self.fallback_len(rest), StyleCategory::Default))
    }

    fn fallback_len(&self, rest: &str) -> usize {
        self.fallback
            .find(rest)
            .map(|m| m.end())
            .filter(|len| *len > 0)
            .unwrap_or_else(|| rest.chars().next().map_or(rest.len(), char::len_utf8))
    }
}

/// Iterator over the tokens of a text, see [`HighlightEngine::tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    engine: &'a HighlightEngine,
    text: &'a str,
    pos: usize,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let rest = self.text.get(self.pos..).filter(|r| !r.is_empty())?;
        let (len, style) = self.engine.next_token(rest);
        let start = self.pos;
        self.pos += len;
        Some(Token::new(style, start, self.pos))
    }
}

fn char_aligned(text: &str, range: Range<usize>) -> Range<usize> {
    let mut start = range.start.min(text.len());
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = range.end.clamp(start, text.len());
    while !text.is_char_boundary(end) {
        end += 1;
    }
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng as _;
    use rstest::rstest;

    fn engine() -> HighlightEngine {
        HighlightEngine::new(&EditorTheme::default()).unwrap()
    }

    fn styled(engine: &HighlightEngine, text: &str) -> Vec<(String, StyleCategory)> {
        engine
            .tokens(text)
            .map(|t| (t.text(text).to_string(), t.style))
            .collect()
    }

    fn assert_covers(text: &str, spans: &[StyleSpan]) {
        assert!(spans.iter().all(|s| s.len >= 1), "empty span in {spans:?}");
        assert_eq!(spans.iter().map(|s| s.len).sum::<usize>(), text.len());
    }

    #[test]
    fn assignment_statement() {
        use StyleCategory::*;
        let e = engine();
        assert_eq!(
            styled(&e, "c := 123.3e23 + 2 < 45;"),
            vec![
                ("c".into(), Default),
                (" ".into(), Default),
                (":=".into(), Operators),
                (" ".into(), Default),
                ("123.3e23".into(), Numbers),
                (" ".into(), Default),
                ("+".into(), Operators),
                (" ".into(), Default),
                ("2".into(), Numbers),
                (" ".into(), Default),
                ("<".into(), Operators),
                (" ".into(), Default),
                ("45".into(), Numbers),
                (";".into(), Default),
            ]
        );
    }

    #[test]
    fn select_with_builtin_and_string() {
        use StyleCategory::*;
        let e = engine();
        assert_eq!(
            styled(&e, r#"a := select * from read("dropbox://x");"#),
            vec![
                ("a".into(), Default),
                (" ".into(), Default),
                (":=".into(), Operators),
                (" ".into(), Default),
                ("select".into(), Keywords),
                (" ".into(), Default),
                ("*".into(), Default),
                (" ".into(), Default),
                ("from".into(), Keywords),
                (" ".into(), Default),
                ("read".into(), BuiltinFunctions),
                ("(".into(), Parens),
                (r#""dropbox://x""#.into(), Strings),
                (")".into(), Parens),
                (";".into(), Default),
            ]
        );
    }

    #[test]
    fn less_equal_is_one_operator_span() {
        let e = engine();
        let spans = e.style_region("a <= b");
        assert_eq!(spans[2], StyleSpan::new(2, StyleCategory::Operators));
        assert_eq!(spans.len(), 5);
    }

    #[test]
    fn reversed_operator_order_splits_the_token() {
        let rules = RuleSet::builder()
            .literals(StyleCategory::Operators, ["<", "<="])
            .build()
            .unwrap();
        assert_eq!(rules.hazards().len(), 1);
        let e = HighlightEngine::with_rules(rules, &EditorTheme::default()).unwrap();
        assert_eq!(
            e.style_region("<="),
            vec![
                StyleSpan::new(1, StyleCategory::Operators),
                StyleSpan::new(1, StyleCategory::Default),
            ]
        );
    }

    #[rstest]
    #[case("// comment only", vec![("// comment only", StyleCategory::Comments)])]
    #[case("x // tail\ny", vec![
        ("x", StyleCategory::Default),
        (" ", StyleCategory::Default),
        ("// tail", StyleCategory::Comments),
        ("\n", StyleCategory::Default),
        ("y", StyleCategory::Default),
    ])]
    #[case(r#""unterminated"#, vec![
        ("\"", StyleCategory::Default),
        ("unterminated", StyleCategory::Default),
    ])]
    #[case("SELECT Null", vec![
        ("SELECT", StyleCategory::Keywords),
        (" ", StyleCategory::Default),
        ("Null", StyleCategory::Constants),
    ])]
    #[case("record(name: string)", vec![
        ("record", StyleCategory::Constants),
        ("(", StyleCategory::Parens),
        ("name", StyleCategory::Default),
        (":", StyleCategory::Operators),
        (" ", StyleCategory::Default),
        ("string", StyleCategory::Constants),
        (")", StyleCategory::Parens),
    ])]
    #[case("héllo wörld", vec![
        ("héllo", StyleCategory::Default),
        (" ", StyleCategory::Default),
        ("wörld", StyleCategory::Default),
    ])]
    #[case("\t\n  ", vec![("\t\n  ", StyleCategory::Default)])]
    fn styles_tokens(#[case] text: &str, #[case] expected: Vec<(&str, StyleCategory)>) {
        let e = engine();
        let expected = expected
            .into_iter()
            .map(|(s, c)| (s.to_string(), c))
            .collect::<Vec<_>>();
        assert_eq!(styled(&e, text), expected);
    }

    #[test]
    fn empty_text_has_no_spans() {
        assert!(engine().style_region("").is_empty());
    }

    #[test]
    fn spans_cover_random_text() {
        const ALPHABET: &[char] = &[
            'a', 's', 'e', 'l', 'c', 't', '1', '9', '.', 'e', '+', '-', '<', '=', '>', ':', '"',
            '\\', '/', ' ', '\n', '(', ')', '[', '{', 'r', '_', 'é', '€', '?', '@', '~',
        ];
        let e = engine();
        let mut rng = rand::rng();
        for _ in 0..200 {
            let len = rng.random_range(0..80);
            let text = (0..len)
                .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
                .collect::<String>();
            let spans = e.style_region(&text);
            assert_covers(&text, &spans);

            // Tokens are contiguous and ordered.
            let mut pos = 0;
            for token in e.tokens(&text) {
                assert_eq!(token.start, pos, "gap before {token:?} in {text:?}");
                pos = token.end;
            }
            assert_eq!(pos, text.len());
        }
    }

    #[test]
    fn restyling_is_deterministic() {
        let e = engine();
        let text = r#"typealias person := record(name: string, age: int);"#;
        let first = e.style_region(text);
        let _ = e.style_region("something else entirely");
        assert_eq!(e.style_region(text), first);
    }

    #[test]
    fn style_range_restarts_at_range_start() {
        let e = engine();
        let buffer = "xselect from";
        // Starting inside the identifier makes `select` a standalone word.
        let spans = e.style_range(buffer, 1..7);
        assert_eq!(spans, vec![StyleSpan::new(6, StyleCategory::Keywords)]);
    }

    #[test]
    fn style_range_widens_to_char_boundaries() {
        let e = engine();
        let buffer = "é1";
        // Byte 1 is in the middle of `é`.
        let spans = e.style_range(buffer, 1..3);
        assert_covers(buffer, &spans);
        let spans = e.style_range(buffer, 10..20);
        assert!(spans.is_empty());
    }

    #[test]
    fn detects_multiline_string_opening() {
        let e = engine();
        assert!(e.starts_multiline_string(r#""""multi"#));
        assert!(!e.starts_multiline_string(r#""single""#));
        assert!(!e.starts_multiline_string(r#"x = """"#));
    }

    #[test]
    fn exposes_theme_styles() {
        let e = engine();
        assert!(e.text_style(StyleCategory::Keywords).bold);
        assert!(!e.text_style(StyleCategory::Comments).bold);
    }
}

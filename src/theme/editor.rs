use crate::*;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct TextStyle {
    pub color: Color,
    #[serde(default)]
    pub bold: bool,
}

impl TextStyle {
    pub const fn new(color: Color, bold: bool) -> Self {
        Self { color, bold }
    }
}

/// Per-category text styles of the query editor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleTable {
    pub default: TextStyle,
    pub keywords: TextStyle,
    pub constants: TextStyle,
    pub comments: TextStyle,
    pub strings: TextStyle,
    pub built_in_functions: TextStyle,
    pub operators: TextStyle,
    pub parens: TextStyle,
    pub numbers: TextStyle,
}

impl StyleTable {
    pub fn get(&self, category: StyleCategory) -> &TextStyle {
        match category {
            StyleCategory::Default => &self.default,
            StyleCategory::Keywords => &self.keywords,
            StyleCategory::Constants => &self.constants,
            StyleCategory::Comments => &self.comments,
            StyleCategory::Strings => &self.strings,
            StyleCategory::BuiltinFunctions => &self.built_in_functions,
            StyleCategory::Operators => &self.operators,
            StyleCategory::Parens => &self.parens,
            StyleCategory::Numbers => &self.numbers,
        }
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            default: TextStyle::new(Color::rgb(0x00, 0x00, 0x00), false),
            keywords: TextStyle::new(Color::rgb(0x00, 0x00, 0x7f), true),
            constants: TextStyle::new(Color::rgb(0x00, 0x7f, 0x7f), true),
            comments: TextStyle::new(Color::rgb(0x7f, 0x7f, 0x7f), false),
            strings: TextStyle::new(Color::rgb(0xcc, 0x66, 0x00), false),
            built_in_functions: TextStyle::new(Color::rgb(0x00, 0x7f, 0x00), true),
            operators: TextStyle::new(Color::rgb(0x9f, 0x50, 0x00), false),
            parens: TextStyle::new(Color::rgb(0x00, 0x00, 0x00), true),
            numbers: TextStyle::new(Color::rgb(0x7f, 0x00, 0x7f), false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EditorTheme {
    pub default_font: Font,
    pub default_color: Color,
    pub default_paper_color: Color,
    #[serde(rename = "MarginBackGroundColor")]
    pub margin_background_color: Color,
    pub marker_background_color: Color,
    #[serde(deserialize_with = "super::value::optional_color")]
    pub caret_foreground_color: Option<Color>,
    pub caret_line_background_color: Color,
    pub matched_brace_foreground_color: Color,
    pub matched_brace_background_color: Color,
    #[serde(rename = "styles")]
    pub styles: StyleTable,
}

impl EditorTheme {
    pub fn style(&self, category: StyleCategory) -> &TextStyle {
        self.styles.get(category)
    }
}

impl Default for EditorTheme {
    fn default() -> Self {
        Self {
            default_font: Font::new("Consolas", 12),
            default_color: Color::argb(0xff, 0x00, 0x00, 0x00),
            default_paper_color: Color::argb(0xff, 0xff, 0xff, 0xff),
            margin_background_color: Color::rgb(0xcc, 0xcc, 0xcc),
            marker_background_color: Color::rgb(0xee, 0x11, 0x11),
            caret_foreground_color: None,
            caret_line_background_color: Color::rgb(0xff, 0xe4, 0xe4),
            matched_brace_foreground_color: Color::rgb(0xff, 0x00, 0x00),
            matched_brace_background_color: Color::rgb(0xff, 0xff, 0xff),
            styles: StyleTable::default(),
        }
    }
}

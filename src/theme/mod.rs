//! Theme configuration consumed at startup.
//!
//! A theme document is JSON with three sections (`Editor`, `QueryView`,
//! `Widgets`). Leaves carrying a `__type__` marker are decoded into typed
//! values (`Color`, `Font`); everything else is a plain scalar. Missing keys
//! and `null` sections fall back to the built-in theme, so an empty document
//! yields [`Theme::default`].
//!
//! The resulting [`Theme`] is immutable and handed to each component on
//! construction. Nothing in the crate looks styles up ambiently.

crate::reexport!(value);
crate::reexport!(editor);
crate::reexport!(query_view);

use crate::*;
use serde::Deserialize;
use std::{collections::BTreeMap, path::Path};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "ThemeDocument")]
pub struct Theme {
    pub editor: EditorTheme,
    pub query_view: ResultTheme,
    /// Application palette roles (e.g. `Window`, `Base`, `Text`).
    pub widgets: BTreeMap<String, Color>,
}

impl Theme {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading theme from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ThemeDocument {
    #[serde(default)]
    editor: Option<EditorTheme>,
    #[serde(default)]
    query_view: Option<ResultTheme>,
    #[serde(default)]
    widgets: Option<BTreeMap<String, Color>>,
}

impl From<ThemeDocument> for Theme {
    fn from(doc: ThemeDocument) -> Self {
        Self {
            editor: doc.editor.unwrap_or_default(),
            query_view: doc.query_view.unwrap_or_default(),
            widgets: doc.widgets.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default_theme() {
        assert_eq!(Theme::from_json("{}").unwrap(), Theme::default());
    }

    #[test]
    fn null_sections_fall_back() {
        let theme =
            Theme::from_json(r#"{"Editor": null, "QueryView": null, "Widgets": null}"#).unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let theme = Theme::from_json(
            r##"{
                "Editor": {
                    "DefaultFont": {"__type__": "font", "family": "Fira Code", "pointSize": 14},
                    "styles": {"keywords": {"color": {"__type__": "color", "color": "#ff0000"}, "bold": false}}
                },
                "QueryView": {"NullColor": {"__type__": "color", "color": "#123456"}},
                "Widgets": {"Window": {"__type__": "color", "color": "#202020"}}
            }"##,
        )
        .unwrap();

        assert_eq!(theme.editor.default_font, Font::new("Fira Code", 14));
        let keywords = theme.editor.styles.get(StyleCategory::Keywords);
        assert_eq!(keywords.color, Color::rgb(0xff, 0, 0));
        assert!(!keywords.bold);
        assert_eq!(
            theme.editor.styles.get(StyleCategory::Numbers),
            EditorTheme::default().styles.get(StyleCategory::Numbers)
        );
        assert_eq!(theme.query_view.null_color, Color::rgb(0x12, 0x34, 0x56));
        assert_eq!(
            theme.query_view.string_color,
            ResultTheme::default().string_color
        );
        assert_eq!(theme.widgets["Window"], Color::rgb(0x20, 0x20, 0x20));
    }

    #[test]
    fn unknown_marker_is_rejected() {
        let err = Theme::from_json(
            r##"{"Widgets": {"Window": {"__type__": "gradient", "color": "#000000"}}}"##,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Json(_)), "unexpected error {err:?}");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Theme::load("/definitely/not/a/theme.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)), "unexpected error {err:?}");
    }
}

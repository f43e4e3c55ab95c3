use crate::*;
use serde::Deserialize;

/// Colors of the query result views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResultTheme {
    pub null_color: Color,
    pub string_color: Color,
    pub numeric_type_color: Color,
    pub temporal_color: Color,
    pub default_type_color: Color,
    pub query_error_text_color: Color,
    pub record_field_color: Color,
    pub record_inner_color: Color,
    pub collection_index_color: Color,
    pub collection_inner_color: Color,
}

impl ResultTheme {
    pub fn color(&self, tag: ColorTag) -> Color {
        match tag {
            ColorTag::Null => self.null_color,
            ColorTag::String => self.string_color,
            ColorTag::Numeric => self.numeric_type_color,
            ColorTag::Temporal => self.temporal_color,
            ColorTag::Default => self.default_type_color,
            ColorTag::Error => self.query_error_text_color,
            ColorTag::Field => self.record_field_color,
            ColorTag::RecordInner => self.record_inner_color,
            ColorTag::CollectionIndex => self.collection_index_color,
            ColorTag::CollectionInner => self.collection_inner_color,
        }
    }
}

impl Default for ResultTheme {
    fn default() -> Self {
        Self {
            null_color: Color::rgb(0x7f, 0x7f, 0x7f),
            string_color: Color::rgb(0x9a, 0x22, 0x00),
            numeric_type_color: Color::rgb(0x00, 0x4f, 0x00),
            temporal_color: Color::rgb(0x00, 0x4f, 0x00),
            default_type_color: Color::rgb(0x00, 0x00, 0x8f),
            query_error_text_color: Color::rgb(0x8f, 0x00, 0x00),
            record_field_color: Color::rgb(0x00, 0x00, 0x00),
            record_inner_color: Color::rgb(0x7f, 0x7f, 0x7f),
            collection_index_color: Color::rgb(0x5f, 0x00, 0x00),
            collection_inner_color: Color::rgb(0x7f, 0x7f, 0x7f),
        }
    }
}

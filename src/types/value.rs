use itertools::Itertools as _;
use std::{collections::BTreeMap, fmt};

static NULL: DataValue = DataValue::Null;

/// A query result value, shaped by a [`crate::TypeDescriptor`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DataValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Record(BTreeMap<String, DataValue>),
    Collection(Vec<DataValue>),
}

impl DataValue {
    pub fn record<I, S, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: Into<DataValue>,
    {
        DataValue::Record(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    /// Attribute of a record. Missing attributes and non-record values read as null.
    pub fn field(&self, name: &str) -> &DataValue {
        match self {
            DataValue::Record(fields) => fields.get(name).unwrap_or(&NULL),
            _ => &NULL,
        }
    }

    /// Items of a collection, empty for anything else.
    pub fn items(&self) -> &[DataValue] {
        match self {
            DataValue::Collection(items) => items,
            _ => &[],
        }
    }

    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::String(s) => write!(f, "{s:?}"),
            other => write!(f, "{other}"),
        }
    }
}

/// Text shown in result cells. Strings print raw at the top level and quoted
/// when nested inside a record or collection.
impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Null => f.write_str("null"),
            DataValue::Bool(b) => write!(f, "{b}"),
            DataValue::Int(i) => write!(f, "{i}"),
            DataValue::Float(x) => write!(f, "{x:?}"),
            DataValue::String(s) => f.write_str(s),
            DataValue::Record(fields) => write!(
                f,
                "{{{}}}",
                fields.iter().format_with(", ", |(name, value), f| {
                    f(&format_args!("{name}: "))?;
                    f(&Nested(value))
                })
            ),
            DataValue::Collection(items) => write!(
                f,
                "[{}]",
                items.iter().format_with(", ", |value, f| f(&Nested(value)))
            ),
        }
    }
}

struct Nested<'a>(&'a DataValue);

impl fmt::Display for Nested<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_nested(f)
    }
}

impl From<serde_json::Value> for DataValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => DataValue::Null,
            Value::Bool(b) => DataValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => DataValue::Int(i),
                None => n.as_f64().map_or(DataValue::Null, DataValue::Float),
            },
            Value::String(s) => DataValue::String(s),
            Value::Array(items) => DataValue::Collection(items.into_iter().map(Into::into).collect()),
            Value::Object(fields) => {
                DataValue::Record(fields.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<bool> for DataValue {
    fn from(value: bool) -> Self {
        DataValue::Bool(value)
    }
}

impl From<i64> for DataValue {
    fn from(value: i64) -> Self {
        DataValue::Int(value)
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        DataValue::Float(value)
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        DataValue::String(value.to_string())
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        DataValue::String(value)
    }
}

impl<T: Into<DataValue>> From<Option<T>> for DataValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(DataValue::Null, Into::into)
    }
}

impl<T: Into<DataValue>> From<Vec<T>> for DataValue {
    fn from(items: Vec<T>) -> Self {
        DataValue::Collection(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn converts_json_documents() {
        let value = DataValue::from(json!({
            "a": 1,
            "b": [1.5, null, true],
            "c": "text",
            "big": 18446744073709551615u64,
        }));
        assert_eq!(value.field("a"), &DataValue::Int(1));
        assert_eq!(
            value.field("b").items(),
            &[DataValue::Float(1.5), DataValue::Null, DataValue::Bool(true)]
        );
        assert_eq!(value.field("c"), &DataValue::from("text"));
        assert!(matches!(value.field("big"), DataValue::Float(_)));
    }

    #[test]
    fn missing_fields_read_as_null() {
        let value = DataValue::record([("a", 1i64)]);
        assert!(value.field("zzz").is_null());
        assert!(DataValue::Int(3).field("a").is_null());
        assert!(DataValue::Int(3).items().is_empty());
    }

    #[rstest]
    #[case(DataValue::Null, "null")]
    #[case(DataValue::Bool(false), "false")]
    #[case(DataValue::Int(-7), "-7")]
    #[case(DataValue::Float(2.0), "2.0")]
    #[case(DataValue::Float(1.23e23), "1.23e23")]
    #[case(DataValue::from("Hello"), "Hello")]
    #[case(DataValue::from(vec![1i64, 2]), "[1, 2]")]
    #[case(DataValue::record([("e", "x")]), r#"{e: "x"}"#)]
    #[case(DataValue::from(vec![DataValue::record([("a", vec![DataValue::Null])])]), "[{a: [null]}]")]
    fn displays_cell_text(#[case] value: DataValue, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn options_map_none_to_null() {
        assert!(DataValue::from(None::<i64>).is_null());
        assert_eq!(DataValue::from(Some("x")), DataValue::from("x"));
    }
}

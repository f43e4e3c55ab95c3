use crate::*;

/// Semantic color of a rendered cell, resolved to a concrete color by
/// [`ResultTheme::color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ColorTag {
    #[display("null")]
    Null,
    #[display("string")]
    String,
    #[display("numeric")]
    Numeric,
    #[display("temporal")]
    Temporal,
    #[display("default")]
    Default,
    #[display("error")]
    Error,
    #[display("field")]
    Field,
    #[display("record inner")]
    RecordInner,
    #[display("collection index")]
    CollectionIndex,
    #[display("collection inner")]
    CollectionInner,
}

impl ColorTag {
    pub fn for_kind(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::String => ColorTag::String,
            kind if kind.is_numeric() => ColorTag::Numeric,
            kind if kind.is_temporal() => ColorTag::Temporal,
            _ => ColorTag::Default,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub text: String,
    pub color: ColorTag,
}

impl Cell {
    pub fn new(text: impl Into<String>, color: ColorTag) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }

    pub fn null() -> Self {
        Self::new("null", ColorTag::Null)
    }

    /// Cell for `value` declared as `ty`. Null wins over the declared type;
    /// non-primitive values are printed whole in the default color.
    pub fn value(ty: &TypeDescriptor, value: &DataValue) -> Self {
        match (ty, value) {
            (_, DataValue::Null) => Self::null(),
            (TypeDescriptor::Primitive(kind), value) => {
                Self::new(value.to_string(), ColorTag::for_kind(*kind))
            }
            (_, value) => Self::new(value.to_string(), ColorTag::Default),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PrimitiveKind::String, ColorTag::String)]
    #[case(PrimitiveKind::Int, ColorTag::Numeric)]
    #[case(PrimitiveKind::Double, ColorTag::Numeric)]
    #[case(PrimitiveKind::Date, ColorTag::Temporal)]
    #[case(PrimitiveKind::Interval, ColorTag::Temporal)]
    #[case(PrimitiveKind::Bool, ColorTag::Default)]
    #[case(PrimitiveKind::Null, ColorTag::Default)]
    fn colors_follow_leaf_kind(#[case] kind: PrimitiveKind, #[case] tag: ColorTag) {
        assert_eq!(ColorTag::for_kind(kind), tag);
    }

    #[test]
    fn null_overrides_declared_type() {
        let ty = TypeDescriptor::primitive(PrimitiveKind::String);
        assert_eq!(Cell::value(&ty, &DataValue::Null), Cell::null());
        assert_eq!(Cell::value(&ty, &"x".into()), Cell::new("x", ColorTag::String));
    }

    #[test]
    fn nested_values_print_whole() {
        let ty = TypeDescriptor::collection(TypeDescriptor::primitive(PrimitiveKind::Int));
        assert_eq!(
            Cell::value(&ty, &DataValue::from(vec![1i64, 2])),
            Cell::new("[1, 2]", ColorTag::Default)
        );
    }
}

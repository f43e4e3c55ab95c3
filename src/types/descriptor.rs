use crate::*;
use itertools::Itertools as _;
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum PrimitiveKind {
    #[display("string")]
    String,
    #[display("int")]
    Int,
    #[display("long")]
    Long,
    #[display("short")]
    Short,
    #[display("byte")]
    Byte,
    #[display("float")]
    Float,
    #[display("double")]
    Double,
    #[display("decimal")]
    Decimal,
    #[display("date")]
    Date,
    #[display("time")]
    Time,
    #[display("timestamp")]
    Timestamp,
    #[display("interval")]
    Interval,
    #[display("bool")]
    Bool,
    #[display("null")]
    Null,
}

impl PrimitiveKind {
    pub const ALL: [Self; 14] = [
        PrimitiveKind::String,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Short,
        PrimitiveKind::Byte,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::Decimal,
        PrimitiveKind::Date,
        PrimitiveKind::Time,
        PrimitiveKind::Timestamp,
        PrimitiveKind::Interval,
        PrimitiveKind::Bool,
        PrimitiveKind::Null,
    ];

    /// Classify a wire type tag. Returns `None` for non-primitive or unknown tags.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub const fn name(self) -> &'static str {
        use PrimitiveKind::*;
        match self {
            String => "string",
            Int => "int",
            Long => "long",
            Short => "short",
            Byte => "byte",
            Float => "float",
            Double => "double",
            Decimal => "decimal",
            Date => "date",
            Time => "time",
            Timestamp => "timestamp",
            Interval => "interval",
            Bool => "bool",
            Null => "null",
        }
    }

    pub fn is_numeric(self) -> bool {
        use PrimitiveKind::*;
        matches!(self, Int | Long | Short | Byte | Float | Double | Decimal)
    }

    pub fn is_temporal(self) -> bool {
        use PrimitiveKind::*;
        matches!(self, Date | Time | Timestamp | Interval)
    }
}

/// Self-describing type of a query result.
///
/// Deserializes from the service's wire shape:
/// `{"type": "int"}`, `{"type": "record", "atts": [{"idn": "a", "type": ..}]}`,
/// `{"type": "collection", "inner": ..}` (likewise `"array"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "WireType")]
pub enum TypeDescriptor {
    Primitive(PrimitiveKind),
    Record(Vec<Attribute>),
    Collection(Box<TypeDescriptor>),
    Array(Box<TypeDescriptor>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Attribute {
    #[serde(rename = "idn")]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
}

impl Attribute {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

impl TypeDescriptor {
    pub const fn primitive(kind: PrimitiveKind) -> Self {
        TypeDescriptor::Primitive(kind)
    }

    pub fn record<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (S, TypeDescriptor)>,
        S: Into<String>,
    {
        TypeDescriptor::Record(
            attributes
                .into_iter()
                .map(|(name, ty)| Attribute::new(name, ty))
                .collect(),
        )
    }

    pub fn collection(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Collection(Box::new(inner))
    }

    pub fn array(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Array(Box::new(inner))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeDescriptor::Primitive(_))
    }

    /// Element type of a collection or array.
    pub fn element(&self) -> Option<&TypeDescriptor> {
        match self {
            TypeDescriptor::Collection(inner) | TypeDescriptor::Array(inner) => Some(inner),
            TypeDescriptor::Primitive(_) | TypeDescriptor::Record(_) => None,
        }
    }

    /// Tag name as used on the wire and in result headers.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeDescriptor::Primitive(kind) => kind.name(),
            TypeDescriptor::Record(_) => "record",
            TypeDescriptor::Collection(_) => "collection",
            TypeDescriptor::Array(_) => "array",
        }
    }
}

/// RQL type syntax, e.g. `collection(record(a: int, e: string))`.
impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Primitive(kind) => write!(f, "{kind}"),
            TypeDescriptor::Record(atts) => write!(
                f,
                "record({})",
                atts.iter()
                    .format_with(", ", |att, f| f(&format_args!("{}: {}", att.name, att.ty)))
            ),
            TypeDescriptor::Collection(inner) => write!(f, "collection({inner})"),
            TypeDescriptor::Array(inner) => write!(f, "array({inner})"),
        }
    }
}

#[derive(Deserialize)]
struct WireType {
    #[serde(rename = "type")]
    tag: String,
    #[serde(default)]
    atts: Option<Vec<Attribute>>,
    #[serde(default)]
    inner: Option<Box<TypeDescriptor>>,
}

impl TryFrom<WireType> for TypeDescriptor {
    type Error = Error;

    fn try_from(wire: WireType) -> Result<Self> {
        let missing = |field: &str| Error::InvalidType(format!("{} type without {field}", wire.tag));
        match wire.tag.as_str() {
            "record" => Ok(TypeDescriptor::Record(wire.atts.ok_or_else(|| missing("atts"))?)),
            "collection" => Ok(TypeDescriptor::Collection(
                wire.inner.ok_or_else(|| missing("inner"))?,
            )),
            "array" => Ok(TypeDescriptor::Array(
                wire.inner.ok_or_else(|| missing("inner"))?,
            )),
            tag => PrimitiveKind::from_name(tag)
                .map(TypeDescriptor::Primitive)
                .ok_or_else(|| Error::InvalidType(format!("unknown type tag {tag:?}"))),
        }
    }
}

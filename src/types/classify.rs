use crate::*;

/// Whether a result of type `ty` can be shown as a flat table.
///
/// Primitives are tabular. A record is tabular when every attribute is
/// primitive. A collection or array is tabular when its element is a
/// primitive or such a flat record. Anything nested deeper is shown as a tree.
pub fn is_tabular(ty: &TypeDescriptor) -> bool {
    match ty {
        TypeDescriptor::Primitive(_) => true,
        TypeDescriptor::Record(atts) => is_flat_record(atts),
        TypeDescriptor::Collection(inner) | TypeDescriptor::Array(inner) => match inner.as_ref() {
            TypeDescriptor::Primitive(_) => true,
            TypeDescriptor::Record(atts) => is_flat_record(atts),
            TypeDescriptor::Collection(_) | TypeDescriptor::Array(_) => false,
        },
    }
}

/// Table headers for `ty`: attribute names in declaration order for records
/// (looking through collections), or the kind name for a primitive.
pub fn column_headers(ty: &TypeDescriptor) -> Vec<String> {
    match ty {
        TypeDescriptor::Primitive(kind) => vec![kind.name().to_string()],
        TypeDescriptor::Record(atts) => atts.iter().map(|att| att.name.clone()).collect(),
        TypeDescriptor::Collection(inner) | TypeDescriptor::Array(inner) => column_headers(inner),
    }
}

fn is_flat_record(atts: &[Attribute]) -> bool {
    atts.iter().all(|att| att.ty.is_primitive())
}

use crate::*;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableModel {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// Flatten a result into rows.
///
/// A collection gives one row per item, each item projected through the
/// element type. A record or primitive gives exactly one row. Null data
/// renders as a single null cell in place of the row.
pub fn render_table(ty: &TypeDescriptor, data: &DataValue) -> TableModel {
    let rows = match ty.element() {
        Some(element) if !data.is_null() => {
            data.items().iter().map(|item| row(element, item)).collect()
        }
        _ => vec![row(ty, data)],
    };
    TableModel {
        headers: column_headers(ty),
        rows,
    }
}

fn row(ty: &TypeDescriptor, data: &DataValue) -> Vec<Cell> {
    match ty {
        _ if data.is_null() => vec![Cell::null()],
        TypeDescriptor::Record(atts) => atts
            .iter()
            .map(|att| Cell::value(&att.ty, data.field(&att.name)))
            .collect(),
        _ => vec![Cell::value(ty, data)],
    }
}

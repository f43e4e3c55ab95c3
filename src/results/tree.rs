use crate::*;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TreeModel {
    /// Kind of the root type, e.g. `collection`.
    pub header: String,
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub label: Cell,
    pub type_label: Cell,
    /// Set on leaves only.
    pub value: Option<Cell>,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Nodes in depth-first order, this one first.
    pub fn walk(&self) -> Box<dyn Iterator<Item = &TreeNode> + '_> {
        Box::new(std::iter::once(self).chain(self.children.iter().flat_map(TreeNode::walk)))
    }
}

/// Build the full tree for a result.
///
/// The children of a non-null record or collection root sit at the top
/// level. Any other root, including null, is a single unlabeled leaf.
/// Null at any depth becomes a `null` leaf whatever its declared type.
pub fn render_tree(ty: &TypeDescriptor, data: &DataValue) -> TreeModel {
    let nodes = match ty {
        TypeDescriptor::Primitive(_) => vec![node(empty(), empty(), ty, data)],
        _ if data.is_null() => vec![node(empty(), empty(), ty, data)],
        _ => children(ty, data),
    };
    TreeModel {
        header: ty.kind_name().to_string(),
        nodes,
    }
}

fn empty() -> Cell {
    Cell::new("", ColorTag::Default)
}

fn node(label: Cell, type_label: Cell, ty: &TypeDescriptor, data: &DataValue) -> TreeNode {
    let (value, children) = match ty {
        _ if data.is_null() => (Some(Cell::null()), vec![]),
        TypeDescriptor::Primitive(_) => (Some(Cell::value(ty, data)), vec![]),
        _ => (None, children(ty, data)),
    };
    TreeNode {
        label,
        type_label,
        value,
        children,
    }
}

fn children(ty: &TypeDescriptor, data: &DataValue) -> Vec<TreeNode> {
    match ty {
        TypeDescriptor::Primitive(_) => vec![],
        TypeDescriptor::Record(atts) => atts
            .iter()
            .map(|att| {
                node(
                    Cell::new(&att.name, ColorTag::Field),
                    Cell::new(att.ty.kind_name(), ColorTag::RecordInner),
                    &att.ty,
                    data.field(&att.name),
                )
            })
            .collect(),
        TypeDescriptor::Collection(inner) | TypeDescriptor::Array(inner) => data
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                node(
                    Cell::new(format!("[{index}]"), ColorTag::CollectionIndex),
                    Cell::new(inner.kind_name(), ColorTag::CollectionInner),
                    inner,
                    item,
                )
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn int() -> TypeDescriptor {
        TypeDescriptor::primitive(PrimitiveKind::Int)
    }

    fn nested_type() -> TypeDescriptor {
        TypeDescriptor::collection(TypeDescriptor::record([
            ("a", int()),
            ("b", TypeDescriptor::collection(int())),
        ]))
    }

    fn nested_data() -> DataValue {
        DataValue::from(vec![
            DataValue::record([("a", DataValue::Int(1)), ("b", vec![10i64, 20].into())]),
            DataValue::record([("a", DataValue::Int(2)), ("b", DataValue::Null)]),
        ])
    }

    #[test]
    fn renders_nested_collections() {
        let tree = render_tree(&nested_type(), &nested_data());
        assert_eq!(tree.header, "collection");
        assert_eq!(tree.nodes.len(), 2);

        let first = &tree.nodes[0];
        assert_eq!(first.label, Cell::new("[0]", ColorTag::CollectionIndex));
        assert_eq!(first.type_label, Cell::new("record", ColorTag::CollectionInner));
        assert_eq!(first.value, None);

        let a = &first.children[0];
        assert_eq!(a.label, Cell::new("a", ColorTag::Field));
        assert_eq!(a.type_label, Cell::new("int", ColorTag::RecordInner));
        assert_eq!(a.value, Some(Cell::new("1", ColorTag::Numeric)));

        let b = &first.children[1];
        assert_eq!(b.type_label.text, "collection");
        assert_eq!(
            b.children
                .iter()
                .map(|n| (n.label.text.as_str(), n.value.clone()))
                .collect::<Vec<_>>(),
            vec![
                ("[0]", Some(Cell::new("10", ColorTag::Numeric))),
                ("[1]", Some(Cell::new("20", ColorTag::Numeric))),
            ]
        );
    }

    #[test]
    fn null_inside_overrides_declared_collection() {
        let tree = render_tree(&nested_type(), &nested_data());
        let b = &tree.nodes[1].children[1];
        assert_eq!(b.label.text, "b");
        assert_eq!(b.value, Some(Cell::null()));
        assert!(b.is_leaf());
    }

    #[rstest]
    #[case(int())]
    #[case(nested_type())]
    #[case(TypeDescriptor::record([("a", int())]))]
    #[case(TypeDescriptor::array(TypeDescriptor::array(int())))]
    fn null_root_is_single_null_leaf(#[case] ty: TypeDescriptor) {
        let tree = render_tree(&ty, &DataValue::Null);
        assert_eq!(tree.header, ty.kind_name());
        assert_eq!(tree.nodes.len(), 1);
        assert!(tree.nodes[0].is_leaf());
        assert_eq!(tree.nodes[0].value, Some(Cell::null()));
    }

    #[test]
    fn primitive_root_is_single_leaf() {
        let tree = render_tree(&int(), &DataValue::Int(7));
        assert_eq!(tree.header, "int");
        assert_eq!(tree.nodes.len(), 1);
        assert_eq!(tree.nodes[0].value, Some(Cell::new("7", ColorTag::Numeric)));
    }

    #[test]
    fn record_root_lists_attributes() {
        let ty = TypeDescriptor::record([
            ("name", TypeDescriptor::primitive(PrimitiveKind::String)),
            ("tags", TypeDescriptor::array(TypeDescriptor::primitive(PrimitiveKind::String))),
        ]);
        let data = DataValue::record([
            ("name", DataValue::from("ada")),
            ("tags", vec!["x"].into()),
        ]);
        let tree = render_tree(&ty, &data);
        assert_eq!(tree.header, "record");
        let labels = tree.nodes.iter().map(|n| n.label.text.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, ["name", "tags"]);
        assert_eq!(tree.nodes[1].children[0].type_label.text, "string");
    }

    #[test]
    fn builds_to_full_depth() {
        let ty = TypeDescriptor::collection(TypeDescriptor::collection(TypeDescriptor::collection(int())));
        let data = DataValue::from(vec![DataValue::from(vec![DataValue::from(vec![1i64])])]);
        let tree = render_tree(&ty, &data);
        let depth = tree.nodes[0].walk().count();
        assert_eq!(depth, 3);
        assert_eq!(
            tree.nodes[0].walk().last().and_then(|n| n.value.clone()),
            Some(Cell::new("1", ColorTag::Numeric))
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        assert_eq!(
            render_tree(&nested_type(), &nested_data()),
            render_tree(&nested_type(), &nested_data())
        );
    }
}

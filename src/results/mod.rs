//! Turning a typed query result into something a view can draw.
//!
//! Both renderers are pure: the same type and data always give the same
//! model, and neither checks that the data actually matches its type.

crate::reexport!(cell);
crate::reexport!(materialize);
crate::reexport!(table);
crate::reexport!(tree);
crate::reexport!(view);

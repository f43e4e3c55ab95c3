//! Result type descriptors and data values.
//!
//! Both arrive together from the query service, are rendered once and then
//! dropped. The descriptor is trusted: attribute names are unique within a
//! record and nesting is acyclic, so nothing here re-validates the shape.

crate::reexport!(descriptor);
crate::reexport!(value);
crate::reexport!(classify);

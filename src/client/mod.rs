//! Boundary to the remote query service and the background worker that calls it.

crate::reexport!(service);
crate::reexport!(source);
crate::reexport!(worker);

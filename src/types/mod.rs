//! All data types for the simple-dag library.

use std::collections::BTreeMap;

pub mod edge;
pub mod error;
pub mod id;

pub use edge::{Edge, EdgeSpec};
pub use error::{DagError, DagResult, Role};
pub use id::{DagId, EdgeId, VertexId};

/// Opaque key-value data attached to a vertex, or the properties of an edge.
///
/// The engine stores and returns it but never looks inside.
pub type Payload<V = serde_json::Value> = BTreeMap<String, V>;

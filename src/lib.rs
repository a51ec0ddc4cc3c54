//! simple-dag: an in-memory directed acyclic graph.
//!
//! Vertices carry an opaque key-value payload; edges carry opaque
//! properties. Every edge insertion is checked so the graph can never hold a
//! cycle. On top of that the crate offers reachability queries
//! (predecessors, successors, ancestors, descendants, paths), subgraph
//! extraction and topological sorting.
//!
//! A `Dag` is single-writer: callers that share one across threads must
//! serialise access themselves.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Dag, DagOptions, Vertex};
pub use types::{
    DagError, DagId, DagResult, Edge, EdgeId, EdgeSpec, Payload, Role, VertexId,
};

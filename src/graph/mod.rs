//! In-memory DAG operations: the core data structure.

pub mod dag;
mod subgraph;
pub(crate) mod traversal;
pub mod vertex;

pub use dag::{Dag, DagOptions};
pub use vertex::Vertex;

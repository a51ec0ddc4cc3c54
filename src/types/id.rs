//! Identities for graphs, vertices and edges.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

static NEXT_DAG_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique identity of a DAG instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DagId(u64);

impl DagId {
    /// Allocate a fresh identity, never handed out before in this process.
    pub(crate) fn next() -> Self {
        Self(NEXT_DAG_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for DagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dag{}", self.0)
    }
}

/// Identity of a vertex: its owning DAG plus its creation index.
///
/// Only the owning DAG mints these, so a `VertexId` always names a vertex
/// that exists in exactly one DAG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VertexId {
    dag: DagId,
    index: usize,
}

impl VertexId {
    pub(crate) fn new(dag: DagId, index: usize) -> Self {
        Self { dag, index }
    }

    /// The DAG that owns this vertex.
    pub fn dag_id(&self) -> DagId {
        self.dag
    }

    /// Position of this vertex in its DAG's creation order.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:v{}", self.dag, self.index)
    }
}

/// Identity of an edge: its owning DAG plus its insertion index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeId {
    dag: DagId,
    index: usize,
}

impl EdgeId {
    pub(crate) fn new(dag: DagId, index: usize) -> Self {
        Self { dag, index }
    }

    /// The DAG that owns this edge.
    pub fn dag_id(&self) -> DagId {
        self.dag
    }

    /// Position of this edge in its DAG's insertion order.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:e{}", self.dag, self.index)
    }
}

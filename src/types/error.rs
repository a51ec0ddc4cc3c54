//! Error types for the simple-dag library.

use std::fmt;

use thiserror::Error;

use super::id::VertexId;

/// Which argument of an operation a vertex was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The origin (source, from, start) of an edge.
    Origin,
    /// The destination (sink, to, end) of an edge.
    Destination,
    /// The other end of a reachability query.
    Target,
    /// A root of a subgraph extraction.
    Root,
}

impl Role {
    /// Return a human-readable name for this role.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Origin => "Origin",
            Self::Destination => "Destination",
            Self::Target => "Target",
            Self::Root => "Subgraph root",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All errors that can occur while building or querying a DAG.
///
/// Every error is raised before any mutation, so a failed call leaves the
/// graph exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DagError {
    /// A vertex argument is missing or belongs to a different DAG.
    #[error("{0} must be a vertex in this DAG")]
    InvalidVertex(Role),

    /// The edge would be a self-loop or would close a cycle.
    #[error("A DAG must not have cycles: edge {origin} -> {destination} rejected")]
    CycleViolation {
        origin: VertexId,
        destination: VertexId,
    },

    /// The origin is already connected to the destination.
    #[error("Edge already exists: {origin} -> {destination}")]
    DuplicateEdge {
        origin: VertexId,
        destination: VertexId,
    },
}

/// Convenience result type for DAG operations.
pub type DagResult<T> = Result<T, DagError>;

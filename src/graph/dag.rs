//! Core graph structure: vertices + edges with adjacency indexes, and the
//! validated edge insertion that keeps the graph acyclic.

use log::{debug, trace};

use crate::types::{
    DagError, DagId, DagResult, Edge, EdgeId, EdgeSpec, Payload, Role, VertexId,
};

use super::traversal;
use super::Vertex;

/// Construction-time configuration for a [`Dag`].
#[derive(Debug, Clone, Default)]
pub struct DagOptions<M = ()> {
    /// Value attached to every vertex of the DAG, reachable through
    /// [`Vertex::mixin`]. Its type is how callers attach domain methods:
    /// implement a local trait for `Vertex<'_, V, M>`.
    pub mixin: M,
}

/// Per-vertex storage: the payload plus outgoing/incoming edge indices.
#[derive(Debug)]
pub(crate) struct VertexSlot<V> {
    pub(crate) payload: Payload<V>,
    /// Indices into `Dag::edges` of edges leaving this vertex.
    pub(crate) outgoing: Vec<usize>,
    /// Indices into `Dag::edges` of edges arriving at this vertex.
    pub(crate) incoming: Vec<usize>,
}

/// An in-memory directed acyclic graph.
///
/// The DAG exclusively owns its vertices and edges. Nothing is ever removed,
/// and every insertion is checked so the edge relation is acyclic at every
/// observable point.
///
/// `Dag` is deliberately not `Clone`: a copy would share the identity that
/// vertex ids are checked against. Use [`Dag::subgraph`] to copy a DAG.
#[derive(Debug)]
pub struct Dag<V = serde_json::Value, M = ()> {
    id: DagId,
    /// All vertices, in creation order.
    vertices: Vec<VertexSlot<V>>,
    /// All edges, in insertion order.
    edges: Vec<Edge<V>>,
    mixin: M,
}

impl Dag {
    /// Create a new empty DAG with JSON payload values and no mixin.
    pub fn new() -> Self {
        Self::with_options(DagOptions::default())
    }
}

impl<M> Dag<serde_json::Value, M> {
    /// Create a new empty DAG with JSON payload values and the given mixin.
    pub fn with_mixin(mixin: M) -> Self {
        Self::with_options(DagOptions { mixin })
    }
}

impl<V, M> Dag<V, M> {
    /// Create a new empty DAG from explicit options.
    pub fn with_options(options: DagOptions<M>) -> Self {
        Self {
            id: DagId::next(),
            vertices: Vec::new(),
            edges: Vec::new(),
            mixin: options.mixin,
        }
    }

    /// Identity of this DAG.
    pub fn id(&self) -> DagId {
        self.id
    }

    /// The mixin shared by every vertex of this DAG.
    pub fn mixin(&self) -> &M {
        &self.mixin
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Is this vertex owned by this DAG?
    pub fn contains(&self, id: VertexId) -> bool {
        id.dag_id() == self.id && id.index() < self.vertices.len()
    }

    /// Create a vertex carrying `payload`, returning its id.
    pub fn create_vertex(&mut self, payload: Payload<V>) -> VertexId {
        let id = VertexId::new(self.id, self.vertices.len());
        self.vertices.push(VertexSlot {
            payload,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        });
        trace!("Created vertex {}", id);
        id
    }

    /// Create a vertex with an empty payload.
    pub fn add_vertex(&mut self) -> VertexId {
        self.create_vertex(Payload::new())
    }

    /// Get a read-only handle to a vertex of this DAG.
    pub fn vertex(&self, id: VertexId) -> Option<Vertex<'_, V, M>> {
        if self.contains(id) {
            Some(Vertex::new(self, id))
        } else {
            None
        }
    }

    /// All vertex ids, in creation order.
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        let dag_id = self.id;
        (0..self.vertices.len()).map(move |index| VertexId::new(dag_id, index))
    }

    /// Handles to all vertices, in creation order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = Vertex<'_, V, M>> + '_ {
        self.vertex_ids().map(move |id| Vertex::new(self, id))
    }

    /// Mutable access to a vertex's payload.
    pub fn payload_mut(&mut self, id: VertexId) -> Option<&mut Payload<V>> {
        if self.contains(id) {
            Some(&mut self.vertices[id.index()].payload)
        } else {
            None
        }
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    /// Get an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge<V>> {
        if id.dag_id() == self.id {
            self.edges.get(id.index())
        } else {
            None
        }
    }

    /// Is there an edge from `origin` directly to `destination`?
    pub fn has_edge(&self, origin: VertexId, destination: VertexId) -> bool {
        self.vertex(origin)
            .is_some_and(|vertex| vertex.has_edge_to(destination))
    }

    /// Add an edge with no properties.
    pub fn add_edge(&mut self, origin: VertexId, destination: VertexId) -> DagResult<EdgeId> {
        self.add_edge_with(origin, destination, Payload::new())
    }

    /// Add an edge carrying `properties`.
    ///
    /// Fails with [`DagError::InvalidVertex`] if either endpoint is not a
    /// vertex of this DAG, with [`DagError::CycleViolation`] for a self-loop
    /// or an edge that would close a cycle, and with
    /// [`DagError::DuplicateEdge`] if the pair is already connected. A failed
    /// call leaves the DAG unchanged.
    pub fn add_edge_with(
        &mut self,
        origin: VertexId,
        destination: VertexId,
        properties: Payload<V>,
    ) -> DagResult<EdgeId> {
        if let Err(err) = self.validate_edge(origin, destination) {
            debug!("Rejected edge {} -> {}: {}", origin, destination, err);
            return Err(err);
        }

        let index = self.edges.len();
        self.edges.push(Edge::new(origin, destination, properties));
        self.vertices[origin.index()].outgoing.push(index);
        self.vertices[destination.index()].incoming.push(index);

        let id = EdgeId::new(self.id, index);
        trace!("Created edge {} ({} -> {})", id, origin, destination);
        Ok(id)
    }

    /// Add an edge described by an [`EdgeSpec`], whichever endpoint names it
    /// was built with.
    pub fn connect(&mut self, spec: EdgeSpec<V>) -> DagResult<EdgeId> {
        let EdgeSpec {
            origin,
            destination,
            properties,
        } = spec;
        let endpoints = origin
            .ok_or(DagError::InvalidVertex(Role::Origin))
            .and_then(|o| {
                destination
                    .map(|d| (o, d))
                    .ok_or(DagError::InvalidVertex(Role::Destination))
            });
        match endpoints {
            Ok((origin, destination)) => self.add_edge_with(origin, destination, properties),
            Err(err) => {
                debug!("Rejected edge request: {}", err);
                Err(err)
            }
        }
    }

    /// Vertices ordered so that every edge's origin precedes its destination.
    ///
    /// Depth-first, successors before the vertex itself, roots in creation
    /// order. O(V+E).
    pub fn topological_sort(&self) -> Vec<VertexId> {
        traversal::reverse_post_order(self)
            .into_iter()
            .map(|index| VertexId::new(self.id, index))
            .collect()
    }

    /// Index of `id` if it is a vertex of this DAG, else an error naming
    /// `role`.
    pub(crate) fn check_vertex(&self, id: VertexId, role: Role) -> DagResult<usize> {
        if self.contains(id) {
            Ok(id.index())
        } else {
            Err(DagError::InvalidVertex(role))
        }
    }

    pub(crate) fn slot(&self, index: usize) -> &VertexSlot<V> {
        &self.vertices[index]
    }

    pub(crate) fn edge_at(&self, index: usize) -> &Edge<V> {
        &self.edges[index]
    }

    fn validate_edge(&self, origin: VertexId, destination: VertexId) -> DagResult<()> {
        let from = self.check_vertex(origin, Role::Origin)?;
        let to = self.check_vertex(destination, Role::Destination)?;

        if from == to {
            return Err(DagError::CycleViolation {
                origin,
                destination,
            });
        }
        if self.has_edge(origin, destination) {
            return Err(DagError::DuplicateEdge {
                origin,
                destination,
            });
        }
        if traversal::has_path(self, to, from) {
            return Err(DagError::CycleViolation {
                origin,
                destination,
            });
        }

        Ok(())
    }
}

impl<V, M: Default> Default for Dag<V, M> {
    fn default() -> Self {
        Self::with_options(DagOptions::default())
    }
}

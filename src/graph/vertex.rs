//! Read-only vertex handle and the per-vertex traversal queries.

use std::collections::HashSet;
use std::fmt;

use crate::types::{DagResult, Edge, Payload, Role, VertexId};

use super::traversal::{self, TraversalDirection};
use super::Dag;

/// A borrowed view of one vertex in a [`Dag`].
///
/// Handles are cheap to copy. Two handles are equal when they name the same
/// vertex, regardless of payload.
pub struct Vertex<'g, V = serde_json::Value, M = ()> {
    dag: &'g Dag<V, M>,
    id: VertexId,
}

impl<'g, V, M> Vertex<'g, V, M> {
    pub(crate) fn new(dag: &'g Dag<V, M>, id: VertexId) -> Self {
        Self { dag, id }
    }

    /// This vertex's id.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The DAG that owns this vertex.
    pub fn dag(&self) -> &'g Dag<V, M> {
        self.dag
    }

    /// The mixin of the owning DAG.
    pub fn mixin(&self) -> &'g M {
        self.dag.mixin()
    }

    /// The full payload.
    pub fn payload(&self) -> &'g Payload<V> {
        &self.dag.slot(self.id.index()).payload
    }

    /// Look up one payload value; `None` when the key is absent.
    pub fn get(&self, key: &str) -> Option<&'g V> {
        self.payload().get(key)
    }

    /// Edges leaving this vertex, in insertion order.
    pub fn outgoing_edges(&self) -> impl ExactSizeIterator<Item = &'g Edge<V>> + 'g {
        let dag = self.dag;
        dag.slot(self.id.index())
            .outgoing
            .iter()
            .map(move |&e| dag.edge_at(e))
    }

    /// Edges arriving at this vertex, in insertion order.
    pub fn incoming_edges(&self) -> impl ExactSizeIterator<Item = &'g Edge<V>> + 'g {
        let dag = self.dag;
        dag.slot(self.id.index())
            .incoming
            .iter()
            .map(move |&e| dag.edge_at(e))
    }

    /// Direct predecessors, in the order their edges were inserted.
    ///
    /// Parallel edges are rejected at insertion, so each neighbour appears
    /// once.
    pub fn predecessors(&self) -> Vec<VertexId> {
        self.neighbours(TraversalDirection::Backward)
    }

    /// Direct successors, in the order their edges were inserted.
    pub fn successors(&self) -> Vec<VertexId> {
        self.neighbours(TraversalDirection::Forward)
    }

    /// No incoming edges.
    pub fn is_root(&self) -> bool {
        self.dag.slot(self.id.index()).incoming.is_empty()
    }

    /// No outgoing edges.
    pub fn is_leaf(&self) -> bool {
        self.dag.slot(self.id.index()).outgoing.is_empty()
    }

    /// Is there an edge from this vertex directly to `destination`?
    pub fn has_edge_to(&self, destination: VertexId) -> bool {
        self.outgoing_edges()
            .any(|edge| edge.destination() == destination)
    }

    /// Is there a path from here to `other` following edges?
    ///
    /// Fails with [`DagError::InvalidVertex`](crate::DagError::InvalidVertex)
    /// if `other` is not in the same DAG.
    pub fn path_to(&self, other: VertexId) -> DagResult<bool> {
        let target = self.dag.check_vertex(other, Role::Target)?;
        Ok(traversal::has_path(self.dag, self.id.index(), target))
    }

    /// Is there a path from `other` to here following edges?
    pub fn reachable_from(&self, other: VertexId) -> DagResult<bool> {
        let origin = self.dag.check_vertex(other, Role::Target)?;
        Ok(traversal::has_path(self.dag, origin, self.id.index()))
    }

    /// All transitive predecessors, not including this vertex.
    pub fn ancestors(&self) -> HashSet<VertexId> {
        let mut acc = HashSet::new();
        self.ancestors_into(&mut acc);
        acc
    }

    /// Accumulate all transitive predecessors into `acc`. Vertices already
    /// in `acc` are not expanded again.
    pub fn ancestors_into(&self, acc: &mut HashSet<VertexId>) {
        traversal::closure_into(
            self.dag,
            self.id.index(),
            TraversalDirection::Backward,
            acc,
        );
    }

    /// All transitive successors, not including this vertex.
    pub fn descendants(&self) -> HashSet<VertexId> {
        let mut acc = HashSet::new();
        self.descendants_into(&mut acc);
        acc
    }

    /// Accumulate all transitive successors into `acc`. Vertices already in
    /// `acc` are not expanded again.
    pub fn descendants_into(&self, acc: &mut HashSet<VertexId>) {
        traversal::closure_into(
            self.dag,
            self.id.index(),
            TraversalDirection::Forward,
            acc,
        );
    }

    fn neighbours(&self, direction: TraversalDirection) -> Vec<VertexId> {
        let dag_id = self.dag.id();
        traversal::neighbours(self.dag, self.id.index(), direction)
            .map(|index| VertexId::new(dag_id, index))
            .collect()
    }
}

impl<V, M> Clone for Vertex<'_, V, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, M> Copy for Vertex<'_, V, M> {}

impl<V, M> PartialEq for Vertex<'_, V, M> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<V, M> Eq for Vertex<'_, V, M> {}

impl<V, M> From<Vertex<'_, V, M>> for VertexId {
    fn from(vertex: Vertex<'_, V, M>) -> Self {
        vertex.id
    }
}

impl<V: fmt::Debug, M> fmt::Debug for Vertex<'_, V, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex({:?})", self.payload())
    }
}

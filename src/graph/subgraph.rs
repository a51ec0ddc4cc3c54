//! Subgraph extraction: ancestor closure of one root set united with the
//! descendant closure of another, copied into a fresh DAG.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::types::{DagResult, Role, VertexId};

use super::traversal::{self, TraversalDirection};
use super::{Dag, DagOptions};

impl<V: Clone, M: Clone> Dag<V, M> {
    /// Build a new, independent DAG holding every vertex in
    /// `predecessors_of` together with its ancestors, and every vertex in
    /// `successors_of` together with its descendants.
    ///
    /// Vertices keep the source's creation order and receive cloned payloads.
    /// Every source edge whose two endpoints were selected is re-created,
    /// in insertion order, with cloned properties. The mixin carries over.
    ///
    /// Fails with [`DagError::InvalidVertex`](crate::DagError::InvalidVertex)
    /// if any root is not a vertex of this DAG.
    pub fn subgraph(
        &self,
        predecessors_of: &[VertexId],
        successors_of: &[VertexId],
    ) -> DagResult<Self> {
        for &root in predecessors_of.iter().chain(successors_of) {
            self.check_vertex(root, Role::Root)?;
        }

        let mut selected: HashSet<VertexId> = predecessors_of.iter().copied().collect();
        for root in predecessors_of {
            traversal::closure_into(
                self,
                root.index(),
                TraversalDirection::Backward,
                &mut selected,
            );
        }

        let mut descendants: HashSet<VertexId> = successors_of.iter().copied().collect();
        for root in successors_of {
            traversal::closure_into(
                self,
                root.index(),
                TraversalDirection::Forward,
                &mut descendants,
            );
        }
        selected.extend(descendants);

        let mut result = Self::with_options(DagOptions {
            mixin: self.mixin().clone(),
        });
        let mut mapping: HashMap<VertexId, VertexId> = HashMap::with_capacity(selected.len());

        for vertex in self.vertices() {
            if selected.contains(&vertex.id()) {
                let copy = result.create_vertex(vertex.payload().clone());
                mapping.insert(vertex.id(), copy);
            }
        }

        for edge in self.edges() {
            if let (Some(&origin), Some(&destination)) =
                (mapping.get(&edge.origin()), mapping.get(&edge.destination()))
            {
                result.add_edge_with(origin, destination, edge.properties().clone())?;
            }
        }

        debug!(
            "Extracted subgraph of {}: {} vertices, {} edges",
            self.id(),
            result.vertex_count(),
            result.edge_count()
        );

        Ok(result)
    }
}

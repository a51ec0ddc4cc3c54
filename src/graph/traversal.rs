//! Depth-first traversal primitives shared by vertex queries and graph
//! algorithms.
//!
//! All walks use an explicit stack, so long chains cannot overflow the call
//! stack, and a visited set, so diamond-shaped reconvergence is expanded
//! only once. Every walk is O(V+E).

use std::collections::HashSet;

use crate::types::VertexId;

use super::Dag;

/// Direction for graph traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TraversalDirection {
    /// Follow outgoing edges (origin -> destination).
    Forward,
    /// Follow incoming edges (destination <- origin).
    Backward,
}

/// Indices of the direct neighbours of `index` in the given direction, in
/// edge insertion order.
pub(crate) fn neighbours<V, M>(
    dag: &Dag<V, M>,
    index: usize,
    direction: TraversalDirection,
) -> impl Iterator<Item = usize> + '_ {
    let slot = dag.slot(index);
    let edge_indices = match direction {
        TraversalDirection::Forward => &slot.outgoing,
        TraversalDirection::Backward => &slot.incoming,
    };
    edge_indices.iter().map(move |&e| {
        let edge = dag.edge_at(e);
        match direction {
            TraversalDirection::Forward => edge.destination().index(),
            TraversalDirection::Backward => edge.origin().index(),
        }
    })
}

/// Is there a path of one or more edges from `from` to `to`?
pub(crate) fn has_path<V, M>(dag: &Dag<V, M>, from: usize, to: usize) -> bool {
    let mut visited: HashSet<usize> = HashSet::new();
    let mut stack: Vec<usize> = neighbours(dag, from, TraversalDirection::Forward).collect();

    while let Some(current) = stack.pop() {
        if current == to {
            return true;
        }
        if !visited.insert(current) {
            continue;
        }
        stack.extend(
            neighbours(dag, current, TraversalDirection::Forward)
                .filter(|next| !visited.contains(next)),
        );
    }

    false
}

/// Add every vertex transitively reachable from `start` in `direction` to
/// `acc`, excluding `start` itself unless it is reached.
///
/// A vertex already present in `acc` is treated as explored and is not
/// expanded again.
pub(crate) fn closure_into<V, M>(
    dag: &Dag<V, M>,
    start: usize,
    direction: TraversalDirection,
    acc: &mut HashSet<VertexId>,
) {
    let dag_id = dag.id();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        for next in neighbours(dag, current, direction) {
            if acc.insert(VertexId::new(dag_id, next)) {
                stack.push(next);
            }
        }
    }
}

/// Vertex indices in reverse depth-first post-order.
///
/// Roots are taken in creation order and successors in edge insertion
/// order, so the result is deterministic. On an acyclic graph every edge's
/// origin precedes its destination.
pub(crate) fn reverse_post_order<V, M>(dag: &Dag<V, M>) -> Vec<usize> {
    let count = dag.vertex_count();
    let mut visited = vec![false; count];
    let mut order = Vec::with_capacity(count);
    // (vertex, position of the next outgoing edge to follow)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..count {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (vertex, position) = *frame;
            match dag.slot(vertex).outgoing.get(position) {
                Some(&edge) => {
                    frame.1 += 1;
                    let next = dag.edge_at(edge).destination().index();
                    if !visited[next] {
                        visited[next] = true;
                        stack.push((next, 0));
                    }
                }
                None => {
                    stack.pop();
                    order.push(vertex);
                }
            }
        }
    }

    order.reverse();
    order
}

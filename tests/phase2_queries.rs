//! Phase 2 tests: vertex traversal queries.

use std::collections::HashSet;

use simple_dag::{Dag, DagError, Role, VertexId};

// ==================== Helpers ====================

/// A fresh DAG with a subject vertex and three others, no edges yet.
fn fixture() -> (Dag, VertexId, VertexId, VertexId, VertexId) {
    let mut dag = Dag::new();
    let subject = dag.add_vertex();
    let v1 = dag.add_vertex();
    let v2 = dag.add_vertex();
    let v3 = dag.add_vertex();
    (dag, subject, v1, v2, v3)
}

fn set(ids: &[VertexId]) -> HashSet<VertexId> {
    ids.iter().copied().collect()
}

// ==================== Argument Validation Tests ====================

#[test]
fn test_path_to_vertex_in_other_dag() {
    let (dag, subject, ..) = fixture();
    let mut other = Dag::new();
    let stranger = other.add_vertex();

    let err = dag.vertex(subject).unwrap().path_to(stranger).unwrap_err();
    assert_eq!(err, DagError::InvalidVertex(Role::Target));
}

#[test]
fn test_reachable_from_vertex_in_other_dag() {
    let (dag, subject, ..) = fixture();
    let mut other = Dag::new();
    let stranger = other.add_vertex();

    let err = dag
        .vertex(subject)
        .unwrap()
        .reachable_from(stranger)
        .unwrap_err();
    assert_eq!(err, DagError::InvalidVertex(Role::Target));
}

// ==================== Predecessor Tests ====================

#[test]
fn test_predecessors() {
    let (mut dag, subject, v1, v2, _) = fixture();
    dag.add_edge(v1, subject).unwrap();
    dag.add_edge(v2, subject).unwrap();
    let vertex = dag.vertex(subject).unwrap();

    assert_eq!(vertex.predecessors(), vec![v1, v2]);
    assert!(vertex.successors().is_empty());
    assert!(!vertex.path_to(v1).unwrap());
    assert!(!vertex.path_to(v2).unwrap());
    assert!(!vertex.is_root());
    assert!(vertex.is_leaf());
}

#[test]
fn test_predecessors_listed_once() {
    let (mut dag, subject, v1, v2, _) = fixture();
    dag.add_edge(v1, subject).unwrap();
    dag.add_edge(v2, subject).unwrap();

    assert!(matches!(
        dag.add_edge(v1, subject),
        Err(DagError::DuplicateEdge { .. })
    ));
    assert_eq!(dag.vertex(subject).unwrap().predecessors(), vec![v1, v2]);
}

#[test]
fn test_reachable_from_predecessors() {
    let (mut dag, subject, v1, v2, v3) = fixture();
    dag.add_edge(v1, subject).unwrap();
    dag.add_edge(v2, subject).unwrap();
    let vertex = dag.vertex(subject).unwrap();

    assert!(vertex.reachable_from(v1).unwrap());
    assert!(vertex.reachable_from(v2).unwrap());
    assert!(!vertex.reachable_from(v3).unwrap());
}

// ==================== Successor Tests ====================

#[test]
fn test_successors() {
    let (mut dag, subject, v1, v2, _) = fixture();
    dag.add_edge(subject, v1).unwrap();
    dag.add_edge(subject, v2).unwrap();
    let vertex = dag.vertex(subject).unwrap();

    assert!(vertex.predecessors().is_empty());
    assert_eq!(vertex.successors(), vec![v1, v2]);
    assert!(vertex.path_to(v1).unwrap());
    assert!(vertex.path_to(v2).unwrap());
    assert!(!vertex.reachable_from(v1).unwrap());
    assert!(!vertex.reachable_from(v2).unwrap());
    assert!(vertex.is_root());
    assert!(!vertex.is_leaf());
}

#[test]
fn test_successors_listed_once() {
    let (mut dag, subject, v1, v2, _) = fixture();
    dag.add_edge(subject, v1).unwrap();
    dag.add_edge(subject, v2).unwrap();

    assert!(dag.add_edge(subject, v1).is_err());
    assert_eq!(dag.vertex(subject).unwrap().successors(), vec![v1, v2]);
}

#[test]
fn test_no_path_to_self() {
    let (mut dag, subject, v1, ..) = fixture();
    dag.add_edge(subject, v1).unwrap();
    let vertex = dag.vertex(subject).unwrap();

    assert!(!vertex.path_to(subject).unwrap());
    assert!(!vertex.reachable_from(subject).unwrap());
}

// ==================== Deep DAG Tests ====================

#[test]
fn test_deep_path() {
    let (mut dag, subject, v1, v2, v3) = fixture();
    dag.add_edge(subject, v1).unwrap();
    dag.add_edge(v1, v2).unwrap();
    let vertex = dag.vertex(subject).unwrap();

    assert!(vertex.path_to(v2).unwrap());
    assert!(!vertex.path_to(v3).unwrap());
    assert!(dag.vertex(v2).unwrap().reachable_from(subject).unwrap());
}

#[test]
fn test_deep_ancestors_and_descendants() {
    let (mut dag, subject, v1, v2, _) = fixture();
    dag.add_edge(subject, v1).unwrap();
    dag.add_edge(v1, v2).unwrap();

    assert_eq!(dag.vertex(v2).unwrap().ancestors(), set(&[v1, subject]));
    assert!(dag.vertex(subject).unwrap().ancestors().is_empty());
    assert_eq!(dag.vertex(subject).unwrap().descendants(), set(&[v1, v2]));
    assert!(dag.vertex(v2).unwrap().descendants().is_empty());
}

#[test]
fn test_diamond_closure_has_no_repeats() {
    let mut dag = Dag::new();
    let top = dag.add_vertex();
    let left = dag.add_vertex();
    let right = dag.add_vertex();
    let bottom = dag.add_vertex();
    dag.add_edge(top, left).unwrap();
    dag.add_edge(top, right).unwrap();
    dag.add_edge(left, bottom).unwrap();
    dag.add_edge(right, bottom).unwrap();

    assert_eq!(
        dag.vertex(top).unwrap().descendants(),
        set(&[left, right, bottom])
    );
    assert_eq!(
        dag.vertex(bottom).unwrap().ancestors(),
        set(&[left, right, top])
    );
    assert!(dag.vertex(top).unwrap().path_to(bottom).unwrap());
}

#[test]
fn test_closures_are_idempotent() {
    let (mut dag, subject, v1, v2, v3) = fixture();
    dag.add_edge(subject, v1).unwrap();
    dag.add_edge(v1, v2).unwrap();
    dag.add_edge(subject, v3).unwrap();
    let vertex = dag.vertex(v1).unwrap();

    assert_eq!(vertex.ancestors(), vertex.ancestors());
    assert_eq!(vertex.descendants(), vertex.descendants());
}

#[test]
fn test_closure_into_accumulator() {
    let (mut dag, subject, v1, v2, v3) = fixture();
    dag.add_edge(subject, v1).unwrap();
    dag.add_edge(v1, v2).unwrap();

    // v1 is already present, so it is not expanded again from subject
    let mut acc = set(&[v3, v1]);
    dag.vertex(subject).unwrap().descendants_into(&mut acc);
    assert_eq!(acc, set(&[v3, v1]));

    let mut acc = set(&[v3]);
    dag.vertex(subject).unwrap().descendants_into(&mut acc);
    assert_eq!(acc, set(&[v3, v1, v2]));

    let mut acc = HashSet::new();
    dag.vertex(v2).unwrap().ancestors_into(&mut acc);
    assert_eq!(acc, set(&[v1, subject]));
}

#[test]
fn test_long_chain_does_not_overflow() {
    let mut dag = Dag::new();
    let ids: Vec<VertexId> = (0..10_000).map(|_| dag.add_vertex()).collect();
    for pair in ids.windows(2) {
        dag.add_edge(pair[0], pair[1]).unwrap();
    }

    let first = dag.vertex(ids[0]).unwrap();
    let last = *ids.last().unwrap();
    assert!(first.path_to(last).unwrap());
    assert_eq!(first.descendants().len(), ids.len() - 1);
    assert_eq!(dag.topological_sort(), ids);
}

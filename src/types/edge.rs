//! The edge struct and the endpoint-naming builder used to request one.

use serde::Serialize;

use super::id::VertexId;
use super::Payload;

/// A directed connection from an origin vertex to a destination vertex.
///
/// Edges are created only by a successful insertion into a DAG and are
/// never removed. The properties are caller data and are never inspected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<V = serde_json::Value> {
    origin: VertexId,
    destination: VertexId,
    properties: Payload<V>,
}

impl<V> Edge<V> {
    pub(crate) fn new(origin: VertexId, destination: VertexId, properties: Payload<V>) -> Self {
        Self {
            origin,
            destination,
            properties,
        }
    }

    /// The vertex this edge leaves.
    pub fn origin(&self) -> VertexId {
        self.origin
    }

    /// The vertex this edge arrives at.
    pub fn destination(&self) -> VertexId {
        self.destination
    }

    /// Caller-defined properties attached at insertion.
    pub fn properties(&self) -> &Payload<V> {
        &self.properties
    }

    /// Look up a single property; `None` when the key is absent.
    pub fn property(&self, key: &str) -> Option<&V> {
        self.properties.get(key)
    }
}

/// A request to insert an edge, accepting several naming conventions for
/// the two endpoints.
///
/// `origin`, `source`, `from` and `start` all set the origin;
/// `destination`, `sink`, `to` and `end` all set the destination. The last
/// call wins.
#[derive(Debug, Clone)]
pub struct EdgeSpec<V = serde_json::Value> {
    pub(crate) origin: Option<VertexId>,
    pub(crate) destination: Option<VertexId>,
    pub(crate) properties: Payload<V>,
}

impl<V> EdgeSpec<V> {
    /// An empty request with neither endpoint set.
    pub fn new() -> Self {
        Self {
            origin: None,
            destination: None,
            properties: Payload::new(),
        }
    }

    /// Set the origin.
    pub fn origin(mut self, vertex: VertexId) -> Self {
        self.origin = Some(vertex);
        self
    }

    /// Alias for [`EdgeSpec::origin`].
    pub fn source(self, vertex: VertexId) -> Self {
        self.origin(vertex)
    }

    /// Alias for [`EdgeSpec::origin`].
    pub fn from(self, vertex: VertexId) -> Self {
        self.origin(vertex)
    }

    /// Alias for [`EdgeSpec::origin`].
    pub fn start(self, vertex: VertexId) -> Self {
        self.origin(vertex)
    }

    /// Set the destination.
    pub fn destination(mut self, vertex: VertexId) -> Self {
        self.destination = Some(vertex);
        self
    }

    /// Alias for [`EdgeSpec::destination`].
    pub fn sink(self, vertex: VertexId) -> Self {
        self.destination(vertex)
    }

    /// Alias for [`EdgeSpec::destination`].
    pub fn to(self, vertex: VertexId) -> Self {
        self.destination(vertex)
    }

    /// Alias for [`EdgeSpec::destination`].
    pub fn end(self, vertex: VertexId) -> Self {
        self.destination(vertex)
    }

    /// Replace all properties.
    pub fn properties(mut self, properties: Payload<V>) -> Self {
        self.properties = properties;
        self
    }

    /// Add a single property.
    pub fn property(mut self, key: impl Into<String>, value: V) -> Self {
        self.properties.insert(key.into(), value);
        self
    }
}

impl<V> Default for EdgeSpec<V> {
    fn default() -> Self {
        Self::new()
    }
}

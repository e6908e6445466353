//! Error types for graph construction and shortest-path queries
//!
//! Only caller mistakes are errors. Unreachable vertices and negative cycles are regular
//! query results (see [`Distance`](crate::algo::Distance)).

use thiserror::Error;

/// Errors that can occur when building or querying a graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex was referenced that is not part of the graph
    #[error("no such vertex in graph: {vertex}")]
    UnknownVertex { vertex: String },
}

impl GraphError {
    pub(crate) fn unknown_vertex(vertex: impl std::fmt::Debug) -> Self {
        GraphError::UnknownVertex {
            vertex: format!("{vertex:?}"),
        }
    }
}

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

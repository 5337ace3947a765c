//! Session-facing network context.
//!
//! Each request or session receives its own context holding an explicit
//! graph instance; there is no process-wide "current network". The context
//! adds the reader/writer discipline the core graph itself does not provide:
//! queries may interleave with each other but are mutually exclusive with
//! mutations on the same instance.

use parking_lot::RwLock;

use crate::core::Graph;

/// Shared handle around a graph for use behind a concurrent boundary.
#[derive(Debug, Default)]
pub struct NetworkContext {
    graph: RwLock<Graph>,
}

impl NetworkContext {
    pub fn new(graph: Graph) -> Self {
        Self {
            graph: RwLock::new(graph),
        }
    }

    /// Run a read-only query against the graph. Readers may run concurrently.
    pub fn read<R>(&self, query: impl FnOnce(&Graph) -> R) -> R {
        query(&self.graph.read())
    }

    /// Run a mutation against the graph, exclusive with all other access.
    pub fn write<R>(&self, mutation: impl FnOnce(&mut Graph) -> R) -> R {
        mutation(&mut self.graph.write())
    }

    /// Take the graph back out of the context.
    pub fn into_graph(self) -> Graph {
        self.graph.into_inner()
    }
}

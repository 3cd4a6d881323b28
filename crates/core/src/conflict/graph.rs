//! The precedence (conflict) graph of a schedule.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashSet;

use super::conflicts;
use crate::graph::digraph::DiGraph;
use crate::schedule::Schedule;

/// Directed graph over the transactions of a schedule with an edge
/// `t1 -> t2` whenever an operation of `t1` conflicts with a later operation
/// of `t2`.
///
/// Every transaction of the schedule is a vertex, including transactions
/// with no conflicts. Vertices are kept in the schedule's discovery order so
/// traversals are deterministic.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictGraph<Txn>
where
    Txn: Hash + Eq + Clone + Debug,
{
    vertices: Vec<Txn>,
    graph: DiGraph<Txn>,
}

impl<Txn> ConflictGraph<Txn>
where
    Txn: Hash + Eq + Clone + Debug,
{
    /// Transactions, in order of first appearance in the schedule.
    #[must_use]
    pub fn vertices(&self) -> &[Txn] {
        &self.vertices
    }

    #[must_use]
    pub fn has_edge(&self, source: &Txn, target: &Txn) -> bool {
        self.graph.has_edge(source, target)
    }

    /// Transactions that must follow `source` in any equivalent serial order.
    #[must_use]
    pub fn successors(&self, source: &Txn) -> Option<&HashSet<Txn>> {
        self.graph.successors(source)
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Edges grouped by source vertex, sources in discovery order.
    #[must_use]
    pub fn edges(&self) -> Vec<(Txn, Txn)> {
        self.vertices
            .iter()
            .flat_map(|source| {
                self.graph
                    .successors(source)
                    .into_iter()
                    .flatten()
                    .map(move |target| (source.clone(), target.clone()))
            })
            .collect()
    }

    /// Returns the back edge closing the first cycle found, searching from
    /// each vertex in discovery order.
    #[must_use]
    pub fn find_cycle_edge(&self) -> Option<(Txn, Txn)> {
        self.graph.find_cycle_edge_from(&self.vertices)
    }

    #[must_use]
    pub fn is_acyclic(&self) -> bool {
        self.find_cycle_edge().is_none()
    }
}

/// Builds the precedence graph of `schedule`.
///
/// Every pair of positions `i < j` is tested; each conflicting pair adds the
/// edge `ops[i].transaction -> ops[j].transaction`. Repeated edges collapse.
#[must_use]
pub fn build_conflict_graph<Txn, Resource>(schedule: &Schedule<Txn, Resource>) -> ConflictGraph<Txn>
where
    Txn: Hash + Eq + Clone + Debug,
    Resource: Eq,
{
    let mut graph = DiGraph::default();
    for txn in schedule.transaction_ids() {
        graph.add_vertex(txn.clone());
    }
    for pair in conflicts(schedule) {
        graph.add_edge(
            pair.earlier.operation.transaction().clone(),
            pair.later.operation.transaction().clone(),
        );
    }

    tracing::trace!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "built conflict graph"
    );

    ConflictGraph {
        vertices: schedule.transaction_ids().to_vec(),
        graph,
    }
}

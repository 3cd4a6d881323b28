use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::{HashMap, HashSet};

/// Directed graph backed by an adjacency map.
///
/// Each vertex of type `T` maps to the set of its outgoing neighbors.
/// Vertices are added implicitly when they appear in an edge, or explicitly
/// via [`add_vertex`](Self::add_vertex). Parallel edges collapse into one.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiGraph<T>
where
    T: Hash + Eq + Clone + Debug,
{
    /// Maps each vertex to the set of vertices it has edges to.
    pub adj_map: HashMap<T, HashSet<T>>,
}

/// Traversal state of a vertex during cycle detection. Vertices missing
/// from the marking map have not been reached yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the current DFS path.
    Active,
    /// Fully explored; no cycle is reachable through it.
    Done,
}

impl<T> Default for DiGraph<T>
where
    T: Hash + Eq + Clone + Debug,
{
    fn default() -> Self {
        Self {
            adj_map: HashMap::new(),
        }
    }
}

impl<T> DiGraph<T>
where
    T: Hash + Eq + Clone + Debug,
{
    /// Inserts a directed edge from `source` to `target`.
    ///
    /// Both vertices are added to the graph if not already present.
    pub fn add_edge(&mut self, source: T, target: T) {
        self.adj_map
            .entry(source)
            .or_default()
            .insert(target.clone());
        self.adj_map.entry(target).or_default();
    }

    /// Adds a vertex with no outgoing edges (if not already present).
    pub fn add_vertex(&mut self, source: T) {
        self.adj_map.entry(source).or_default();
    }

    /// Returns `true` if an edge from `source` to `target` exists.
    pub fn has_edge(&self, source: &T, target: &T) -> bool {
        self.adj_map
            .get(source)
            .is_some_and(|neighbor| neighbor.contains(target))
    }

    /// Outgoing neighbors of `source`, or `None` if it is not a vertex.
    #[must_use]
    pub fn successors(&self, source: &T) -> Option<&HashSet<T>> {
        self.adj_map.get(source)
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adj_map.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adj_map.values().map(HashSet::len).sum()
    }

    /// Detects if the graph contains a cycle.
    /// Time complexity: O(V+E)
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        self.find_cycle_edge().is_some()
    }

    /// Returns `true` if the graph has no cycles.
    #[must_use]
    pub fn is_acyclic(&self) -> bool {
        !self.has_cycle()
    }

    /// Returns the back edge `(a, b)` that closed the first cycle found, or
    /// `None` if the graph is acyclic.
    #[must_use]
    pub fn find_cycle_edge(&self) -> Option<(T, T)> {
        self.find_cycle_edge_from(self.adj_map.keys())
    }

    /// Like [`find_cycle_edge`](Self::find_cycle_edge), but starts the
    /// depth-first search from `roots` in the given order.
    ///
    /// Uses three-colour marking local to this call. Roots that are not
    /// vertices of the graph are ignored; vertices not reachable from any
    /// root are not examined.
    pub fn find_cycle_edge_from<'a, I>(&'a self, roots: I) -> Option<(T, T)>
    where
        I: IntoIterator<Item = &'a T>,
    {
        let mut marks: HashMap<&'a T, Mark> = HashMap::new();
        for root in roots {
            let Some((vertex, _)) = self.adj_map.get_key_value(root) else {
                continue;
            };
            if marks.contains_key(vertex) {
                continue;
            }
            if let Some(edge) = self.visit(vertex, &mut marks) {
                return Some(edge);
            }
        }
        None
    }

    fn visit<'a>(&'a self, vertex: &'a T, marks: &mut HashMap<&'a T, Mark>) -> Option<(T, T)> {
        marks.insert(vertex, Mark::Active);
        if let Some(neighbors) = self.adj_map.get(vertex) {
            for neighbor in neighbors {
                match marks.get(neighbor) {
                    Some(Mark::Active) => return Some((vertex.clone(), neighbor.clone())),
                    Some(Mark::Done) => {}
                    None => {
                        if let Some(edge) = self.visit(neighbor, marks) {
                            return Some(edge);
                        }
                    }
                }
            }
        }
        marks.insert(vertex, Mark::Done);
        None
    }
}

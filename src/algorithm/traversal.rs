use crate::{error::GraphError, graph::*};
use ahash::RandomState;
use std::collections::{HashSet, VecDeque};
use tracing::{debug, trace, warn};

/// How a search picks the next vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchMode {
    /// Depth-first on the call stack.
    RecursiveDfs,
    /// Depth-first on an explicit stack.
    IterativeDfs,
    /// Breadth-first on an explicit queue.
    IterativeBfs,
}

/// Discovered vertices waiting to be emitted.
///
/// - [Vec] is a stack, giving depth-first order.
/// - [VecDeque] is a queue, giving breadth-first order.
pub trait Frontier: Default {
    /// Adds the neighbors of a freshly emitted vertex, given in adjacency order.
    fn push_neighbors(&mut self, neighbors: Vec<VertexId>);

    fn take_next(&mut self) -> Option<VertexId>;
}

impl Frontier for Vec<VertexId> {
    // Reversed, so that popping yields adjacency order again.
    fn push_neighbors(&mut self, neighbors: Vec<VertexId>) {
        self.extend(neighbors.into_iter().rev());
    }

    fn take_next(&mut self) -> Option<VertexId> {
        self.pop()
    }
}

impl Frontier for VecDeque<VertexId> {
    fn push_neighbors(&mut self, neighbors: Vec<VertexId>) {
        self.extend(neighbors);
    }

    fn take_next(&mut self) -> Option<VertexId> {
        self.pop_front()
    }
}

struct SearchState {
    visited: HashSet<VertexId, RandomState>,
    order: Vec<VertexId>,
}

impl SearchState {
    fn new(capacity: usize) -> Self {
        Self {
            visited: HashSet::with_capacity_and_hasher(capacity, RandomState::new()),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Marks and emits `v`; false if it was emitted before.
    fn visit(&mut self, v: VertexId) -> bool {
        if self.visited.insert(v) {
            self.order.push(v);
            true
        } else {
            false
        }
    }

    fn is_visited(&self, v: &VertexId) -> bool {
        self.visited.contains(v)
    }

    fn unvisited_neighbors<G>(&self, graph: &G, v: &VertexId) -> Vec<VertexId>
    where
        G: QueryableGraph,
    {
        graph
            .neighbors(v)
            .filter(|u| !self.is_visited(u))
            .collect()
    }
}

/// Searches the component of `start`, then restarts from the lowest unvisited vertex
/// until every vertex is emitted.
fn exhaust<G, F>(graph: &G, start: VertexId, mut component: F) -> Vec<VertexId>
where
    G: QueryableGraph,
    F: FnMut(&G, VertexId, &mut SearchState),
{
    let mut state = SearchState::new(graph.vertex_size());
    component(graph, start, &mut state);
    for v in graph.iter_vertices() {
        if state.order.len() == graph.vertex_size() {
            break;
        }
        if !state.is_visited(&v) {
            trace!(restart = %v, "starting next component");
            component(graph, v, &mut state);
        }
    }
    state.order
}

fn recursive_component<G>(graph: &G, v: VertexId, state: &mut SearchState)
where
    G: QueryableGraph,
{
    state.visit(v);
    for u in graph.neighbors(&v) {
        if !state.is_visited(&u) {
            recursive_component(graph, u, state);
        }
    }
}

fn frontier_component<G, F>(graph: &G, start: VertexId, state: &mut SearchState)
where
    G: QueryableGraph,
    F: Frontier,
{
    let mut frontier = F::default();
    state.visit(start);
    frontier.push_neighbors(state.unvisited_neighbors(graph, &start));
    // A vertex may sit in the frontier more than once; only its first pop emits it.
    while let Some(v) = frontier.take_next() {
        if state.visit(v) {
            frontier.push_neighbors(state.unvisited_neighbors(graph, &v));
        }
    }
}

/// Depth-first and breadth-first searches covering every vertex.
///
/// Each search emits the component of `start` first.
/// Afterwards it restarts from the lowest unvisited vertex, again and again,
/// so components appear contiguously and ordered by their lowest vertex.
/// `start` must be a vertex of the graph.
pub trait GraphSearch
where
    Self: QueryableGraph + Sized,
{
    fn recursive_dfs(&self, start: VertexId) -> Vec<VertexId> {
        debug_assert!(self.contains_vertex(&start));
        exhaust(self, start, recursive_component::<Self>)
    }

    /// Emits vertices in the same order as [GraphSearch::recursive_dfs].
    fn iterative_dfs(&self, start: VertexId) -> Vec<VertexId> {
        debug_assert!(self.contains_vertex(&start));
        exhaust(self, start, frontier_component::<Self, Vec<VertexId>>)
    }

    fn iterative_bfs(&self, start: VertexId) -> Vec<VertexId> {
        debug_assert!(self.contains_vertex(&start));
        exhaust(self, start, frontier_component::<Self, VecDeque<VertexId>>)
    }

    fn search_from(&self, start: VertexId, mode: SearchMode) -> Vec<VertexId> {
        match mode {
            SearchMode::RecursiveDfs => self.recursive_dfs(start),
            SearchMode::IterativeDfs => self.iterative_dfs(start),
            SearchMode::IterativeBfs => self.iterative_bfs(start),
        }
    }
}

impl<G: QueryableGraph> GraphSearch for G {}

impl Graph {
    /// Visits every vertex, starting at the 1-based label `start`, over the adjacency list.
    ///
    /// A start outside `1..=vertex_count` is rejected before anything is touched.
    /// Otherwise the graph is converted back afterwards.
    pub fn search(
        &mut self,
        start: usize,
        mode: SearchMode,
    ) -> Result<Vec<VertexId>, GraphError> {
        let vertex_count = self.vertex_count();
        if start < 1 || vertex_count < start {
            warn!(start, vertex_count, "rejecting start vertex");
            return Err(GraphError::InvalidStartVertex {
                start,
                vertex_count,
            });
        }
        debug!(start, ?mode, "searching graph");
        let order = self.viewed_as(RepresentationKind::AdjacencyList, |g| {
            let view = AdjacencyListView::new(g.body());
            trace!(graph = ?view.debug(), "adjacency before search");
            view.search_from(VertexId::new(start), mode)
        });
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::{graph::DiGraph, visit::Dfs};
    use quickcheck_macros::quickcheck;
    use std::collections::BTreeSet;

    const MODES: [SearchMode; 3] = [
        SearchMode::RecursiveDfs,
        SearchMode::IterativeDfs,
        SearchMode::IterativeBfs,
    ];

    fn labels(order: &[VertexId]) -> Vec<usize> {
        order.iter().map(|v| v.to_raw()).collect()
    }

    fn undirected(n: usize, edges: &[(usize, usize)]) -> Graph {
        let body = edges
            .iter()
            .map(|(u, v)| vec![*u as Cell, *v as Cell])
            .collect();
        Graph::from_edge_list(body, n, false)
    }

    #[test]
    fn four_cycle() {
        let mut g = undirected(4, &[(1, 2), (2, 3), (3, 4), (4, 1)]);
        g.convert(RepresentationKind::AdjacencyMatrix);
        let dfs = g.search(1, SearchMode::RecursiveDfs).unwrap();
        assert_eq!(labels(&dfs), vec![1, 2, 3, 4]);
        let dfs = g.search(1, SearchMode::IterativeDfs).unwrap();
        assert_eq!(labels(&dfs), vec![1, 2, 3, 4]);
        let bfs = g.search(1, SearchMode::IterativeBfs).unwrap();
        assert_eq!(labels(&bfs), vec![1, 2, 4, 3]);
        assert_eq!(g.kind(), RepresentationKind::AdjacencyMatrix);
    }

    #[test]
    fn components_in_order_of_lowest_vertex() {
        let mut g = undirected(5, &[(1, 2), (3, 4)]);
        for mode in MODES {
            let trial = g.search(1, mode).unwrap();
            assert_eq!(labels(&trial), vec![1, 2, 3, 4, 5], "{:?}", mode);
            let trial = g.search(3, mode).unwrap();
            assert_eq!(labels(&trial), vec![3, 4, 1, 2, 5], "{:?}", mode);
        }
    }

    #[test]
    fn last_vertex_isolated() {
        let mut g = undirected(3, &[]);
        for mode in MODES {
            let trial = g.search(2, mode).unwrap();
            assert_eq!(labels(&trial), vec![2, 1, 3], "{:?}", mode);
        }
    }

    #[test]
    fn depth_and_breadth_differ_on_tree() {
        let mut g = undirected(4, &[(1, 2), (1, 3), (2, 4)]);
        let dfs = g.search(1, SearchMode::RecursiveDfs).unwrap();
        assert_eq!(labels(&dfs), vec![1, 2, 4, 3]);
        let dfs = g.search(1, SearchMode::IterativeDfs).unwrap();
        assert_eq!(labels(&dfs), vec![1, 2, 4, 3]);
        let bfs = g.search(1, SearchMode::IterativeBfs).unwrap();
        assert_eq!(labels(&bfs), vec![1, 2, 3, 4]);
    }

    #[test]
    fn arcs_are_followed_one_way() {
        // 2 -> 1, 3 -> 2
        let mut g = Graph::from_edge_list(vec![vec![2, 1], vec![3, 2]], 3, true);
        for mode in MODES {
            let trial = g.search(1, mode).unwrap();
            assert_eq!(labels(&trial), vec![1, 2, 3], "{:?}", mode);
            let trial = g.search(3, mode).unwrap();
            assert_eq!(labels(&trial), vec![3, 2, 1], "{:?}", mode);
        }
    }

    #[test]
    fn invalid_start_leaves_graph_untouched() {
        let mut g = undirected(3, &[(1, 2)]);
        let before = g.clone();
        for mode in MODES {
            assert_eq!(
                g.search(0, mode),
                Err(GraphError::InvalidStartVertex {
                    start: 0,
                    vertex_count: 3
                })
            );
            assert_eq!(
                g.search(4, mode),
                Err(GraphError::InvalidStartVertex {
                    start: 4,
                    vertex_count: 3
                })
            );
            assert_eq!(g, before);
        }
    }

    #[test]
    fn stack_frontier_reverses_neighbors() {
        let mut stack: Vec<VertexId> = Vec::new();
        stack.push_neighbors(vec![VertexId::new(2), VertexId::new(3)]);
        assert_eq!(stack.take_next(), Some(VertexId::new(2)));

        let mut queue: VecDeque<VertexId> = VecDeque::new();
        queue.push_neighbors(vec![VertexId::new(2), VertexId::new(3)]);
        assert_eq!(queue.take_next(), Some(VertexId::new(2)));
    }

    #[quickcheck]
    fn every_vertex_exactly_once(g: ArbitraryGraph, start: usize) {
        let mut g = g.graph;
        let n = g.vertex_count();
        let start = start % n + 1;
        for mode in MODES {
            let mut trial = labels(&g.search(start, mode).unwrap());
            assert_eq!(trial[0], start);
            trial.sort();
            assert_eq!(trial, (1..=n).collect::<Vec<_>>());
        }
    }

    #[quickcheck]
    fn recursive_and_iterative_dfs_agree(g: ArbitraryGraph, start: usize) {
        let mut g = g.graph;
        let start = start % g.vertex_count() + 1;
        let recursive = g.search(start, SearchMode::RecursiveDfs).unwrap();
        let iterative = g.search(start, SearchMode::IterativeDfs).unwrap();
        assert_eq!(recursive, iterative);
    }

    #[quickcheck]
    fn first_component_is_reachable_set(g: ArbitraryGraph, start: usize) {
        let mut g = g.graph;
        let n = g.vertex_count();
        let start = start % n + 1;

        let mut oracle_graph = DiGraph::<(), ()>::new();
        let nodes: Vec<_> = (0..n).map(|_| oracle_graph.add_node(())).collect();
        for e in g.edge_set() {
            oracle_graph.add_edge(nodes[e.source.index()], nodes[e.sink.index()], ());
        }
        let mut dfs = Dfs::new(&oracle_graph, nodes[start - 1]);
        let mut oracle = BTreeSet::new();
        while let Some(nx) = dfs.next(&oracle_graph) {
            oracle.insert(nx.index() + 1);
        }

        for mode in MODES {
            let trial = labels(&g.search(start, mode).unwrap());
            let prefix: BTreeSet<_> = trial[..oracle.len()].iter().copied().collect();
            assert_eq!(prefix, oracle, "{:?}", mode);
        }
    }
}

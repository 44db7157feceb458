//! The core of the router library.
//!
//! The engine module finds the cheapest path between two nodes of a
//! [`Graph`](crate::router::router_types::graph::Graph) under a
//! [`CostPolicy`](crate::router::router_types::policy::CostPolicy).

/// The router engine module.
pub mod engine {
    use std::fmt::{Display, Formatter, Result};

    use petgraph::graph::NodeIndex;

    use crate::router::router_types::{
        graph::Graph, node::Node, policy::CostPolicy, query_result::QueryResult,
    };
    use crate::router::router_utils::queue::RoutingQueue;

    /// Error types for the router engine.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum RouterError {
        /// The graph could not be built. Holds the reason.
        ///
        /// Expected message: "Malformed graph: {reason}"
        MalformedGraph(String),

        /// A query referenced a node that is not in the graph.
        ///
        /// Expected message: "Unknown node: {uid}"
        UnknownNode(String),

        /// The end node cannot be reached from the start node.
        ///
        /// Expected message: "No path exists from {start} to {end}"
        NoPathExists(String, String),
    }

    impl Display for RouterError {
        fn fmt(&self, f: &mut Formatter) -> Result {
            match self {
                RouterError::MalformedGraph(reason) => write!(f, "Malformed graph: {}", reason),
                RouterError::UnknownNode(uid) => write!(f, "Unknown node: {}", uid),
                RouterError::NoPathExists(start, end) => {
                    write!(f, "No path exists from {} to {}", start, end)
                }
            }
        }
    }

    impl std::error::Error for RouterError {}

    /// Find the optimal path between two nodes.
    ///
    /// The edge weight selected by `policy` is minimized; the other
    /// weight is summed along the same path. When several paths cost the
    /// same, the one whose last hop was discovered first wins: a node's
    /// predecessor is only replaced on a strict improvement, and edges
    /// are examined in declaration order.
    ///
    /// # Arguments
    /// * `graph` - The graph to search. Only read.
    /// * `start` - Label of the node to start from.
    /// * `end` - Label of the node to end at.
    /// * `policy` - Which weight to minimize.
    ///
    /// # Returns
    /// The path from `start` to `end` inclusive with its total distance
    /// and toll. A query with `start == end` returns the single-node path
    /// with zero totals.
    ///
    /// # Errors
    /// * [`RouterError::UnknownNode`] - `start` or `end` is not in the
    ///   graph. `start` is checked first.
    /// * [`RouterError::NoPathExists`] - `end` is unreachable.
    ///
    /// # Time Complexity
    /// *O*((*V* + *E*) log *V*).
    pub fn compute_optimal_path(
        graph: &Graph,
        start: &str,
        end: &str,
        policy: CostPolicy,
    ) -> std::result::Result<QueryResult, RouterError> {
        router_debug!(
            "(compute_optimal_path) from [{}] to [{}] by [{}].",
            start,
            end,
            policy
        );

        let Some(start_index) = graph.node_index(start) else {
            router_warn!("(compute_optimal_path) unknown start node [{}].", start);
            return Err(RouterError::UnknownNode(start.to_string()));
        };
        let Some(end_index) = graph.node_index(end) else {
            router_warn!("(compute_optimal_path) unknown end node [{}].", end);
            return Err(RouterError::UnknownNode(end.to_string()));
        };

        if start_index == end_index {
            router_debug!("(compute_optimal_path) start and end are the same node.");
            return Ok(QueryResult::new(vec![Node::new(start)], 0.0, 0.0));
        }

        let mut search = Search::new(graph, start_index, policy);
        search.run(end_index);

        let Some(path) = search.path_to(end_index) else {
            router_info!("(compute_optimal_path) no path from [{}] to [{}].", start, end);
            return Err(RouterError::NoPathExists(start.to_string(), end.to_string()));
        };

        let (distance, toll) = policy.label_metrics(
            search.best[end_index.index()],
            search.passive[end_index.index()],
        );
        router_debug!(
            "(compute_optimal_path) path: {:?}, distance: {}, toll: {}.",
            path,
            distance,
            toll
        );

        Ok(QueryResult::new(path, distance, toll))
    }

    /// Traversal state owned by a single query.
    struct Search<'a> {
        graph: &'a Graph,
        policy: CostPolicy,
        /// Best known total of the active weight per node.
        best: Vec<f64>,
        /// Passive weight summed along the path that produced `best`.
        passive: Vec<f64>,
        predecessor: Vec<Option<NodeIndex>>,
    }

    impl<'a> Search<'a> {
        fn new(graph: &'a Graph, start: NodeIndex, policy: CostPolicy) -> Self {
            let count = graph.node_count();
            let mut best = vec![f64::INFINITY; count];
            best[start.index()] = 0.0;

            Search {
                graph,
                policy,
                best,
                passive: vec![0.0; count],
                predecessor: vec![None; count],
            }
        }

        /// Settles nodes in order of increasing cost until `end` is
        /// settled or nothing reachable is left.
        fn run(&mut self, end: NodeIndex) {
            let mut queue = RoutingQueue::with_capacity(self.graph.node_count());
            for index in self.graph.node_indices() {
                queue.push(index, self.best[index.index()]);
            }

            while let Some(entry) = queue.pop() {
                let current = entry.item;
                let cost = entry.priority();

                if cost.is_infinite() {
                    router_debug!("(run) remaining nodes are unreachable.");
                    break;
                }

                // outdated entry, the node was already settled cheaper
                if cost > self.best[current.index()] {
                    continue;
                }

                if current == end {
                    break;
                }

                for (edge, neighbor) in self.graph.neighbors(current) {
                    let candidate = cost + self.policy.active_weight(edge);
                    if candidate < self.best[neighbor.index()] {
                        self.best[neighbor.index()] = candidate;
                        self.passive[neighbor.index()] =
                            self.passive[current.index()] + self.policy.passive_weight(edge);
                        self.predecessor[neighbor.index()] = Some(current);
                        queue.push(neighbor, candidate);
                    }
                }
            }
        }

        /// Follows predecessor links back from `end`. [`None`] if `end`
        /// was never reached.
        fn path_to(&self, end: NodeIndex) -> Option<Vec<Node>> {
            self.predecessor[end.index()]?;

            let mut path = vec![self.graph.node_at(end)?.clone()];
            let mut current = end;
            while let Some(previous) = self.predecessor[current.index()] {
                // predecessor links form a tree, so this never exceeds
                // the node count
                if path.len() > self.graph.node_count() {
                    router_error!("(path_to) predecessor links contain a cycle.");
                    return None;
                }
                path.push(self.graph.node_at(previous)?.clone());
                current = previous;
            }
            path.reverse();
            Some(path)
        }
    }
}

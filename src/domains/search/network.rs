use crate::common::{DomainError, DomainResult};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::Bfs;

/// Undirected network with nodes numbered `1..=node_count`.
#[derive(Debug, Clone)]
pub struct Network {
    graph: UnGraph<u32, ()>,
}

impl Network {
    pub fn new(node_count: usize, links: &[(usize, usize)]) -> DomainResult<Self> {
        let mut graph = UnGraph::with_capacity(node_count, links.len());
        for id in 1..=node_count {
            graph.add_node(id as u32);
        }

        for &(a, b) in links {
            if a == 0 || b == 0 || a > node_count || b > node_count {
                return Err(DomainError::invalid_input(format!(
                    "link {}-{} refers to a node outside 1..={}",
                    a, b, node_count
                )));
            }
            graph.add_edge(NodeIndex::new(a - 1), NodeIndex::new(b - 1), ());
        }

        Ok(Self { graph })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Ids of every node reachable from `origin`, in breadth-first order, `origin` first.
    pub fn reachable_from(&self, origin: usize) -> Vec<usize> {
        if origin == 0 || origin > self.graph.node_count() {
            return Vec::new();
        }

        let mut order = Vec::new();
        let mut bfs = Bfs::new(&self.graph, NodeIndex::new(origin - 1));
        while let Some(node) = bfs.next(&self.graph) {
            order.push(self.graph[node] as usize);
        }
        order
    }

    /// How many other nodes `origin` can reach.
    pub fn reach_count(&self, origin: usize) -> usize {
        self.reachable_from(origin).len().saturating_sub(1)
    }
}

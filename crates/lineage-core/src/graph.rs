// Rust guideline compliant 2026-02-06

//! Lineage graph over linked individuals.
//!
//! This module provides ancestor and descendant traversal, ancestry cycle
//! detection, and a generation ordering built on a directed
//! parent-to-child graph.

use crate::models::RecordId;
use crate::tree::GedcomTree;
use crate::{Error, Result};
use petgraph::algo::{is_cyclic_directed, tarjan_scc, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Bfs, Reversed};
use std::collections::HashMap;

/// Node weight: the individual's arena id and its reference for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LineageNode {
    id: RecordId,
    reference: String,
}

/// Directed parent-to-child graph of individuals.
///
/// Built from a linked tree. Parallel edges are collapsed, so a child
/// listed in two families of the same parent yields one edge.
pub struct LineageGraph {
    /// Petgraph directed graph where edges point from parent to child.
    graph: DiGraph<LineageNode, ()>,
    /// Map of individual ids to their NodeIndex in the graph.
    id_to_node: HashMap<RecordId, NodeIndex>,
}

impl LineageGraph {
    /// Creates a LineageGraph from a linked tree.
    ///
    /// # Arguments
    ///
    /// * `tree` - A tree whose families have been linked
    ///
    /// # Returns
    ///
    /// A new LineageGraph instance.
    pub fn from_tree(tree: &GedcomTree) -> Self {
        let mut graph = DiGraph::new();
        let mut id_to_node = HashMap::new();

        for &id in tree.individuals() {
            let reference = tree.get(id).reference().unwrap_or_default().to_string();
            let node_idx = graph.add_node(LineageNode { id, reference });
            id_to_node.insert(id, node_idx);
        }

        for &id in tree.individuals() {
            let (Some(individual), Some(&from_idx)) = (tree.individual(id), id_to_node.get(&id))
            else {
                continue;
            };
            for child in individual.children() {
                if let Some(&to_idx) = id_to_node.get(child) {
                    graph.update_edge(from_idx, to_idx, ());
                }
            }
        }

        Self { graph, id_to_node }
    }

    /// Number of individuals in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct parent-to-child edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns every ancestor of `id`, nearest generation first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `id` is not an individual of the graph.
    pub fn ancestors(&self, id: RecordId) -> Result<Vec<RecordId>> {
        let start = self.node(id)?;
        let reversed = Reversed(&self.graph);
        let mut bfs = Bfs::new(reversed, start);
        let mut found = Vec::new();

        while let Some(node) = bfs.next(reversed) {
            if node != start {
                found.push(self.graph[node].id);
            }
        }

        Ok(found)
    }

    /// Returns every descendant of `id`, nearest generation first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `id` is not an individual of the graph.
    pub fn descendants(&self, id: RecordId) -> Result<Vec<RecordId>> {
        let start = self.node(id)?;
        let mut bfs = Bfs::new(&self.graph, start);
        let mut found = Vec::new();

        while let Some(node) = bfs.next(&self.graph) {
            if node != start {
                found.push(self.graph[node].id);
            }
        }

        Ok(found)
    }

    /// Checks if someone is recorded as their own ancestor.
    pub fn has_ancestry_cycle(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Finds one ancestry cycle if it exists.
    ///
    /// # Returns
    ///
    /// The references of the individuals on the cycle, or None.
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        tarjan_scc(&self.graph)
            .into_iter()
            .find(|component| {
                component.len() > 1
                    || component
                        .first()
                        .is_some_and(|&node| self.graph.find_edge(node, node).is_some())
            })
            .map(|component| {
                component
                    .into_iter()
                    .map(|node| self.graph[node].reference.clone())
                    .collect()
            })
    }

    /// Orders individuals so every parent precedes their children.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AncestryCycle`] if the graph contains a cycle.
    pub fn generation_order(&self) -> Result<Vec<RecordId>> {
        match toposort(&self.graph, None) {
            Ok(sorted_nodes) => Ok(sorted_nodes
                .into_iter()
                .map(|node| self.graph[node].id)
                .collect()),
            Err(cycle) => Err(Error::AncestryCycle(self.find_cycle().unwrap_or_else(|| {
                vec![self.graph[cycle.node_id()].reference.clone()]
            }))),
        }
    }

    fn node(&self, id: RecordId) -> Result<NodeIndex> {
        self.id_to_node
            .get(&id)
            .copied()
            .ok_or_else(|| Error::NotFound(format!("individual #{}", id.index())))
    }
}

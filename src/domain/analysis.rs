//! Tree statistics and anchor-id collision detection

use std::collections::HashSet;

use crate::domain::identifier::{section_id, Edge};
use crate::domain::{ChildValue, Node};

/// Shape of a clue tree plus every section id it will render to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeReport {
    /// Branch nodes, root included
    pub branches: usize,
    pub leaves: usize,
    /// Levels of branch nodes (a lone root has depth 1)
    pub depth: usize,
    /// Section ids in pre-order
    pub ids: Vec<String>,
    /// Ids produced by more than one node
    pub collisions: Vec<String>,
}

impl TreeReport {
    pub fn analyze(root: &Node) -> Self {
        let mut report = Self {
            branches: 0,
            leaves: 0,
            depth: 0,
            ids: Vec::new(),
            collisions: Vec::new(),
        };
        report.visit(None, root, 1);

        let mut seen = HashSet::new();
        for id in &report.ids {
            if !seen.insert(id.as_str()) && !report.collisions.contains(id) {
                report.collisions.push(id.clone());
            }
        }
        report
    }

    fn visit(&mut self, edge: Option<Edge<'_>>, node: &Node, level: usize) {
        let id = section_id(edge, node);
        self.branches += 1;
        self.depth = self.depth.max(level);
        self.ids.push(id.clone());

        for (label, child) in &node.children {
            match child {
                ChildValue::Branch(child) => {
                    self.visit(Some(Edge::new(&id, label)), child, level + 1)
                }
                ChildValue::Leaf(_) => self.leaves += 1,
            }
        }
    }

    pub fn is_clean(&self) -> bool {
        self.collisions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_well_formed_tree_when_analyzing_then_counts_and_ids_are_preorder() {
        let root = Node::new("root")
            .with_leaf("yes", "win")
            .with_branch(
                "no",
                Node::new("child")
                    .with_leaf("y2", "lose")
                    .with_branch("n2", Node::new("deep").with_leaf("y3", "draw")),
            )
            .with_branch("maybe", Node::new("other").with_leaf("y4", "tie"));

        let report = TreeReport::analyze(&root);

        assert_eq!(report.branches, 4);
        assert_eq!(report.leaves, 4);
        assert_eq!(report.depth, 3);
        assert_eq!(
            report.ids,
            vec!["root", "root-no", "root-no-n2", "root-maybe"]
        );
        assert!(report.is_clean());
    }

    #[test]
    fn given_dashed_label_when_analyzing_then_reports_collision() {
        // "a-b" directly and "b" under "a" both spell root-a-b
        let root = Node::new("root")
            .with_branch("a-b", Node::new("x").with_leaf("1", "one"))
            .with_branch(
                "a",
                Node::new("y").with_branch("b", Node::new("z").with_leaf("2", "two")),
            );

        let report = TreeReport::analyze(&root);

        assert_eq!(report.collisions, vec!["root-a-b".to_string()]);
        assert!(!report.is_clean());
    }
}

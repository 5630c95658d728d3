//! Terminal outline of a clue tree (termtree)

use termtree::Tree;

use crate::domain::{ChildValue, Node};

pub trait ToOutline {
    fn to_outline(&self, leaf_marker: &str) -> Tree<String>;
}

impl ToOutline for Node {
    fn to_outline(&self, leaf_marker: &str) -> Tree<String> {
        fn build(node: &Node, label: String, leaf_marker: &str) -> Tree<String> {
            let leaves: Vec<_> = node
                .children
                .iter()
                .map(|(edge, child)| match child {
                    ChildValue::Branch(child) => {
                        build(child, format!("{edge}: {}", child.key), leaf_marker)
                    }
                    ChildValue::Leaf(text) => Tree::new(format!("{edge}: {text}{leaf_marker}")),
                })
                .collect();
            Tree::new(label).with_leaves(leaves)
        }

        build(self, self.key.clone(), leaf_marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_tree_when_outlining_then_lists_edges_in_order() {
        let root = Node::new("root")
            .with_leaf("yes", "win")
            .with_branch("no", Node::new("child").with_leaf("y2", "lose"));

        let text = root.to_outline("*").to_string();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "root");
        assert!(lines[1].ends_with("yes: win*"));
        assert!(lines[2].ends_with("no: child"));
        assert!(lines[3].ends_with("y2: lose*"));
    }
}

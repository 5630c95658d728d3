//! Recursive section renderer
//!
//! Every branch node becomes one `<div id=...>` section holding its edges
//! in a column-partitioned table. Sections are emitted pre-order into a
//! [`SectionSink`]: a node's own section first, then each branch child's
//! subtree in edge order.

use tracing::{debug, warn};

use crate::application::markup::Markup;
use crate::config::RenderConfig;
use crate::domain::{child_id, section_id, ChildValue, Edge, LayoutPolicy, Node, TableBuilder};

/// Content of one table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    /// Leaf text, already carrying the leaf marker
    Text(String),
    /// Link to a child section
    Link { target: String, label: String },
}

/// One rendered node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub markup: String,
}

/// Append-only destination for rendered sections.
pub trait SectionSink {
    fn emit(&mut self, section: Section);
}

impl SectionSink for Vec<Section> {
    fn emit(&mut self, section: Section) {
        self.push(section);
    }
}

#[derive(Debug, Clone)]
pub struct NodeRenderer {
    options: RenderConfig,
    tables: TableBuilder,
}

impl NodeRenderer {
    pub fn new(options: RenderConfig, layout: LayoutPolicy) -> Self {
        Self {
            options,
            tables: TableBuilder::new(layout),
        }
    }

    /// Render `root` and all of its branch descendants.
    pub fn render_tree(&self, root: &Node, sink: &mut dyn SectionSink) {
        let root_id = section_id(None, root);
        if self.options.top_anchor != root_id {
            warn!(
                "top link targets '#{}' but the root section id is '{}'",
                self.options.top_anchor, root_id
            );
        }
        self.render(None, root, sink);
    }

    /// Render the section for `node`, then recurse into its branch children.
    pub fn render(&self, edge: Option<Edge<'_>>, node: &Node, sink: &mut dyn SectionSink) {
        let id = section_id(edge, node);
        debug!("render: id={}, edges={}", id, node.children.len());

        let cells = self.cells(&id, node);
        let markup = self.section(&id, edge, node, cells);
        sink.emit(Section {
            id: id.clone(),
            markup,
        });

        for (label, child) in node.branches() {
            self.render(Some(Edge::new(&id, label)), child, sink);
        }
    }

    fn cells(&self, id: &str, node: &Node) -> Vec<CellContent> {
        node.children
            .iter()
            .map(|(label, child)| match child {
                ChildValue::Branch(child) => CellContent::Link {
                    target: child_id(id, label),
                    label: format!("{label}: {}", child.key),
                },
                ChildValue::Leaf(text) => {
                    CellContent::Text(format!("{label}: {text}{}", self.options.leaf_marker))
                }
            })
            .collect()
    }

    fn section(
        &self,
        id: &str,
        edge: Option<Edge<'_>>,
        node: &Node,
        cells: Vec<CellContent>,
    ) -> String {
        let table = self.tables.build(cells);

        let mut markup = Markup::new();
        markup.element("div", &[("id", id)], |m| {
            m.line("h2", &[], id);
            if edge.is_some() {
                m.line("h3", &[], &node.key);
            }

            m.element("table", &[], |m| {
                m.element("tbody", &[], |m| {
                    for row in &table.rows {
                        m.element("tr", &[], |m| {
                            for cell in row {
                                match cell {
                                    Some(CellContent::Text(text)) => m.line("td", &[], text),
                                    Some(CellContent::Link { target, label }) => {
                                        m.element("td", &[], |m| {
                                            m.line("a", &[("href", anchor(target).as_str())], label)
                                        })
                                    }
                                    None => m.line("td", &[], ""),
                                }
                            }
                        });
                    }
                });
            });

            m.element("div", &[], |m| {
                m.void("br", &[]);
                if let Some(edge) = edge {
                    m.line("a", &[("href", anchor(edge.parent_id).as_str())], &self.options.up_label);
                }
                m.line(
                    "a",
                    &[("href", anchor(&self.options.top_anchor).as_str())],
                    &self.options.top_label,
                );
            });
            m.void("hr", &[]);
        });
        markup.finish()
    }
}

fn anchor(id: &str) -> String {
    format!("#{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> NodeRenderer {
        NodeRenderer::new(RenderConfig::default(), LayoutPolicy::default())
    }

    #[test]
    fn given_single_leaf_root_when_rendering_then_emits_one_section_without_up_link() {
        let root = Node::new("root").with_leaf("yes", "win");
        let mut sections: Vec<Section> = Vec::new();

        renderer().render_tree(&root, &mut sections);

        assert_eq!(sections.len(), 1);
        let markup = &sections[0].markup;
        assert_eq!(sections[0].id, "root");
        assert!(markup.starts_with("<div id=\"root\">\n"));
        assert!(markup.contains("<td>yes: win🌰</td>"));
        assert!(!markup.contains("<h3>"));
        assert!(!markup.contains("↑"));
        assert!(markup.contains("<a href=\"#slate\">🌰</a>"));
    }

    #[test]
    fn given_branch_child_when_building_cells_then_links_to_child_id() {
        let root = Node::new("root")
            .with_leaf("yes", "win")
            .with_branch("no", Node::new("child").with_leaf("y2", "lose"));

        let cells = renderer().cells("root", &root);

        assert_eq!(
            cells,
            vec![
                CellContent::Text("yes: win🌰".into()),
                CellContent::Link {
                    target: "root-no".into(),
                    label: "no: child".into()
                },
            ]
        );
    }

    #[test]
    fn given_custom_options_when_rendering_then_uses_configured_labels() {
        let options = RenderConfig {
            leaf_marker: "!".into(),
            top_anchor: "root".into(),
            top_label: "top".into(),
            up_label: "up".into(),
        };
        let root = Node::new("root").with_branch("n", Node::new("kid").with_leaf("y", "done"));
        let mut sections: Vec<Section> = Vec::new();

        NodeRenderer::new(options, LayoutPolicy::default()).render_tree(&root, &mut sections);

        let child = &sections[1].markup;
        assert!(child.contains("<td>y: done!</td>"));
        assert!(child.contains("<a href=\"#root\">up</a>"));
        assert!(child.contains("<a href=\"#root\">top</a>"));
    }
}

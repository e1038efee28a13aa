//! DOT format export for Graphviz visualization.
//!
//! Nodes are labelled with their id (and weight, if requested); mutual
//! edges are drawn with arrows at both ends. A found [`Path`] can be
//! highlighted.

use crate::graph::{Graph, Weighted};
use crate::path::Path;
use crate::Result;
use std::collections::HashSet;

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Graph layout direction: LR, TB, RL, BT
    pub rankdir: String,
    /// Append weights to node and edge labels
    pub show_weights: bool,
    /// Fill color for ordinary nodes
    pub node_color: String,
    /// Color for nodes and edges on the highlighted path
    pub highlight_color: String,
    /// Draw disabled entities dashed
    pub mark_disabled: bool,
    /// Path to highlight
    pub highlight: Option<Path>,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            rankdir: "LR".to_string(),
            show_weights: true,
            node_color: "#E0E0E0".to_string(),
            highlight_color: "#E53935".to_string(),
            mark_disabled: true,
            highlight: None,
        }
    }
}

impl DotOptions {
    /// Highlight `path` in the output.
    pub fn with_highlight(mut self, path: Path) -> Self {
        self.highlight = Some(path);
        self
    }
}

/// Export graph to Graphviz DOT format
pub fn export_dot(graph: &Graph) -> Result<String> {
    export_dot_styled(graph, &DotOptions::default())
}

/// Export graph to Graphviz DOT format with custom styling
pub fn export_dot_styled(graph: &Graph, options: &DotOptions) -> Result<String> {
    let (path_nodes, path_edges): (HashSet<_>, HashSet<_>) = match &options.highlight {
        Some(path) => (
            path.node_ids().into_iter().collect(),
            path.iter().map(|step| step.id).collect(),
        ),
        None => (HashSet::new(), HashSet::new()),
    };

    let mut output = String::new();

    // Header
    output.push_str("digraph path_graph {\n");
    output.push_str(&format!("    rankdir={};\n", options.rankdir));
    output.push_str("    node [style=filled];\n\n");

    for node_id in graph.node_ids() {
        let Some(node) = graph.node(node_id) else {
            continue;
        };

        let mut label = format!("{node_id}");
        if options.show_weights {
            label.push_str(&format!("\\nw={}", node.weight()));
        }

        let color = if path_nodes.contains(&node_id) {
            options.highlight_color.as_str()
        } else {
            options.node_color.as_str()
        };
        let style = if options.mark_disabled && !node.is_enabled() {
            ", style=\"filled,dashed\""
        } else {
            ""
        };

        output.push_str(&format!(
            "    n{node_id} [label=\"{label}\", fillcolor=\"{color}\"{style}];\n"
        ));
    }

    output.push('\n');

    for edge_id in graph.edge_ids() {
        let Some(edge) = graph.edge(edge_id) else {
            continue;
        };

        let mut attrs = Vec::new();
        if options.show_weights {
            attrs.push(format!("label=\"{}\"", edge.weight()));
        }
        if edge.is_mutual() {
            attrs.push("dir=both".to_string());
        }
        if path_edges.contains(&edge_id) {
            attrs.push(format!("color=\"{}\"", options.highlight_color));
            attrs.push("penwidth=2".to_string());
        }
        if options.mark_disabled && !edge.is_enabled() {
            attrs.push("style=dashed".to_string());
        }

        let attrs = if attrs.is_empty() {
            String::new()
        } else {
            format!(" [{}]", attrs.join(", "))
        };
        output.push_str(&format!(
            "    n{} -> n{}{};\n",
            edge.head(),
            edge.tail(),
            attrs
        ));
    }

    output.push_str("}\n");

    Ok(output)
}

//! Export module for saving graphs and visualizing them in external tools.
//!
//! Supports:
//! - **JSON**: full snapshots that restore to an identical graph
//! - **DOT**: Graphviz visualization, optionally highlighting a path

pub mod dot;
pub mod json;

pub use dot::{export_dot, export_dot_styled, DotOptions};
pub use json::{
    export_json, import_json, load_json, save_json, snapshot, EdgeRecord, GraphSnapshot,
    NodeRecord,
};

//! Command implementations for graphwalk

pub mod compare;
pub mod cycle;
pub mod datasets;
pub mod dispatch;
pub mod render;
pub mod shortest_path;
pub mod spanning_tree;
pub mod steps;
pub mod traverse;

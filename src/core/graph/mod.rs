pub mod circuit_graph;
pub mod dragging;
pub mod wiring;

pub use circuit_graph::{CircuitGraph, TickReport};
pub use wiring::PortClick;

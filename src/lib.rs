pub mod core;

// Re-export commonly used types
pub use crate::core::components::{Component, ComponentKind};
pub use crate::core::connections::{Connection, ConnectionState};
pub use crate::core::errors::CircuitError;
pub use crate::core::execution::{CircuitConfig, SimulationEngine, SimulationObserver};
pub use crate::core::graph::{CircuitGraph, PortClick, TickReport};
pub use crate::core::spawn::{CaptionSource, SpawnRequest};
pub use crate::core::specs::{Spec, SpecOutput, SpecTable};
pub use crate::core::types::{ComponentId, ConnectionId, PortDirection, PortId, Position};
pub use crate::core::view::{ClickOutcome, ClickTarget, DrawHint, PointerButton};

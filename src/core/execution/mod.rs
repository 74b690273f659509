pub mod config;
pub mod simulation_engine;

// Re-export commonly used types
pub use config::{CircuitConfig, LayoutConfig, Palette};
pub use simulation_engine::{SimulationEngine, SimulationObserver};

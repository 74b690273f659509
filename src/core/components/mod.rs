pub mod component;
pub mod kind;
pub mod port;

// Re-export commonly used types
pub use component::Component;
pub use kind::ComponentKind;
pub use port::Port;

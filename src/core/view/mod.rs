//! Interface consumed by the rendering collaborator: draw hints, widget layout
//! and pointer dispatch. The core never draws anything itself.

pub mod draw;
pub mod hints;
pub mod input;
pub mod layout;

pub use draw::{ClickTarget, DrawHint, Rgb, Shape};
pub use input::{ClickOutcome, PointerButton};

use crate::core::types::{ComponentId, ConnectionId, PortId, Position, Size};
use serde::{Deserialize, Serialize};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Something the view can draw and the user can click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickTarget {
    Component(ComponentId),
    Port(PortId),
    Connection(ConnectionId),
    /// Empty canvas
    Canvas,
}

/// Geometry of a draw hint
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled rectangle centered on the hint position
    Rect { outline: Option<Rgb> },
    /// Filled circle centered on the hint position
    Circle { radius: f32 },
    /// Outline-only rectangle (labels)
    Frame { thickness: f32 },
    /// Segment from the hint position to `to`
    Line { to: Position, width: f32 },
}

/// Everything a renderer needs to draw one entity, in screen coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct DrawHint {
    pub target: ClickTarget,
    pub shape: Shape,
    pub position: Position,
    pub size: Size,
    pub color: Rgb,
    pub caption: Option<String>,
}

use serde::{Deserialize, Serialize};

/// Stable handle for a component living in a `CircuitGraph`.
///
/// Handles are handed out from a monotonically increasing counter and are never
/// reused, so ordering by handle is registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentId(pub(crate) u64);

impl ComponentId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Create a handle for one of this component's input ports
    pub fn input(&self, index: usize) -> PortId {
        PortId {
            component_id: *self,
            direction: PortDirection::Input,
            index,
        }
    }

    /// Create a handle for one of this component's output ports
    pub fn output(&self, index: usize) -> PortId {
        PortId {
            component_id: *self,
            direction: PortDirection::Output,
            index,
        }
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "component#{}", self.0)
    }
}

/// Stable handle for a connection (wire) living in a `CircuitGraph`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConnectionId(pub(crate) u64);

impl ConnectionId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "wire#{}", self.0)
    }
}

/// Which side of a component a port sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PortDirection {
    /// Receives a value from at most one bound connection
    Input,
    /// Drives any number of bound connections
    Output,
}

impl PortDirection {
    /// Check if a wire may run from a port of this direction to one of `other`
    pub fn can_connect_to(&self, other: &PortDirection) -> bool {
        matches!((self, other), (PortDirection::Output, PortDirection::Input))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PortDirection::Input => "input",
            PortDirection::Output => "output",
        }
    }
}

/// Handle for a single port: owning component, side and index within that side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PortId {
    pub(crate) component_id: ComponentId,
    pub(crate) direction: PortDirection,
    pub(crate) index: usize,
}

impl PortId {
    pub fn component_id(&self) -> ComponentId {
        self.component_id
    }

    pub fn direction(&self) -> PortDirection {
        self.direction
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_input(&self) -> bool {
        self.direction == PortDirection::Input
    }

    pub fn is_output(&self) -> bool {
        self.direction == PortDirection::Output
    }
}

impl std::fmt::Display for PortId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}[{}]", self.component_id, self.direction.as_str(), self.index)
    }
}

/// 2D canvas coordinate. Only the editing surface cares about it; evaluation never does.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::AddAssign for Position {
    fn add_assign(&mut self, rhs: Position) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Width/height pair used by the layout and draw hints
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

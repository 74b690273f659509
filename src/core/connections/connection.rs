use super::port_validator::PortValidator;
use crate::core::errors::CircuitError;
use crate::core::types::{ConnectionId, PortDirection, PortId};
use crate::core::view::Rgb;

/// Lifecycle of a wire. `Destroyed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// One endpoint known, waiting for the second click
    Seeking,
    /// Both endpoints resolved; propagates every tick
    Bound,
    Destroyed,
}

/// Directed wire from an output port to an input port
#[derive(Debug, Clone)]
pub struct Connection {
    id: ConnectionId,
    source: Option<PortId>,
    target: Option<PortId>,
    state: ConnectionState,
    color: Rgb,
}

impl Connection {
    /// Start a wire from a clicked port
    pub fn open(id: ConnectionId, port: PortId, base_color: Rgb) -> Self {
        let (source, target) = match port.direction() {
            PortDirection::Output => (Some(port), None),
            PortDirection::Input => (None, Some(port)),
        };
        Self {
            id,
            source,
            target,
            state: ConnectionState::Seeking,
            color: base_color,
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn source(&self) -> Option<PortId> {
        self.source
    }

    pub fn target(&self) -> Option<PortId> {
        self.target
    }

    /// Color after the last propagation
    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn is_bound(&self) -> bool {
        self.state == ConnectionState::Bound
    }

    /// The resolved endpoint of a seeking wire
    pub fn known_endpoint(&self) -> Option<PortId> {
        match (self.source, self.target) {
            (Some(port), None) | (None, Some(port)) => Some(port),
            _ => None,
        }
    }

    pub fn is_attached_to(&self, port: PortId) -> bool {
        self.source == Some(port) || self.target == Some(port)
    }

    /// Both endpoints, whichever are resolved
    pub fn endpoints(&self) -> impl Iterator<Item = PortId> {
        self.source.into_iter().chain(self.target)
    }

    /// Resolve the missing endpoint
    ///
    /// An illegal pairing destroys the wire and reports the conflict.
    pub fn bind(&mut self, port: PortId) -> Result<(), CircuitError> {
        let known = match (self.state, self.known_endpoint()) {
            (ConnectionState::Seeking, Some(known)) => known,
            _ => return Err(CircuitError::ConnectionNotSeeking(self.id)),
        };
        match PortValidator::validate_binding(known, port) {
            Ok((source, target)) => {
                self.source = Some(source);
                self.target = Some(target);
                self.state = ConnectionState::Bound;
                Ok(())
            }
            Err(err) => {
                self.state = ConnectionState::Destroyed;
                Err(err)
            }
        }
    }

    pub fn destroy(&mut self) {
        self.state = ConnectionState::Destroyed;
    }

    /// Record the value carried this tick and update the two-tone color
    pub fn carry(&mut self, value: bool, on_green: u8, off_green: u8) {
        self.color.g = if value { on_green } else { off_green };
    }
}

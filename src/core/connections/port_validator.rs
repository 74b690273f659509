use crate::core::components::Component;
use crate::core::errors::CircuitError;
use crate::core::types::PortId;

/// Port validation utilities for wiring
pub struct PortValidator;

impl PortValidator {
    /// Validate that a port handle resolves on the given component
    pub fn validate_port(component: &Component, port: PortId) -> Result<(), CircuitError> {
        match component.port(port) {
            Some(_) => Ok(()),
            None => Err(CircuitError::PortNotFound(port)),
        }
    }

    /// Validate that `known` and `candidate` form a well-typed wire
    ///
    /// Returns the pair ordered as (source, target). Two ports of the same
    /// direction never connect, whichever was clicked first.
    pub fn validate_binding(known: PortId, candidate: PortId) -> Result<(PortId, PortId), CircuitError> {
        if known.direction().can_connect_to(&candidate.direction()) {
            Ok((known, candidate))
        } else if candidate.direction().can_connect_to(&known.direction()) {
            Ok((candidate, known))
        } else {
            Err(CircuitError::IllegalConnectionTopology {
                first: known,
                second: candidate,
            })
        }
    }
}

use crate::core::types::{ComponentId, ConnectionId, PortId};

/// Error types for circuit graph operations
#[derive(Debug, Clone, PartialEq)]
pub enum CircuitError {
    /// A spec's evaluation returned the wrong number of outputs
    ArityMismatch {
        spec_id: String,
        component_id: Option<ComponentId>,
        expected: usize,
        actual: usize,
    },
    /// A spec was evaluated with the wrong number of inputs
    InputArityMismatch {
        spec_id: String,
        expected: usize,
        actual: usize,
    },
    /// A wire was resolved between two ports of the same direction
    IllegalConnectionTopology { first: PortId, second: PortId },
    /// A key that is not bound to any spawn request
    UnknownSpawnRequest(char),
    /// No spec is registered under this id or alias
    UnknownSpec(String),
    /// A spec id or alias is already taken
    DuplicateSpec(String),
    /// Component handle does not refer to a live component
    ComponentNotFound(ComponentId),
    /// Port handle does not refer to a port of a live component
    PortNotFound(PortId),
    /// A label spawn arrived without a caption
    MissingCaption,
    /// Another gesture already holds the graph
    GraphBlocked,
    /// Only a seeking wire can have its second endpoint resolved
    ConnectionNotSeeking(ConnectionId),
}

impl std::fmt::Display for CircuitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CircuitError::ArityMismatch {
                spec_id,
                component_id,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Arity mismatch: spec '{}' declares {} outputs but returned {}",
                    spec_id, expected, actual
                )?;
                if let Some(id) = component_id {
                    write!(f, " on {}", id)?;
                }
                Ok(())
            }
            CircuitError::InputArityMismatch {
                spec_id,
                expected,
                actual,
            } => write!(
                f,
                "Arity mismatch: spec '{}' takes {} inputs but was given {}",
                spec_id, expected, actual
            ),
            CircuitError::IllegalConnectionTopology { first, second } => write!(
                f,
                "Illegal connection: can't connect {} to {}, wires run from an output to an input",
                first, second
            ),
            CircuitError::UnknownSpawnRequest(key) => write!(f, "Unknown spawn request: '{}'", key),
            CircuitError::UnknownSpec(id) => write!(f, "Unknown spec: '{}'", id),
            CircuitError::DuplicateSpec(id) => write!(f, "Duplicate spec: '{}' is already registered", id),
            CircuitError::ComponentNotFound(id) => write!(f, "Component not found: {}", id),
            CircuitError::PortNotFound(port) => write!(f, "Port not found: {}", port),
            CircuitError::MissingCaption => write!(f, "Label spawn requires a caption"),
            CircuitError::GraphBlocked => write!(f, "Graph is blocked by another gesture"),
            CircuitError::ConnectionNotSeeking(id) => write!(f, "{} is not waiting for an endpoint", id),
        }
    }
}

impl std::error::Error for CircuitError {}

/// Lets string-error call sites use `?` on circuit operations
impl From<CircuitError> for String {
    fn from(err: CircuitError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_mismatch_message_names_component() {
        let err = CircuitError::ArityMismatch {
            spec_id: "and".to_string(),
            component_id: Some(ComponentId::new(7)),
            expected: 1,
            actual: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("'and'"));
        assert!(msg.contains("declares 1 outputs but returned 2"));
        assert!(msg.contains("component#7"));
    }

    #[test]
    fn test_converts_into_string_error() {
        fn caption() -> Result<String, CircuitError> {
            Err(CircuitError::MissingCaption)
        }
        fn fallible() -> Result<String, String> {
            Ok(caption()?)
        }
        assert_eq!(fallible().unwrap_err(), "Label spawn requires a caption");
    }
}

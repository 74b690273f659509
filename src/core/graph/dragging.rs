//! The move gesture, the delete gesture that rides on it, and canvas panning.

use super::circuit_graph::CircuitGraph;
use crate::core::errors::CircuitError;
use crate::core::types::{ComponentId, ConnectionId, Position};
use log::debug;

impl CircuitGraph {
    /// Start moving a component; only an unblocked graph can start a drag
    pub fn begin_drag(&mut self, id: ComponentId) -> Result<(), CircuitError> {
        if self.blocked {
            return Err(CircuitError::GraphBlocked);
        }
        let component = self
            .components
            .get_mut(&id)
            .ok_or(CircuitError::ComponentNotFound(id))?;
        component.set_moving(true);
        self.dragging = Some(id);
        self.blocked = true;
        debug!("Dragging {}", id);
        Ok(())
    }

    /// Move the dragged component by a pointer delta. Returns whether anything moved.
    pub fn drag_by(&mut self, delta: Position) -> bool {
        let component = match self.dragging.and_then(|id| self.components.get_mut(&id)) {
            Some(component) => component,
            None => return false,
        };
        let position = component.position() + delta;
        component.set_position(position);
        true
    }

    /// Release the dragged component
    pub fn end_drag(&mut self) -> Option<ComponentId> {
        let id = self.dragging.take()?;
        if let Some(component) = self.components.get_mut(&id) {
            component.set_moving(false);
        }
        self.blocked = false;
        debug!("Released {}", id);
        Some(id)
    }

    /// Delete gesture: destroy the component being dragged
    pub fn delete_dragged(&mut self) -> Option<ComponentId> {
        let id = self.dragging?;
        match self.destroy_component(id) {
            Ok(()) => Some(id),
            Err(_) => {
                self.dragging = None;
                self.blocked = false;
                None
            }
        }
    }

    /// Whether a connection is attached to the component being dragged
    pub fn is_highlighted(&self, connection: ConnectionId) -> bool {
        match (self.dragging, self.connections.get(connection)) {
            (Some(dragged), Some(connection)) => connection
                .endpoints()
                .any(|port| port.component_id() == dragged),
            _ => false,
        }
    }

    /// Move the whole canvas; refused while a gesture holds the graph
    pub fn pan(&mut self, delta: Position) -> bool {
        if self.blocked {
            return false;
        }
        self.pan += delta;
        true
    }
}

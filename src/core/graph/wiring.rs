//! The wire gesture: open on a first port click, resolve on a second, abort on demand.

use super::circuit_graph::CircuitGraph;
use crate::core::connections::PortValidator;
use crate::core::errors::CircuitError;
use crate::core::types::{ConnectionId, PortId};
use log::{debug, info, warn};

/// What a port click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortClick {
    /// A new seeking wire starts at the port
    Opened(ConnectionId),
    /// The pending wire was bound to the port
    Bound(ConnectionId),
    /// Nothing to do: the graph is held by a drag, or the port already carries the pending wire
    Ignored,
}

impl CircuitGraph {
    /// Handle a click on a port
    ///
    /// An illegal pairing is recovered before the error is returned: the pending
    /// wire is gone and the graph is unblocked.
    pub fn click_port(&mut self, port: PortId) -> Result<PortClick, CircuitError> {
        let component = self
            .components
            .get(&port.component_id())
            .ok_or(CircuitError::ComponentNotFound(port.component_id()))?;
        PortValidator::validate_port(component, port)?;

        if !self.blocked {
            return Ok(PortClick::Opened(self.open_connection(port)));
        }
        match self.pending_connection {
            Some(pending) => {
                let already_attached = self
                    .connections
                    .get(pending)
                    .is_some_and(|c| c.is_attached_to(port));
                if already_attached {
                    return Ok(PortClick::Ignored);
                }
                self.resolve_connection(pending, port).map(PortClick::Bound)
            }
            None => Ok(PortClick::Ignored),
        }
    }

    fn open_connection(&mut self, port: PortId) -> ConnectionId {
        if let Some(previous) = self.port(port).and_then(|p| p.link()) {
            debug!("Replacing {} on {}", previous, port);
            self.destroy_connection(previous);
        }
        let id = self.connections.open(port, self.config.palette.wire_base);
        if let Some(p) = self.port_mut(port) {
            p.attach(id);
        }
        self.pending_connection = Some(id);
        self.blocked = true;
        debug!("Opened {} at {}", id, port);
        id
    }

    fn resolve_connection(&mut self, pending: ConnectionId, port: PortId) -> Result<ConnectionId, CircuitError> {
        let bound = match self.connections.get_mut(pending) {
            Some(connection) => connection.bind(port),
            None => Err(CircuitError::ConnectionNotSeeking(pending)),
        };
        if let Err(err) = bound {
            warn!("{}", err);
            self.destroy_connection(pending);
            return Err(err);
        }

        if let Some(previous) = self.port(port).and_then(|p| p.link()) {
            debug!("Replacing {} on {}", previous, port);
            self.destroy_connection(previous);
        }
        if let Some(p) = self.port_mut(port) {
            p.attach(pending);
        }
        self.pending_connection = None;
        self.blocked = false;
        if let Some(connection) = self.connections.get(pending) {
            if let (Some(source), Some(target)) = (connection.source(), connection.target()) {
                info!("Bound {} from {} to {}", pending, source, target);
            }
        }
        Ok(pending)
    }

    /// Abandon the pending wire. Returns whether there was one.
    pub fn abort_pending(&mut self) -> bool {
        match self.pending_connection {
            Some(pending) => {
                debug!("Aborted {}", pending);
                self.destroy_connection(pending);
                true
            }
            None => false,
        }
    }
}

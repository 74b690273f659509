use super::connection::{Connection, ConnectionState};
use crate::core::types::{ConnectionId, PortId};
use crate::core::view::Rgb;
use std::collections::BTreeMap;

/// Arena of live connections
///
/// Connections are keyed by handles from a monotonically increasing counter,
/// so iteration is registration order.
pub struct ConnectionManager {
    connections: BTreeMap<ConnectionId, Connection>,
    next_id: u64,
}

impl ConnectionManager {
    /// Create a new connection manager
    pub fn new() -> Self {
        Self {
            connections: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Open a seeking connection on `port` and register it
    pub fn open(&mut self, port: PortId, base_color: Rgb) -> ConnectionId {
        let id = ConnectionId::new(self.next_id);
        self.next_id += 1;
        self.connections.insert(id, Connection::open(id, port, base_color));
        id
    }

    pub fn get(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(&id)
    }

    pub fn get_mut(&mut self, id: ConnectionId) -> Option<&mut Connection> {
        self.connections.get_mut(&id)
    }

    /// Take a connection out of the arena, marking it destroyed
    pub fn remove(&mut self, id: ConnectionId) -> Option<Connection> {
        let mut connection = self.connections.remove(&id)?;
        connection.destroy();
        Some(connection)
    }

    pub fn contains(&self, id: ConnectionId) -> bool {
        self.connections.contains_key(&id)
    }

    /// All live connections in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Connection> {
        self.connections.values_mut()
    }

    /// Handles of every live connection touching `port`
    pub fn attached_to(&self, port: PortId) -> Vec<ConnectionId> {
        self.connections
            .values()
            .filter(|c| c.is_attached_to(port))
            .map(Connection::id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Get connection statistics
    pub fn stats(&self) -> ConnectionStats {
        let mut stats = ConnectionStats::default();
        for connection in self.connections.values() {
            match connection.state() {
                ConnectionState::Seeking => stats.seeking += 1,
                ConnectionState::Bound => stats.bound += 1,
                ConnectionState::Destroyed => {}
            }
        }
        stats
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Connection statistics for debugging
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConnectionStats {
    pub seeking: usize,
    pub bound: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ComponentId;

    #[test]
    fn test_handles_are_not_reused() {
        let mut manager = ConnectionManager::new();
        let port = ComponentId::new(0).output(0);
        let first = manager.open(port, Rgb::new(0, 0, 150));
        manager.remove(first).unwrap();
        let second = manager.open(port, Rgb::new(0, 0, 150));
        assert_ne!(first, second);
        assert!(!manager.contains(first));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_removed_connection_is_destroyed() {
        let mut manager = ConnectionManager::new();
        let id = manager.open(ComponentId::new(0).input(0), Rgb::new(0, 0, 150));
        let removed = manager.remove(id).unwrap();
        assert_eq!(removed.state(), ConnectionState::Destroyed);
        assert!(manager.remove(id).is_none());
    }

    #[test]
    fn test_stats_and_attachment_lookup() {
        let mut manager = ConnectionManager::new();
        let out = ComponentId::new(0).output(0);
        let a = manager.open(out, Rgb::new(0, 0, 150));
        let b = manager.open(out, Rgb::new(0, 0, 150));
        manager.get_mut(a).unwrap().bind(ComponentId::new(1).input(0)).unwrap();
        assert_eq!(manager.stats(), ConnectionStats { seeking: 1, bound: 1 });
        assert_eq!(manager.attached_to(out), vec![a, b]);
        assert_eq!(manager.attached_to(ComponentId::new(1).input(0)), vec![a]);
    }
}

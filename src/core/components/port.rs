use crate::core::types::{ConnectionId, PortDirection, PortId};

/// A typed signal terminal owned by a component
///
/// Input ports hold at most one connection, output ports fan out to any number.
#[derive(Debug, Clone)]
pub struct Port {
    id: PortId,
    value: bool,
    links: Vec<ConnectionId>,
}

impl Port {
    pub fn new(id: PortId) -> Self {
        Self {
            id,
            value: false,
            links: Vec::new(),
        }
    }

    pub fn id(&self) -> PortId {
        self.id
    }

    pub fn direction(&self) -> PortDirection {
        self.id.direction
    }

    pub fn index(&self) -> usize {
        self.id.index
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn set_value(&mut self, value: bool) {
        self.value = value;
    }

    /// Every connection registered on this port, in attach order
    pub fn connections(&self) -> &[ConnectionId] {
        &self.links
    }

    /// The single connection of an input port
    pub fn link(&self) -> Option<ConnectionId> {
        match self.direction() {
            PortDirection::Input => self.links.first().copied(),
            PortDirection::Output => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        !self.links.is_empty()
    }

    pub fn is_linked_to(&self, connection: ConnectionId) -> bool {
        self.links.contains(&connection)
    }

    /// Register a connection on this port
    ///
    /// On an input port this replaces whatever was registered; the caller is
    /// responsible for destroying the previous connection first.
    pub(crate) fn attach(&mut self, connection: ConnectionId) {
        match self.direction() {
            PortDirection::Input => {
                self.links.clear();
                self.links.push(connection);
            }
            PortDirection::Output => {
                if !self.links.contains(&connection) {
                    self.links.push(connection);
                }
            }
        }
    }

    /// Remove a connection from this port, leaving fan-out siblings alone
    pub(crate) fn detach(&mut self, connection: ConnectionId) -> bool {
        let before = self.links.len();
        self.links.retain(|c| *c != connection);
        before != self.links.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ComponentId;

    #[test]
    fn test_input_holds_single_link() {
        let mut port = Port::new(ComponentId::new(0).input(0));
        port.attach(ConnectionId::new(1));
        port.attach(ConnectionId::new(2));
        assert_eq!(port.connections(), &[ConnectionId::new(2)]);
        assert_eq!(port.link(), Some(ConnectionId::new(2)));
    }

    #[test]
    fn test_output_fans_out_and_detaches_one() {
        let mut port = Port::new(ComponentId::new(0).output(0));
        port.attach(ConnectionId::new(1));
        port.attach(ConnectionId::new(2));
        port.attach(ConnectionId::new(2));
        assert_eq!(port.connections().len(), 2);
        assert_eq!(port.link(), None);

        assert!(port.detach(ConnectionId::new(1)));
        assert!(!port.detach(ConnectionId::new(1)));
        assert_eq!(port.connections(), &[ConnectionId::new(2)]);
    }
}

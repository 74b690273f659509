use crate::core::components::{Component, ComponentKind, Port};
use crate::core::connections::{Connection, ConnectionManager};
use crate::core::errors::CircuitError;
use crate::core::execution::config::CircuitConfig;
use crate::core::spawn::{lookup_key, CaptionSource, SpawnKind, SpawnRequest};
use crate::core::specs::{builtin, Spec, SpecTable};
use crate::core::types::{ComponentId, ConnectionId, PortId, Position};
use log::{debug, error, info, warn};
use std::collections::{BTreeMap, VecDeque};

/// A spawn waiting for the next tick
#[derive(Debug, Clone)]
struct QueuedSpawn {
    spec: Spec,
    kind: ComponentKind,
}

/// Summary of one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// 1-based tick number
    pub tick: u64,
    /// Components inserted from the spawn queue this tick
    pub spawned: Vec<ComponentId>,
    pub components_evaluated: usize,
    pub connections_propagated: usize,
    /// Components whose evaluation failed; their outputs were left unchanged
    pub faults: Vec<CircuitError>,
}

impl TickReport {
    pub fn is_clean(&self) -> bool {
        self.faults.is_empty()
    }
}

/// Aggregate root of a circuit: components, connections and the gesture token
///
/// `blocked` is the only mutual exclusion in the system. It is held by either
/// the pending connection or the component being dragged, never both.
pub struct CircuitGraph {
    pub(crate) specs: SpecTable,
    pub(crate) config: CircuitConfig,
    pub(crate) components: BTreeMap<ComponentId, Component>,
    pub(crate) connections: ConnectionManager,
    spawn_queue: VecDeque<QueuedSpawn>,
    next_component_id: u64,
    pub(crate) blocked: bool,
    pub(crate) pending_connection: Option<ConnectionId>,
    pub(crate) dragging: Option<ComponentId>,
    /// Last known pointer position, screen coordinates
    pub(crate) pointer: Position,
    /// Offset of the whole canvas on screen
    pub(crate) pan: Position,
    tick_count: u64,
}

impl CircuitGraph {
    /// Create an empty graph with the built-in specs and default configuration
    pub fn new() -> Self {
        Self::with_config(CircuitConfig::default())
    }

    pub fn with_config(config: CircuitConfig) -> Self {
        Self::with_specs(SpecTable::with_builtins(), config)
    }

    pub fn with_specs(specs: SpecTable, config: CircuitConfig) -> Self {
        Self {
            specs,
            config,
            components: BTreeMap::new(),
            connections: ConnectionManager::new(),
            spawn_queue: VecDeque::new(),
            next_component_id: 0,
            blocked: false,
            pending_connection: None,
            dragging: None,
            pointer: Position::default(),
            pan: Position::default(),
            tick_count: 0,
        }
    }

    pub fn specs(&self) -> &SpecTable {
        &self.specs
    }

    /// Register a custom spec for later spawns
    pub fn register_spec(&mut self, spec: Spec) -> Result<(), CircuitError> {
        self.specs.register(spec)
    }

    pub fn config(&self) -> &CircuitConfig {
        &self.config
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    pub fn pending_connection(&self) -> Option<ConnectionId> {
        self.pending_connection
    }

    /// Component currently being dragged
    pub fn dragging(&self) -> Option<ComponentId> {
        self.dragging
    }

    pub fn pointer(&self) -> Position {
        self.pointer
    }

    pub fn pan_offset(&self) -> Position {
        self.pan
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Live components in registration order
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(&id)
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Live connections (seeking and bound) in registration order
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter()
    }

    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(id)
    }

    pub fn connection_manager(&self) -> &ConnectionManager {
        &self.connections
    }

    pub fn port(&self, id: PortId) -> Option<&Port> {
        self.components.get(&id.component_id())?.port(id)
    }

    pub(crate) fn port_mut(&mut self, id: PortId) -> Option<&mut Port> {
        self.components.get_mut(&id.component_id())?.port_mut(id)
    }

    /// Current value of any port
    pub fn port_value(&self, id: PortId) -> Result<bool, CircuitError> {
        self.port(id).map(Port::value).ok_or(CircuitError::PortNotFound(id))
    }

    pub fn queued_spawns(&self) -> usize {
        self.spawn_queue.len()
    }

    /// Track the pointer; spawns land where it is at the next tick
    pub fn pointer_moved(&mut self, position: Position) {
        self.pointer = position;
    }

    /// Queue a component for insertion at the next tick
    pub fn spawn(&mut self, request: SpawnRequest) -> Result<(), CircuitError> {
        let queued = match request {
            SpawnRequest::Gate(id) => match self.specs.lookup(&id) {
                Ok(spec) => QueuedSpawn {
                    spec: spec.clone(),
                    kind: ComponentKind::Gate,
                },
                Err(err) => {
                    warn!("Rejected spawn: {}", err);
                    return Err(err);
                }
            },
            SpawnRequest::Button => QueuedSpawn {
                spec: builtin::button(),
                kind: ComponentKind::Button { on: false },
            },
            SpawnRequest::Led => QueuedSpawn {
                spec: builtin::led(),
                kind: ComponentKind::Led { lit: false },
            },
            SpawnRequest::Switch => QueuedSpawn {
                spec: builtin::switch(),
                kind: ComponentKind::Switch,
            },
            SpawnRequest::Label(caption) => QueuedSpawn {
                spec: builtin::label(&caption),
                kind: ComponentKind::Label { caption },
            },
        };
        debug!("Queued spawn of '{}'", queued.spec.id);
        self.spawn_queue.push_back(queued);
        Ok(())
    }

    /// Translate a key press through the key table
    ///
    /// Returns `Ok(false)` for keys with no binding; they are ignored.
    pub fn handle_key(&mut self, key: char, captions: &mut dyn CaptionSource) -> Result<bool, CircuitError> {
        if key == self.config.delete_key {
            return Ok(self.delete_dragged().is_some());
        }
        let kind = match lookup_key(&self.config.key_bindings, key) {
            Some(kind) => kind.clone(),
            None => {
                debug!("{}", CircuitError::UnknownSpawnRequest(key));
                return Ok(false);
            }
        };
        let request = match kind {
            SpawnKind::Gate(id) => SpawnRequest::Gate(id),
            SpawnKind::Button => SpawnRequest::Button,
            SpawnKind::Led => SpawnRequest::Led,
            SpawnKind::Switch => SpawnRequest::Switch,
            SpawnKind::Label => match captions.request_caption() {
                Some(caption) => SpawnRequest::Label(caption),
                None => {
                    warn!("Rejected spawn: {}", CircuitError::MissingCaption);
                    return Err(CircuitError::MissingCaption);
                }
            },
        };
        self.spawn(request)?;
        Ok(true)
    }

    fn insert_queued(&mut self) -> Vec<ComponentId> {
        let position = self.pointer - self.pan;
        let mut spawned = Vec::with_capacity(self.spawn_queue.len());
        while let Some(queued) = self.spawn_queue.pop_front() {
            let id = ComponentId::new(self.next_component_id);
            self.next_component_id += 1;
            debug!("Spawned {} '{}' at ({}, {})", id, queued.spec.id, position.x, position.y);
            self.components
                .insert(id, Component::new(id, queued.spec, queued.kind, position));
            spawned.push(id);
        }
        spawned
    }

    /// Advance the circuit by one discrete step
    ///
    /// Queued spawns are inserted first. Then every component recomputes its
    /// outputs from its current inputs, and only after that every bound
    /// connection copies its source value to its target. A value therefore
    /// crosses exactly one wire per tick.
    pub fn tick(&mut self) -> TickReport {
        self.tick_count += 1;
        let mut report = TickReport {
            tick: self.tick_count,
            spawned: self.insert_queued(),
            ..TickReport::default()
        };

        for component in self.components.values_mut() {
            report.components_evaluated += 1;
            if let Err(err) = component.on_tick() {
                error!("Skipping evaluation of {}: {}", component.id(), err);
                report.faults.push(err);
            }
        }

        let palette = &self.config.palette;
        let components = &mut self.components;
        for connection in self.connections.iter_mut() {
            let (source, target) = match (connection.is_bound(), connection.source(), connection.target()) {
                (true, Some(source), Some(target)) => (source, target),
                _ => continue,
            };
            let value = match components
                .get(&source.component_id())
                .and_then(|c| c.port(source))
            {
                Some(port) => port.value(),
                None => continue,
            };
            if let Some(port) = components
                .get_mut(&target.component_id())
                .and_then(|c| c.port_mut(target))
            {
                port.set_value(value);
                connection.carry(value, palette.wire_true_green, palette.wire_false_green);
                report.connections_propagated += 1;
            }
        }

        debug!(
            "Tick {}: {} components, {} connections, {} faults",
            report.tick,
            report.components_evaluated,
            report.connections_propagated,
            report.faults.len()
        );
        report
    }

    /// Destroy a component and every connection touching its ports
    pub fn destroy_component(&mut self, id: ComponentId) -> Result<(), CircuitError> {
        let ports: Vec<PortId> = match self.components.get(&id) {
            Some(component) => component.ports().map(Port::id).collect(),
            None => return Err(CircuitError::ComponentNotFound(id)),
        };
        for port in ports {
            for connection in self.connections.attached_to(port) {
                self.destroy_connection(connection);
            }
        }
        self.components.remove(&id);
        if self.dragging == Some(id) {
            self.dragging = None;
            self.blocked = self.pending_connection.is_some();
        }
        info!("Destroyed {}", id);
        Ok(())
    }

    /// Unlink a connection from both endpoints and drop it
    ///
    /// Destroying the pending connection also releases the gesture token.
    pub fn destroy_connection(&mut self, id: ConnectionId) -> bool {
        let connection = match self.connections.remove(id) {
            Some(connection) => connection,
            None => return false,
        };
        for port in connection.endpoints() {
            if let Some(port) = self.port_mut(port) {
                port.detach(id);
            }
        }
        if self.pending_connection == Some(id) {
            self.pending_connection = None;
            self.blocked = self.dragging.is_some();
        }
        debug!("Destroyed {}", id);
        true
    }

    /// Check the coordination invariants; used by tests and debug assertions
    pub fn validate_consistency(&self) -> Result<(), String> {
        if self.blocked != (self.pending_connection.is_some() || self.dragging.is_some()) {
            return Err(format!(
                "blocked is {} with pending {:?} and dragging {:?}",
                self.blocked, self.pending_connection, self.dragging
            ));
        }
        if self.pending_connection.is_some() && self.dragging.is_some() {
            return Err("a wire and a drag are both in progress".to_string());
        }
        let seeking = self.connections.stats().seeking;
        if seeking != usize::from(self.pending_connection.is_some()) {
            return Err(format!("{} seeking connections, expected at most the pending one", seeking));
        }
        for connection in self.connections.iter() {
            for endpoint in connection.endpoints() {
                let port = self
                    .port(endpoint)
                    .ok_or_else(|| format!("{} points at missing {}", connection.id(), endpoint))?;
                if !port.is_linked_to(connection.id()) {
                    return Err(format!("{} is not registered on {}", connection.id(), endpoint));
                }
            }
        }
        for component in self.components.values() {
            for port in component.ports() {
                if port.id().is_input() && port.connections().len() > 1 {
                    return Err(format!("{} holds {} connections", port.id(), port.connections().len()));
                }
                for link in port.connections() {
                    if !self.connections.get(*link).is_some_and(|c| c.is_attached_to(port.id())) {
                        return Err(format!("{} lists stale {}", port.id(), link));
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for CircuitGraph {
    fn default() -> Self {
        Self::new()
    }
}

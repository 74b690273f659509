//! Pointer notifications from the view collaborator.

use super::draw::ClickTarget;
use super::layout;
use crate::core::components::ComponentKind;
use crate::core::errors::CircuitError;
use crate::core::graph::{CircuitGraph, PortClick};
use crate::core::types::{ComponentId, Position};

/// Which pointer button fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Opens and resolves wires, starts drags
    Primary,
    /// Aborts a pending wire, otherwise toggles buttons
    Secondary,
}

/// What a click did to the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Port(PortClick),
    DragStarted(ComponentId),
    Toggled { component: ComponentId, on: bool },
    Aborted,
    Ignored,
}

impl CircuitGraph {
    /// Dispatch a pointer press on a target
    pub fn click(&mut self, target: ClickTarget, button: PointerButton) -> Result<ClickOutcome, CircuitError> {
        match button {
            PointerButton::Secondary => {
                if self.abort_pending() {
                    return Ok(ClickOutcome::Aborted);
                }
                if let ClickTarget::Component(id) = target {
                    return self.toggle_button(id);
                }
                Ok(ClickOutcome::Ignored)
            }
            PointerButton::Primary => match target {
                ClickTarget::Port(port) => self.click_port(port).map(ClickOutcome::Port),
                ClickTarget::Component(id) if !self.blocked => {
                    self.begin_drag(id)?;
                    Ok(ClickOutcome::DragStarted(id))
                }
                _ => Ok(ClickOutcome::Ignored),
            },
        }
    }

    /// Dispatch a pointer release; a primary release ends any drag
    pub fn release(&mut self, button: PointerButton) -> Option<ComponentId> {
        match button {
            PointerButton::Primary => self.end_drag(),
            PointerButton::Secondary => None,
        }
    }

    /// Flip a button component. Other kinds ignore the click.
    pub fn toggle_button(&mut self, id: ComponentId) -> Result<ClickOutcome, CircuitError> {
        let component = self
            .components
            .get_mut(&id)
            .ok_or(CircuitError::ComponentNotFound(id))?;
        Ok(match component.toggle() {
            Some(on) => ClickOutcome::Toggled { component: id, on },
            None => ClickOutcome::Ignored,
        })
    }

    /// Resolve a screen point to the topmost target
    ///
    /// Ports win over bodies, bodies over wires; the latest spawned body wins ties.
    pub fn hit_test(&self, point: Position) -> ClickTarget {
        let point = point - self.pan;
        let layout = &self.config.layout;

        for component in self.components.values().rev() {
            for port in component.ports() {
                let center = layout::port_position(layout, component, port.id());
                if distance(center, point) <= layout.port_radius {
                    return ClickTarget::Port(port.id());
                }
            }
        }

        for component in self.components.values().rev() {
            let size = layout::body_size(layout, component);
            let center = component.position();
            let inside = match component.kind() {
                ComponentKind::Led { .. } => distance(center, point) <= layout.led_radius,
                _ => {
                    (point.x - center.x).abs() <= size.width / 2.0
                        && (point.y - center.y).abs() <= size.height / 2.0
                }
            };
            if inside {
                return ClickTarget::Component(component.id());
            }
        }

        for connection in self.connections.iter() {
            let ends: Vec<Position> = connection
                .endpoints()
                .filter_map(|port| {
                    let component = self.components.get(&port.component_id())?;
                    Some(layout::port_position(layout, component, port))
                })
                .collect();
            if let [from, to] = ends.as_slice() {
                if distance_to_segment(point, *from, *to) <= layout.wire_width / 2.0 {
                    return ClickTarget::Connection(connection.id());
                }
            }
        }

        ClickTarget::Canvas
    }
}

fn distance(a: Position, b: Position) -> f32 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

fn distance_to_segment(point: Position, from: Position, to: Position) -> f32 {
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let length_sq = dx * dx + dy * dy;
    if length_sq == 0.0 {
        return distance(point, from);
    }
    let t = (((point.x - from.x) * dx + (point.y - from.y) * dy) / length_sq).clamp(0.0, 1.0);
    distance(point, Position::new(from.x + t * dx, from.y + t * dy))
}

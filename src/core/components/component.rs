use super::kind::ComponentKind;
use super::port::Port;
use crate::core::errors::CircuitError;
use crate::core::specs::Spec;
use crate::core::types::{ComponentId, PortDirection, PortId, Position};

/// A graph node instantiated from a spec
///
/// Owns its ordered input and output ports. The kind decides how `on_tick`
/// behaves and carries any per-variant state (the button's toggle bit).
#[derive(Debug, Clone)]
pub struct Component {
    id: ComponentId,
    spec: Spec,
    kind: ComponentKind,
    inputs: Vec<Port>,
    outputs: Vec<Port>,
    position: Position,
    moving: bool,
}

impl Component {
    pub fn new(id: ComponentId, spec: Spec, kind: ComponentKind, position: Position) -> Self {
        let inputs = (0..spec.input_arity).map(|i| Port::new(id.input(i))).collect();
        let outputs = (0..spec.output_arity).map(|i| Port::new(id.output(i))).collect();
        Self {
            id,
            spec,
            kind,
            inputs,
            outputs,
            position,
            moving: false,
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn spec(&self) -> &Spec {
        &self.spec
    }

    pub fn kind(&self) -> &ComponentKind {
        &self.kind
    }

    /// Text drawn on the component: the label caption or the spec glyph
    pub fn caption(&self) -> &str {
        match &self.kind {
            ComponentKind::Label { caption } => caption,
            _ => &self.spec.display_label,
        }
    }

    pub fn inputs(&self) -> &[Port] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[Port] {
        &self.outputs
    }

    /// Inputs followed by outputs
    pub fn ports(&self) -> impl Iterator<Item = &Port> {
        self.inputs.iter().chain(self.outputs.iter())
    }

    pub fn port(&self, id: PortId) -> Option<&Port> {
        if id.component_id != self.id {
            return None;
        }
        match id.direction {
            PortDirection::Input => self.inputs.get(id.index),
            PortDirection::Output => self.outputs.get(id.index),
        }
    }

    pub(crate) fn port_mut(&mut self, id: PortId) -> Option<&mut Port> {
        if id.component_id != self.id {
            return None;
        }
        match id.direction {
            PortDirection::Input => self.inputs.get_mut(id.index),
            PortDirection::Output => self.outputs.get_mut(id.index),
        }
    }

    pub fn input_value(&self, index: usize) -> Option<bool> {
        self.inputs.get(index).map(Port::value)
    }

    pub fn output_value(&self, index: usize) -> Option<bool> {
        self.outputs.get(index).map(Port::value)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub(crate) fn set_moving(&mut self, moving: bool) {
        self.moving = moving;
    }

    /// Whether an LED is currently lit; `None` for every other kind
    pub fn is_lit(&self) -> Option<bool> {
        match self.kind {
            ComponentKind::Led { lit } => Some(lit),
            _ => None,
        }
    }

    /// Toggle bit of a button; `None` for every other kind
    pub fn is_on(&self) -> Option<bool> {
        match self.kind {
            ComponentKind::Button { on } => Some(on),
            _ => None,
        }
    }

    /// Recompute this component's outputs from its current input values
    ///
    /// On `ArityMismatch` the outputs keep their previous values.
    pub fn on_tick(&mut self) -> Result<(), CircuitError> {
        match &mut self.kind {
            ComponentKind::Gate => {
                let inputs: Vec<bool> = self.inputs.iter().map(Port::value).collect();
                let values = self.spec.evaluate(&inputs).map_err(|err| match err {
                    CircuitError::ArityMismatch {
                        spec_id,
                        expected,
                        actual,
                        ..
                    } => CircuitError::ArityMismatch {
                        spec_id,
                        component_id: Some(self.id),
                        expected,
                        actual,
                    },
                    other => other,
                })?;
                for (port, value) in self.outputs.iter_mut().zip(values) {
                    port.set_value(value);
                }
            }
            ComponentKind::Led { lit } => {
                *lit = self.inputs.first().map(Port::value).unwrap_or(false);
            }
            ComponentKind::Switch => {
                for (output, input) in self.outputs.iter_mut().zip(self.inputs.iter()) {
                    output.set_value(input.value());
                }
            }
            ComponentKind::Button { .. } | ComponentKind::Label { .. } => {}
        }
        Ok(())
    }

    /// Flip a button's toggle bit and its output. Returns the new bit.
    pub fn toggle(&mut self) -> Option<bool> {
        match &mut self.kind {
            ComponentKind::Button { on } => {
                *on = !*on;
                let on = *on;
                if let Some(output) = self.outputs.first_mut() {
                    output.set_value(on);
                }
                Some(on)
            }
            _ => None,
        }
    }
}

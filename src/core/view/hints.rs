use super::draw::{ClickTarget, DrawHint, Rgb, Shape};
use super::layout;
use crate::core::components::{Component, ComponentKind};
use crate::core::connections::Connection;
use crate::core::graph::CircuitGraph;
use crate::core::types::Size;

impl CircuitGraph {
    /// Draw hints for every live entity, back to front, in screen coordinates
    ///
    /// Wires come first, then each component body followed by its ports.
    pub fn draw_hints(&self) -> Vec<DrawHint> {
        let mut hints = Vec::new();
        for connection in self.connections.iter() {
            if let Some(hint) = self.connection_hint(connection) {
                hints.push(hint);
            }
        }
        for component in self.components.values() {
            hints.push(self.body_hint(component));
            let radius = self.config.layout.port_radius;
            for port in component.ports() {
                hints.push(DrawHint {
                    target: ClickTarget::Port(port.id()),
                    shape: Shape::Circle { radius },
                    position: layout::port_position(&self.config.layout, component, port.id()) + self.pan,
                    size: Size::new(radius * 2.0, radius * 2.0),
                    color: self.config.palette.port,
                    caption: None,
                });
            }
        }
        hints
    }

    fn connection_hint(&self, connection: &Connection) -> Option<DrawHint> {
        let layout = &self.config.layout;
        let mut ends = connection.endpoints().filter_map(|port| {
            let component = self.components.get(&port.component_id())?;
            Some(layout::port_position(layout, component, port) + self.pan)
        });
        let from = ends.next()?;
        // a seeking wire follows the pointer
        let to = ends.next().unwrap_or(self.pointer);

        let palette = &self.config.palette;
        let mut color = connection.color();
        if self.is_highlighted(connection.id()) {
            color = Rgb::new(palette.wire_highlight_red, color.g, palette.wire_highlight_blue);
        }
        Some(DrawHint {
            target: ClickTarget::Connection(connection.id()),
            shape: Shape::Line {
                to,
                width: layout.wire_width,
            },
            position: from,
            size: Size::new((to.x - from.x).abs(), (to.y - from.y).abs()),
            color,
            caption: None,
        })
    }

    fn body_hint(&self, component: &Component) -> DrawHint {
        let layout = &self.config.layout;
        let palette = &self.config.palette;
        let size = layout::body_size(layout, component);
        let (shape, color, caption) = match component.kind() {
            ComponentKind::Gate => (
                Shape::Rect {
                    outline: Some(palette.gate_outline),
                },
                palette.gate_fill,
                Some(layout::padded(component.caption())),
            ),
            ComponentKind::Button { on } => (
                Shape::Rect { outline: None },
                if *on { palette.button_on } else { palette.button_off },
                None,
            ),
            ComponentKind::Led { lit } => {
                let green = if *lit { palette.led_lit_green } else { palette.led_dark_green };
                (
                    Shape::Circle {
                        radius: layout.led_radius,
                    },
                    Rgb::new(palette.led_body.r, green, palette.led_body.b),
                    None,
                )
            }
            ComponentKind::Switch => (Shape::Rect { outline: None }, palette.button_off, None),
            ComponentKind::Label { caption } => (
                Shape::Frame {
                    thickness: layout.label_thickness,
                },
                palette.label_outline,
                Some(layout::padded(caption)),
            ),
        };
        DrawHint {
            target: ClickTarget::Component(component.id()),
            shape,
            position: component.position() + self.pan,
            size,
            color,
            caption,
        }
    }
}


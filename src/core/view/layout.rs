//! Widget geometry shared by the draw hints and hit testing.
//!
//! All offsets are relative to the component's position (its center).

use crate::core::components::{Component, ComponentKind};
use crate::core::execution::config::LayoutConfig;
use crate::core::types::{PortDirection, PortId, Position, Size};

/// Caption size from the configured glyph metrics
pub fn measure_caption(layout: &LayoutConfig, caption: &str) -> Size {
    let lines: Vec<&str> = caption.split('\n').collect();
    let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    Size::new(
        widest as f32 * layout.glyph_size.width,
        lines.len() as f32 * layout.glyph_size.height,
    )
}

/// Size of a component's body
pub fn body_size(layout: &LayoutConfig, component: &Component) -> Size {
    match component.kind() {
        ComponentKind::Gate => gate_size(layout, component.caption()),
        ComponentKind::Button { .. } | ComponentKind::Switch => {
            Size::new(layout.widget_side, layout.widget_side)
        }
        ComponentKind::Led { .. } => Size::new(layout.led_radius * 2.0, layout.led_radius * 2.0),
        ComponentKind::Label { caption } => {
            let text = measure_caption(layout, &padded(caption));
            Size::new(
                text.width + layout.label_padding.width,
                text.height + layout.label_padding.height,
            )
        }
    }
}

/// Captions are drawn with a space on either side
pub(crate) fn padded(caption: &str) -> String {
    format!(" {} ", caption)
}

fn gate_size(layout: &LayoutConfig, caption: &str) -> Size {
    let text = measure_caption(layout, &padded(caption));
    Size::new(
        (text.width + layout.gate_padding.width).max(layout.gate_min_size.width),
        (text.height + layout.gate_padding.height).max(layout.gate_min_size.height),
    )
}

/// Offset of a port's center from its component's center
pub fn port_offset(layout: &LayoutConfig, component: &Component, port: PortId) -> Position {
    let size = body_size(layout, component);
    let edge = size.width / 2.0 + 1.0;
    match component.kind() {
        ComponentKind::Switch => match (port.direction(), port.index()) {
            (PortDirection::Input, 0) => Position::new(-edge, 0.0),
            (PortDirection::Input, _) => Position::new(0.0, -edge),
            (PortDirection::Output, 0) => Position::new(edge, 0.0),
            (PortDirection::Output, _) => Position::new(0.0, edge),
        },
        ComponentKind::Button { .. } | ComponentKind::Led { .. } => match port.direction() {
            PortDirection::Input => Position::new(-edge, 0.0),
            PortDirection::Output => Position::new(edge, 0.0),
        },
        ComponentKind::Gate | ComponentKind::Label { .. } => {
            let count = match port.direction() {
                PortDirection::Input => component.inputs().len(),
                PortDirection::Output => component.outputs().len(),
            };
            let spacing = size.height / (count as f32 + 1.0);
            let y = -size.height / 2.0 + (port.index() as f32 + 1.0) * spacing;
            match port.direction() {
                PortDirection::Input => Position::new(-edge, y),
                PortDirection::Output => Position::new(edge, y),
            }
        }
    }
}

/// Canvas position of a port
pub fn port_position(layout: &LayoutConfig, component: &Component, port: PortId) -> Position {
    component.position() + port_offset(layout, component, port)
}

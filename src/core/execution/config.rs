//! Configuration for the circuit graph and its view collaborator.
//!
//! Every section deserializes with defaults, so a config file only needs the
//! fields it changes.

use crate::core::spawn::{default_key_bindings, KeyBinding};
use crate::core::types::Size;
use crate::core::view::Rgb;
use serde::{Deserialize, Serialize};

/// Colors used by the draw hints and the wire two-tone encoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Color of a fresh wire; the green channel is overwritten by the carried value
    pub wire_base: Rgb,
    pub wire_true_green: u8,
    pub wire_false_green: u8,
    /// Red/blue channels of wires attached to a component being dragged
    pub wire_highlight_red: u8,
    pub wire_highlight_blue: u8,
    pub port: Rgb,
    pub gate_fill: Rgb,
    pub gate_outline: Rgb,
    pub led_body: Rgb,
    pub led_lit_green: u8,
    pub led_dark_green: u8,
    pub button_off: Rgb,
    pub button_on: Rgb,
    pub label_outline: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            wire_base: Rgb::new(0, 0, 150),
            wire_true_green: 255,
            wire_false_green: 0,
            wire_highlight_red: 150,
            wire_highlight_blue: 0,
            port: Rgb::new(0, 0, 255),
            gate_fill: Rgb::new(114, 252, 176),
            gate_outline: Rgb::new(0, 0, 0),
            led_body: Rgb::new(120, 120, 120),
            led_lit_green: 255,
            led_dark_green: 120,
            button_off: Rgb::new(120, 120, 120),
            button_on: Rgb::new(120, 255, 120),
            label_outline: Rgb::new(0, 0, 0),
        }
    }
}

/// Widget geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub port_radius: f32,
    /// Added to the caption size of a gate box
    pub gate_padding: Size,
    /// Lower bound of a gate box
    pub gate_min_size: Size,
    /// Added to the caption size of a label frame
    pub label_padding: Size,
    /// Size of one caption glyph; text measurement proper belongs to the renderer
    pub glyph_size: Size,
    /// Side of the square button and switch bodies
    pub widget_side: f32,
    pub led_radius: f32,
    pub wire_width: f32,
    pub label_thickness: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            port_radius: 5.0,
            gate_padding: Size::new(15.0, 25.0),
            gate_min_size: Size::new(0.0, 90.0),
            label_padding: Size::new(15.0, 15.0),
            glyph_size: Size::new(9.0, 18.0),
            widget_side: 36.0,
            led_radius: 18.0,
            wire_width: 5.0,
            label_thickness: 4.0,
        }
    }
}

/// Configuration for a circuit graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitConfig {
    pub palette: Palette,
    pub layout: LayoutConfig,
    /// Key table translating key presses into spawn requests
    pub key_bindings: Vec<KeyBinding>,
    /// Key that deletes the component being dragged
    pub delete_key: char,
}

impl CircuitConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self {
            palette: Palette::default(),
            layout: LayoutConfig::default(),
            key_bindings: default_key_bindings(),
            delete_key: 'x',
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Replace the whole key table
    pub fn with_key_bindings(mut self, bindings: Vec<KeyBinding>) -> Self {
        self.key_bindings = bindings;
        self
    }

    pub fn with_delete_key(mut self, key: char) -> Self {
        self.delete_key = key;
        self
    }
}

impl Default for CircuitConfig {
    fn default() -> Self {
        Self::new()
    }
}

//! Built-in gate specs and the descriptors of the I/O widgets.

use super::spec::{Spec, SpecOutput};

pub const AND: &str = "and";
pub const OR: &str = "or";
pub const XOR: &str = "xor";
pub const NOT: &str = "not";

pub const BUTTON: &str = "inp";
pub const LED: &str = "out";
pub const SWITCH: &str = "route";
pub const LABEL: &str = "text";

fn and(inputs: &[bool]) -> SpecOutput {
    (inputs[0] && inputs[1]).into()
}

fn or(inputs: &[bool]) -> SpecOutput {
    (inputs[0] || inputs[1]).into()
}

fn xor(inputs: &[bool]) -> SpecOutput {
    (inputs[0] != inputs[1]).into()
}

fn not(inputs: &[bool]) -> SpecOutput {
    (!inputs[0]).into()
}

fn identity(inputs: &[bool]) -> SpecOutput {
    SpecOutput::Many(inputs.to_vec())
}

fn nothing(_inputs: &[bool]) -> SpecOutput {
    SpecOutput::Many(Vec::new())
}

/// The four boolean gates, in the order the spawn table lists them
pub fn gates() -> Vec<Spec> {
    vec![
        Spec::new(XOR, "^", 2, 1, xor).with_aliases(&["^"]),
        Spec::new(AND, "&", 2, 1, and).with_aliases(&["&"]),
        Spec::new(OR, "||", 2, 1, or).with_aliases(&["||"]),
        Spec::new(NOT, "¬", 1, 1, not).with_aliases(&["~", "!"]),
    ]
}

/// Toggle button: no inputs, one output driven by its toggle bit
pub fn button() -> Spec {
    Spec::new(BUTTON, "->", 0, 1, |_| false.into())
}

/// Indicator: one input, nothing out
pub fn led() -> Spec {
    Spec::new(LED, "<-", 1, 0, nothing)
}

/// Router: two inputs passed straight through to two outputs
pub fn switch() -> Spec {
    Spec::new(SWITCH, "-", 2, 2, identity)
}

/// Caption-only component
pub fn label(caption: &str) -> Spec {
    Spec::new(LABEL, caption, 0, 0, nothing)
}

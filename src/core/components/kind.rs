/// Closed set of component variants and the extra state each one carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentKind {
    /// Plain gate evaluated through its spec
    Gate,
    /// Toggle button; the bit persists across ticks until flipped
    Button { on: bool },
    /// Indicator showing its single input
    Led { lit: bool },
    /// Two parallel passthrough paths
    Switch,
    /// Caption only, no simulation role
    Label { caption: String },
}

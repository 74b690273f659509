//! Spawn requests and the key table that produces them.

use crate::core::specs::builtin;
use serde::{Deserialize, Serialize};

/// What a key press asks the graph to create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnKind {
    /// Gate looked up in the spec table by id or alias
    Gate(String),
    Button,
    Led,
    Switch,
    /// Label; the caption comes from a `CaptionSource`
    Label,
}

/// A fully specified request to add a component at the pointer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpawnRequest {
    Gate(String),
    Button,
    Led,
    Switch,
    Label(String),
}

impl SpawnRequest {
    pub fn gate(id: &str) -> Self {
        SpawnRequest::Gate(id.to_string())
    }

    pub fn label(caption: &str) -> Self {
        SpawnRequest::Label(caption.to_string())
    }
}

/// One entry of the key table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: char,
    pub kind: SpawnKind,
}

impl KeyBinding {
    pub fn new(key: char, kind: SpawnKind) -> Self {
        Self { key, kind }
    }
}

/// `q w e r` spawn XOR AND OR NOT, `a s d f` spawn button, LED, switch, label
pub fn default_key_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new('q', SpawnKind::Gate(builtin::XOR.to_string())),
        KeyBinding::new('w', SpawnKind::Gate(builtin::AND.to_string())),
        KeyBinding::new('e', SpawnKind::Gate(builtin::OR.to_string())),
        KeyBinding::new('r', SpawnKind::Gate(builtin::NOT.to_string())),
        KeyBinding::new('a', SpawnKind::Button),
        KeyBinding::new('s', SpawnKind::Led),
        KeyBinding::new('d', SpawnKind::Switch),
        KeyBinding::new('f', SpawnKind::Label),
    ]
}

/// Find the binding for `key`
pub fn lookup_key(bindings: &[KeyBinding], key: char) -> Option<&SpawnKind> {
    bindings.iter().find(|b| b.key == key).map(|b| &b.kind)
}

/// External text-input collaborator supplying label captions
pub trait CaptionSource {
    /// Ask the user for a caption; `None` when they gave none
    fn request_caption(&mut self) -> Option<String>;
}

impl<F> CaptionSource for F
where
    F: FnMut() -> Option<String>,
{
    fn request_caption(&mut self) -> Option<String> {
        self()
    }
}

/// Caption source for contexts without text input
pub struct NoCaptions;

impl CaptionSource for NoCaptions {
    fn request_caption(&mut self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let bindings = default_key_bindings();
        assert_eq!(lookup_key(&bindings, 'q'), Some(&SpawnKind::Gate("xor".to_string())));
        assert_eq!(lookup_key(&bindings, 'r'), Some(&SpawnKind::Gate("not".to_string())));
        assert_eq!(lookup_key(&bindings, 'f'), Some(&SpawnKind::Label));
        assert_eq!(lookup_key(&bindings, 'z'), None);
    }

    #[test]
    fn test_closure_caption_source() {
        let mut captions = vec!["sum".to_string()];
        let mut source = move || captions.pop();
        assert_eq!(source.request_caption(), Some("sum".to_string()));
        assert_eq!(source.request_caption(), None);
        assert_eq!(NoCaptions.request_caption(), None);
    }
}

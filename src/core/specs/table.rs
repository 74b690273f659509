use super::builtin;
use super::spec::Spec;
use crate::core::errors::CircuitError;

/// Manages registration and lookup of gate specs
///
/// Specs are kept in registration order; lookups accept ids and aliases.
#[derive(Debug, Clone)]
pub struct SpecTable {
    specs: Vec<Spec>,
}

impl SpecTable {
    /// Create an empty table
    pub fn empty() -> Self {
        Self { specs: Vec::new() }
    }

    /// Create a table holding the built-in gates
    ///
    /// Widget descriptors are not listed; buttons, LEDs, switches and labels
    /// carry kind state and only come from their own spawn requests.
    pub fn with_builtins() -> Self {
        Self {
            specs: builtin::gates(),
        }
    }

    /// Register a custom spec
    pub fn register(&mut self, spec: Spec) -> Result<(), CircuitError> {
        let names = std::iter::once(&spec.id).chain(spec.aliases.iter());
        for name in names {
            if self.specs.iter().any(|existing| existing.answers_to(name)) {
                return Err(CircuitError::DuplicateSpec(name.clone()));
            }
        }
        self.specs.push(spec);
        Ok(())
    }

    /// Look up a spec by id or alias
    pub fn lookup(&self, id: &str) -> Result<&Spec, CircuitError> {
        self.specs
            .iter()
            .find(|spec| spec.answers_to(id))
            .ok_or_else(|| CircuitError::UnknownSpec(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_ok()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl Default for SpecTable {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::specs::spec::SpecOutput;

    fn nand(inputs: &[bool]) -> SpecOutput {
        (!(inputs[0] && inputs[1])).into()
    }

    #[test]
    fn test_lookup_by_id_and_alias() {
        let table = SpecTable::with_builtins();
        assert_eq!(table.lookup("and").unwrap().display_label, "&");
        assert_eq!(table.lookup("&").unwrap().id, "and");
        assert_eq!(table.lookup("!").unwrap().id, "not");
        assert_eq!(table.lookup("||").unwrap().id, "or");
    }

    #[test]
    fn test_widgets_are_not_gates() {
        let table = SpecTable::with_builtins();
        for id in [builtin::BUTTON, builtin::LED, builtin::SWITCH, builtin::LABEL] {
            assert!(!table.contains(id), "{} resolved as a gate", id);
        }
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_unknown_spec_fails() {
        let table = SpecTable::with_builtins();
        assert_eq!(
            table.lookup("nand").unwrap_err(),
            CircuitError::UnknownSpec("nand".to_string())
        );
    }

    #[test]
    fn test_register_custom_spec() {
        let mut table = SpecTable::with_builtins();
        let before = table.len();
        table
            .register(Spec::new("nand", "!&", 2, 1, nand).with_aliases(&["!&"]))
            .unwrap();
        assert_eq!(table.len(), before + 1);
        assert_eq!(table.lookup("!&").unwrap().evaluate(&[true, true]).unwrap(), vec![false]);
    }

    #[test]
    fn test_register_rejects_taken_names() {
        let mut table = SpecTable::with_builtins();
        let clash = Spec::new("nand", "!&", 2, 1, nand).with_aliases(&["&"]);
        assert_eq!(
            table.register(clash).unwrap_err(),
            CircuitError::DuplicateSpec("&".to_string())
        );
        assert!(!table.contains("nand"));
    }
}

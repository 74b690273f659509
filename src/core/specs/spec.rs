use crate::core::errors::CircuitError;

/// Raw result of a spec evaluation
///
/// Single-output specs may return a bare boolean; the caller normalizes it.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecOutput {
    Single(bool),
    Many(Vec<bool>),
}

impl SpecOutput {
    /// Normalize into a value list, whatever shape the spec returned
    pub fn into_values(self) -> Vec<bool> {
        match self {
            SpecOutput::Single(value) => vec![value],
            SpecOutput::Many(values) => values,
        }
    }
}

impl From<bool> for SpecOutput {
    fn from(value: bool) -> Self {
        SpecOutput::Single(value)
    }
}

impl From<Vec<bool>> for SpecOutput {
    fn from(values: Vec<bool>) -> Self {
        SpecOutput::Many(values)
    }
}

/// Pure transfer function of a spec: input values in index order in, outputs out
pub type EvalFn = fn(&[bool]) -> SpecOutput;

/// Immutable descriptor of a gate: identity, arity and boolean behavior
#[derive(Clone)]
pub struct Spec {
    /// Unique lookup key
    pub id: String,
    /// Glyph or caption shown on the component
    pub display_label: String,
    /// Extra lookup keys
    pub aliases: Vec<String>,
    pub input_arity: usize,
    pub output_arity: usize,
    pub eval: EvalFn,
}

impl Spec {
    pub fn new(
        id: &str,
        display_label: &str,
        input_arity: usize,
        output_arity: usize,
        eval: EvalFn,
    ) -> Self {
        Self {
            id: id.to_string(),
            display_label: display_label.to_string(),
            aliases: Vec::new(),
            input_arity,
            output_arity,
            eval,
        }
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }

    /// Check if `name` is this spec's id or one of its aliases
    pub fn answers_to(&self, name: &str) -> bool {
        self.id == name || self.aliases.iter().any(|a| a == name)
    }

    /// Evaluate the spec and verify both declared arities
    pub fn evaluate(&self, inputs: &[bool]) -> Result<Vec<bool>, CircuitError> {
        if inputs.len() != self.input_arity {
            return Err(CircuitError::InputArityMismatch {
                spec_id: self.id.clone(),
                expected: self.input_arity,
                actual: inputs.len(),
            });
        }
        let values = (self.eval)(inputs).into_values();
        if values.len() != self.output_arity {
            return Err(CircuitError::ArityMismatch {
                spec_id: self.id.clone(),
                component_id: None,
                expected: self.output_arity,
                actual: values.len(),
            });
        }
        Ok(values)
    }
}

impl std::fmt::Debug for Spec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spec")
            .field("id", &self.id)
            .field("display_label", &self.display_label)
            .field("input_arity", &self.input_arity)
            .field("output_arity", &self.output_arity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn broken(_inputs: &[bool]) -> SpecOutput {
        SpecOutput::Many(vec![true, false])
    }

    #[test]
    fn test_bare_bool_is_normalized() {
        assert_eq!(SpecOutput::from(true).into_values(), vec![true]);
        assert_eq!(SpecOutput::from(vec![false, true]).into_values(), vec![false, true]);
    }

    #[test]
    fn test_arity_mismatch_is_reported_not_truncated() {
        let spec = Spec::new("broken", "?", 0, 1, broken);
        match spec.evaluate(&[]) {
            Err(CircuitError::ArityMismatch { expected, actual, .. }) => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 2);
            }
            other => panic!("expected arity mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_input_count_is_rejected() {
        let spec = Spec::new("pair", "&", 2, 1, |inputs| (inputs[0] && inputs[1]).into());
        assert_eq!(
            spec.evaluate(&[true]),
            Err(CircuitError::InputArityMismatch {
                spec_id: "pair".to_string(),
                expected: 2,
                actual: 1,
            })
        );
        assert!(spec.evaluate(&[true, true, false]).is_err());
    }

    #[test]
    fn test_aliases_answer_lookups() {
        let spec = Spec::new("broken", "?", 0, 2, broken).with_aliases(&["b", "brk"]);
        assert!(spec.answers_to("broken"));
        assert!(spec.answers_to("brk"));
        assert!(!spec.answers_to("and"));
        assert_eq!(spec.evaluate(&[]).unwrap(), vec![true, false]);
    }
}

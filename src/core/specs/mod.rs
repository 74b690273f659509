pub mod builtin;
pub mod spec;
pub mod table;

pub use spec::{EvalFn, Spec, SpecOutput};
pub use table::SpecTable;

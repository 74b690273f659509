pub mod components;
pub mod connections;
pub mod errors;
pub mod execution;
pub mod graph;
pub mod spawn;
pub mod specs;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

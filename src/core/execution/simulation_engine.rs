use crate::core::graph::{CircuitGraph, TickReport};
use log::debug;

/// Observer trait for simulation ticks
pub trait SimulationObserver {
    /// Called after every tick with that tick's report
    fn on_tick_complete(&mut self, report: &TickReport);
}

impl<F> SimulationObserver for F
where
    F: FnMut(&TickReport),
{
    fn on_tick_complete(&mut self, report: &TickReport) {
        self(report)
    }
}

/// Headless driver running a circuit graph one tick at a time
pub struct SimulationEngine {
    graph: CircuitGraph,
    max_ticks: Option<u64>,
    observers: Vec<Box<dyn SimulationObserver>>,
}

impl SimulationEngine {
    /// Create an engine; `max_ticks` bounds `run`, `None` runs forever
    pub fn new(graph: CircuitGraph, max_ticks: Option<u64>) -> Self {
        Self {
            graph,
            max_ticks,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the simulation
    pub fn add_observer(&mut self, observer: Box<dyn SimulationObserver>) {
        self.observers.push(observer);
    }

    pub fn graph(&self) -> &CircuitGraph {
        &self.graph
    }

    /// Mutable access for gestures between ticks
    pub fn graph_mut(&mut self) -> &mut CircuitGraph {
        &mut self.graph
    }

    pub fn into_graph(self) -> CircuitGraph {
        self.graph
    }

    /// Run ticks until the limit is reached
    ///
    /// Returns the number of faults seen along the way.
    pub fn run(&mut self) -> u64 {
        let mut faults = 0;
        while self.max_ticks.map_or(true, |max| self.current_tick() < max) {
            faults += self.step().faults.len() as u64;
        }
        debug!("Stopped after {} ticks with {} faults", self.current_tick(), faults);
        faults
    }

    /// Run exactly `ticks` more ticks, ignoring the limit
    pub fn run_for(&mut self, ticks: u64) -> Vec<TickReport> {
        (0..ticks).map(|_| self.step()).collect()
    }

    pub fn step(&mut self) -> TickReport {
        let report = self.graph.tick();
        for observer in &mut self.observers {
            observer.on_tick_complete(&report);
        }
        report
    }

    pub fn current_tick(&self) -> u64 {
        self.graph.tick_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_run_stops_at_limit() {
        let mut engine = SimulationEngine::new(CircuitGraph::new(), Some(5));
        assert_eq!(engine.run(), 0);
        assert_eq!(engine.current_tick(), 5);
        engine.run_for(2);
        assert_eq!(engine.current_tick(), 7);
        assert_eq!(engine.into_graph().tick_count(), 7);
    }

    #[test]
    fn test_observers_see_every_tick() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut engine = SimulationEngine::new(CircuitGraph::new(), Some(3));
        engine.add_observer(Box::new(move |report: &TickReport| sink.borrow_mut().push(report.tick)));
        engine.run();
        assert_eq!(*seen.borrow(), vec![1, 2, 3]);
    }
}

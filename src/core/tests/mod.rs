
use crate::core::graph::{CircuitGraph, PortClick};
use crate::core::spawn::SpawnRequest;
use crate::core::types::{ComponentId, ConnectionId, PortId, Position};

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Spawn one component at a canvas point and run the tick that inserts it
pub(crate) fn place(graph: &mut CircuitGraph, request: SpawnRequest, x: f32, y: f32) -> ComponentId {
    graph.pointer_moved(Position::new(x, y) + graph.pan_offset());
    graph.spawn(request).unwrap();
    let report = graph.tick();
    assert_eq!(report.spawned.len(), 1);
    report.spawned[0]
}

/// Drive the two-click wire gesture from `source` to `target`
pub(crate) fn wire(graph: &mut CircuitGraph, source: PortId, target: PortId) -> ConnectionId {
    assert!(matches!(graph.click_port(source).unwrap(), PortClick::Opened(_)));
    match graph.click_port(target).unwrap() {
        PortClick::Bound(id) => id,
        other => panic!("expected a bound wire, got {:?}", other),
    }
}

use gatesim::core::spawn::NoCaptions;
use gatesim::core::specs::builtin;
use gatesim::{
    CircuitConfig, CircuitError, CircuitGraph, ClickOutcome, ClickTarget, PointerButton, PortClick, PortId,
    Position, SimulationEngine, SpawnRequest, TickReport,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn press(graph: &mut CircuitGraph, point: Position) -> Result<ClickOutcome, CircuitError> {
    let target = graph.hit_test(point);
    graph.click(target, PointerButton::Primary)
}

/// Screen point of a port, found through the draw hints like a view would
fn port_on_screen(graph: &CircuitGraph, port: PortId) -> Position {
    graph
        .draw_hints()
        .into_iter()
        .find(|hint| hint.target == ClickTarget::Port(port))
        .map(|hint| hint.position)
        .unwrap()
}

#[test]
fn test_button_lights_led_through_pointer_gestures() {
    init_logging();
    let mut graph = CircuitGraph::new();

    graph.pointer_moved(Position::new(100.0, 100.0));
    graph.handle_key('a', &mut NoCaptions).unwrap();
    let button = graph.tick().spawned[0];
    graph.pointer_moved(Position::new(300.0, 100.0));
    graph.handle_key('s', &mut NoCaptions).unwrap();
    let led = graph.tick().spawned[0];

    let from = port_on_screen(&graph, button.output(0));
    let to = port_on_screen(&graph, led.input(0));
    assert!(matches!(press(&mut graph, from), Ok(ClickOutcome::Port(PortClick::Opened(_)))));
    assert!(matches!(press(&mut graph, to), Ok(ClickOutcome::Port(PortClick::Bound(_)))));

    let body = graph.hit_test(graph.component(button).unwrap().position());
    assert_eq!(body, ClickTarget::Component(button));
    graph.click(body, PointerButton::Secondary).unwrap();

    let limit = graph.tick_count() + 2;
    let mut engine = SimulationEngine::new(graph, Some(limit));
    assert_eq!(engine.run(), 0);
    assert_eq!(engine.graph().component(led).unwrap().is_lit(), Some(true));
}

fn spawn_at(graph: &mut CircuitGraph, request: SpawnRequest, x: f32, y: f32) -> gatesim::ComponentId {
    graph.pointer_moved(Position::new(x, y));
    graph.spawn(request).unwrap();
    graph.tick().spawned[0]
}

#[test]
fn test_half_adder() {
    init_logging();
    let mut graph = CircuitGraph::new();
    let a = spawn_at(&mut graph, SpawnRequest::Button, 0.0, 0.0);
    let b = spawn_at(&mut graph, SpawnRequest::Button, 0.0, 120.0);
    let sum_gate = spawn_at(&mut graph, SpawnRequest::gate(builtin::XOR), 150.0, 0.0);
    let carry_gate = spawn_at(&mut graph, SpawnRequest::gate(builtin::AND), 150.0, 120.0);
    let sum = spawn_at(&mut graph, SpawnRequest::Led, 300.0, 0.0);
    let carry = spawn_at(&mut graph, SpawnRequest::Led, 300.0, 120.0);

    for (source, target) in [
        (a.output(0), sum_gate.input(0)),
        (b.output(0), sum_gate.input(1)),
        (a.output(0), carry_gate.input(0)),
        (b.output(0), carry_gate.input(1)),
        (sum_gate.output(0), sum.input(0)),
        (carry_gate.output(0), carry.input(0)),
    ] {
        graph.click_port(source).unwrap();
        graph.click_port(target).unwrap();
    }
    assert_eq!(graph.connection_manager().stats().bound, 6);

    let mut engine = SimulationEngine::new(graph, None);
    for (left, right) in [(false, false), (true, false), (false, true), (true, true)] {
        let graph = engine.graph_mut();
        if graph.component(a).unwrap().is_on() != Some(left) {
            graph.toggle_button(a).unwrap();
        }
        if graph.component(b).unwrap().is_on() != Some(right) {
            graph.toggle_button(b).unwrap();
        }
        engine.run_for(3);
        let graph = engine.graph();
        assert_eq!(graph.component(sum).unwrap().is_lit(), Some(left != right), "{} {}", left, right);
        assert_eq!(graph.component(carry).unwrap().is_lit(), Some(left && right), "{} {}", left, right);
    }
}

#[test]
fn test_engine_reports_faults_to_observers() {
    init_logging();
    let mut graph = CircuitGraph::new();
    graph
        .register_spec(gatesim::Spec::new("bad", "?", 0, 1, |_| gatesim::SpecOutput::Many(Vec::new())))
        .unwrap();
    graph.spawn(SpawnRequest::gate("bad")).unwrap();

    let faults = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&faults);
    let mut engine = SimulationEngine::new(graph, Some(4));
    engine.add_observer(Box::new(move |report: &TickReport| *sink.borrow_mut() += report.faults.len()));
    assert_eq!(engine.run(), 4);
    assert_eq!(*faults.borrow(), 4);
}

#[test]
fn test_config_is_honored() {
    let json = r#"{ "delete_key": "d", "key_bindings": [ { "key": "n", "kind": { "Gate": "not" } } ] }"#;
    let config: CircuitConfig = serde_json::from_str(json).unwrap();
    let mut graph = CircuitGraph::with_config(config);

    assert_eq!(graph.handle_key('q', &mut NoCaptions), Ok(false));
    assert_eq!(graph.handle_key('n', &mut NoCaptions), Ok(true));
    let gate = graph.tick().spawned[0];
    graph.begin_drag(gate).unwrap();
    assert_eq!(graph.handle_key('d', &mut NoCaptions), Ok(true));
    assert_eq!(graph.component_count(), 0);
}

/// Random gesture soak: the coordination invariants hold after every step
#[test]
fn test_random_gestures_keep_graph_consistent() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut graph = CircuitGraph::new();
    let keys = ['q', 'w', 'e', 'r', 'a', 's', 'd', 'f', 'x', 'z'];

    for step in 0..2_000 {
        let ports: Vec<PortId> = graph
            .components()
            .flat_map(|c| c.ports().map(|p| p.id()).collect::<Vec<_>>())
            .collect();
        let components: Vec<_> = graph.components().map(|c| c.id()).collect();

        match rng.gen_range(0..10) {
            0 => {
                let key = keys[rng.gen_range(0..keys.len())];
                let mut captions = || Some(format!("step {}", step));
                let _ = graph.handle_key(key, &mut captions);
            }
            1 | 2 if !ports.is_empty() => {
                let port = ports[rng.gen_range(0..ports.len())];
                let _ = graph.click_port(port);
            }
            3 if !components.is_empty() => {
                let id = components[rng.gen_range(0..components.len())];
                let button = if rng.gen_bool(0.5) {
                    PointerButton::Primary
                } else {
                    PointerButton::Secondary
                };
                let _ = graph.click(ClickTarget::Component(id), button);
            }
            4 => {
                graph.release(PointerButton::Primary);
            }
            5 => {
                let delta = Position::new(rng.gen_range(-20.0..20.0), rng.gen_range(-20.0..20.0));
                if !graph.drag_by(delta) {
                    graph.pan(delta);
                }
            }
            6 => {
                let point = Position::new(rng.gen_range(0.0..800.0), rng.gen_range(0.0..600.0));
                graph.pointer_moved(point);
                let _ = press(&mut graph, point);
            }
            7 if !components.is_empty() && rng.gen_bool(0.2) => {
                let id = components[rng.gen_range(0..components.len())];
                graph.destroy_component(id).unwrap();
            }
            8 => {
                let wires: Vec<_> = graph.connections().map(|c| c.id()).collect();
                if !wires.is_empty() {
                    graph.destroy_connection(wires[rng.gen_range(0..wires.len())]);
                }
            }
            _ => {
                graph.tick();
            }
        }

        if let Err(problem) = graph.validate_consistency() {
            panic!("step {}: {}", step, problem);
        }
    }
}

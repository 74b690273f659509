use gatesim::core::specs::builtin;
use gatesim::{CircuitGraph, ComponentId, Position, SimulationEngine, SpawnRequest, TickReport};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn spawn_at(graph: &mut CircuitGraph, request: SpawnRequest, x: f32, y: f32) -> Result<ComponentId, String> {
    graph.pointer_moved(Position::new(x, y));
    graph.spawn(request)?;
    graph
        .tick()
        .spawned
        .first()
        .copied()
        .ok_or_else(|| "spawn was not inserted".to_string())
}

/// Half adder: two buttons feeding XOR (sum) and AND (carry), each lighting an LED
fn build_half_adder(graph: &mut CircuitGraph) -> Result<[ComponentId; 4], String> {
    let a = spawn_at(graph, SpawnRequest::Button, 50.0, 50.0)?;
    let b = spawn_at(graph, SpawnRequest::Button, 50.0, 170.0)?;
    let xor = spawn_at(graph, SpawnRequest::gate(builtin::XOR), 200.0, 50.0)?;
    let and = spawn_at(graph, SpawnRequest::gate(builtin::AND), 200.0, 170.0)?;
    let sum = spawn_at(graph, SpawnRequest::Led, 350.0, 50.0)?;
    let carry = spawn_at(graph, SpawnRequest::Led, 350.0, 170.0)?;
    spawn_at(graph, SpawnRequest::label("half adder"), 200.0, 260.0)?;

    for (source, target) in [
        (a.output(0), xor.input(0)),
        (b.output(0), xor.input(1)),
        (a.output(0), and.input(0)),
        (b.output(0), and.input(1)),
        (xor.output(0), sum.input(0)),
        (and.output(0), carry.input(0)),
    ] {
        graph.click_port(source)?;
        graph.click_port(target)?;
    }
    Ok([a, b, sum, carry])
}

fn lit(graph: &CircuitGraph, id: ComponentId) -> bool {
    graph.component(id).and_then(|c| c.is_lit()).unwrap_or(false)
}

fn main() -> Result<(), String> {
    env_logger::init();

    let mut graph = CircuitGraph::new();
    let [a, b, sum, carry] = build_half_adder(&mut graph)?;
    info!(
        "Built half adder: {} components, {} wires",
        graph.component_count(),
        graph.connection_manager().len()
    );

    let mut engine = SimulationEngine::new(graph, None);
    engine.add_observer(Box::new(|report: &TickReport| {
        if !report.is_clean() {
            log::warn!("Tick {} had {} faults", report.tick, report.faults.len());
        }
    }));

    let mut rng = StdRng::seed_from_u64(7);
    for round in 0..8 {
        let graph = engine.graph_mut();
        for button in [a, b] {
            if rng.gen_bool(0.5) {
                graph.toggle_button(button)?;
            }
        }
        // inputs need three ticks to reach the LEDs
        engine.run_for(3);

        let graph = engine.graph();
        let on = |id| graph.component(id).and_then(|c| c.is_on()).unwrap_or(false);
        info!(
            "Round {}: a={} b={} -> sum={} carry={}",
            round,
            on(a) as u8,
            on(b) as u8,
            lit(graph, sum) as u8,
            lit(graph, carry) as u8
        );
    }
    info!("Stopped at tick {}", engine.current_tick());
    Ok(())
}

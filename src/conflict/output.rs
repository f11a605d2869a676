//! Text summaries of worlds and turns

use crate::conflict::resolution::TurnReport;
use crate::conflict::world::ConflictWorld;

/// Multi-line overview: week, then actors, then trade routes
pub fn summarize_world(world: &ConflictWorld) -> String {
    let mut lines = Vec::with_capacity(world.actors.len() + world.trade_routes.len() + 3);

    lines.push(format!("Week {}", world.week));

    lines.push("Actors:".to_string());
    for actor in &world.actors {
        lines.push(format!(
            "{}: supply {:.1}, info reliability {:.2}",
            actor.name,
            actor.supply.resilience_score(),
            actor.information.reliability
        ));
    }

    lines.push("Trade Routes:".to_string());
    for route in &world.trade_routes {
        lines.push(format!(
            "{}: throughput {:.1}, risk {:.2}",
            route.name, route.throughput, route.risk
        ));
    }

    lines.join("\n")
}

pub fn summarize_turn(report: &TurnReport) -> String {
    let mut lines = vec![format!("Turn {}", report.week)];
    lines.extend(report.notes.iter().map(|note| format!("- {}", note)));
    lines.join("\n")
}

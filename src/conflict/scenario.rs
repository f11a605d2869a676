//! Reference starting configuration
//!
//! Three actors (Union, Coalition, Trade League), one home region each, and
//! two trade routes into the Maritime Hub.

use crate::conflict::actor::Actor;
use crate::conflict::force::ForceGroup;
use crate::conflict::information::InformationState;
use crate::conflict::region::Region;
use crate::conflict::supply::SupplyNetwork;
use crate::conflict::trade::TradeRoute;
use crate::conflict::world::ConflictWorld;

pub fn build_reference_world(seed: u64) -> ConflictWorld {
    let mut world = ConflictWorld::new(seed);

    world.insert_region(Region::new("North Arc", 0.4, 0.7, 0.8, 0.2, 0.6, "Union"));
    world.insert_region(Region::new("Equatorial Belt", 0.6, 0.5, 0.6, 0.4, 0.7, "Coalition"));
    world.insert_region(Region::new("Maritime Hub", 0.3, 0.8, 0.9, 0.1, 0.5, "Trade League"));

    world.insert_actor(
        Actor::new(
            "Union",
            0.4,
            0.8,
            0.6,
            SupplyNetwork::new(90.0, 85.0, 80.0, 92.0, 88.0, 70.0, 75.0),
            InformationState::new(0.8, 0.6, 0.2),
        )
        .with_dependency("energy", 0.7)
        .with_dependency("food", 0.5)
        .with_force_group(ForceGroup::new("Union Ground", "land", 0.75, 0.7, 0.6, "stabilize", "North Arc"))
        .with_force_group(ForceGroup::new("Union Air", "air", 0.8, 0.6, 0.7, "deny", "North Arc"))
        .with_ally("Trade League"),
    );

    world.insert_actor(
        Actor::new(
            "Coalition",
            0.6,
            0.6,
            0.7,
            SupplyNetwork::new(70.0, 65.0, 60.0, 72.0, 70.0, 60.0, 68.0),
            InformationState::new(0.7, 0.8, 0.3),
        )
        .with_dependency("rare_materials", 0.6)
        .with_dependency("capital", 0.8)
        .with_force_group(ForceGroup::new(
            "Coalition Maritime",
            "maritime",
            0.7,
            0.6,
            0.5,
            "protect",
            "Equatorial Belt",
        )),
    );

    world.insert_actor(
        Actor::new(
            "Trade League",
            0.2,
            0.9,
            0.3,
            SupplyNetwork::new(80.0, 78.0, 82.0, 85.0, 95.0, 88.0, 90.0),
            InformationState::new(0.85, 0.5, 0.15),
        )
        .with_dependency("trade", 0.9)
        .with_dependency("data", 0.7)
        .with_force_group(ForceGroup::new(
            "Trade League Cyber",
            "cyber",
            0.8,
            0.8,
            0.4,
            "shield",
            "Maritime Hub",
        ))
        .with_ally("Union"),
    );

    world.add_trade_route(TradeRoute::new("Northern Corridor", "North Arc", "Maritime Hub", 90.0, 0.2, true));
    world.add_trade_route(TradeRoute::new(
        "Southern Passage",
        "Equatorial Belt",
        "Maritime Hub",
        70.0,
        0.3,
        false,
    ));

    world
}

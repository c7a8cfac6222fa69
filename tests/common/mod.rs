use linkstate_sim::network::Network;
use linkstate_sim::protocol::{apply_event, LinkEvent, RoutingTable, build_routing_table};
use linkstate_sim::{Cost, Weight};

pub fn set(a: &str, b: &str, weight: Weight) -> LinkEvent {
    LinkEvent::Set { a: a.into(), b: b.into(), weight }
}

pub fn remove(a: &str, b: &str) -> LinkEvent {
    LinkEvent::Remove { a: a.into(), b: b.into() }
}

/// Builds a network from node names and `(a, b, weight)` links, applying
/// each link as an event in order.
pub fn build(nodes: &[&str], links: &[(&str, &str, Weight)]) -> Network {
    let mut network = Network::new(nodes.iter().copied()).expect("valid node list");
    for (a, b, weight) in links {
        apply_event(&mut network, &set(a, b, *weight)).expect("valid link");
    }
    network
}

/// A-B=1, B-C=2, A-C=5
pub fn triangle() -> Network {
    build(&["A", "B", "C"], &[("A", "B", 1), ("B", "C", 2), ("A", "C", 5)])
}

pub fn routes(network: &Network, source: &str) -> Vec<(String, String, Cost)> {
    let table: RoutingTable = build_routing_table(network, source).expect("known source");
    table
        .iter()
        .map(|e| (e.destination.clone(), e.next_hop.clone(), e.cost))
        .collect()
}

pub fn route(dest: &str, next_hop: &str, cost: Cost) -> (String, String, Cost) {
    (dest.to_string(), next_hop.to_string(), cost)
}

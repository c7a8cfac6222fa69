mod common;

use common::{build, remove, route, routes, set, triangle};
use linkstate_sim::algorithms::shortest_paths;
use linkstate_sim::network::Network;
use linkstate_sim::protocol::{apply_event, LinkRecord};

fn assert_symmetric(network: &Network) {
    for node in network.nodes() {
        for (neighbor, weight) in &node.neighbors {
            let back = network.neighbors_of(neighbor).unwrap().get(&node.name);
            assert_eq!(back, Some(weight), "{}-{} is not symmetric", node.name, neighbor);
        }
    }
}

#[test]
fn neighbor_tables_stay_symmetric() {
    let mut network = build(&["A", "B", "C", "D"], &[]);
    let events = [
        set("A", "B", 3),
        set("C", "B", 1),
        set("B", "A", 9),
        set("D", "C", 2),
        remove("C", "B"),
        set("A", "D", 0),
        remove("B", "D"),
    ];
    for event in &events {
        apply_event(&mut network, event).unwrap();
        assert_symmetric(&network);
    }
    assert_eq!(network.neighbors_of("A").unwrap().get("B"), Some(&9));
    assert!(!network.are_neighbors("B", "C"));
}

#[test]
fn repeated_update_is_idempotent() {
    let mut once = triangle();
    apply_event(&mut once, &set("A", "C", 2)).unwrap();

    let mut twice = triangle();
    apply_event(&mut twice, &set("A", "C", 2)).unwrap();
    apply_event(&mut twice, &set("A", "C", 2)).unwrap();

    for name in ["A", "B", "C"] {
        assert_eq!(once.neighbors_of(name).unwrap(), twice.neighbors_of(name).unwrap());
        assert_eq!(once.node(name).unwrap().lsdb, twice.node(name).unwrap().lsdb);
        assert_eq!(routes(&once, name), routes(&twice, name));
    }
}

#[test]
fn indirect_path_beats_expensive_direct_link() {
    let paths = shortest_paths(&triangle(), "A").unwrap();
    assert_eq!(paths.cost_to("C"), Some(3));
    assert_eq!(paths.predecessor.get("C").map(String::as_str), Some("B"));
    assert_eq!(routes(&triangle(), "A"), vec![route("B", "B", 1), route("C", "B", 3)]);
}

#[test]
fn equal_cost_frontier_picks_smaller_name() {
    // From A, both M and N sit at cost 4 and both reach Z for 1 more.
    // M is finalised first, so Z is routed through M's branch.
    let network = build(
        &["A", "J", "K", "M", "N", "Z"],
        &[
            ("A", "K", 2),
            ("K", "N", 2),
            ("A", "J", 3),
            ("J", "M", 1),
            ("M", "Z", 1),
            ("N", "Z", 1),
        ],
    );
    let paths = shortest_paths(&network, "A").unwrap();
    assert_eq!(paths.cost_to("M"), Some(4));
    assert_eq!(paths.cost_to("N"), Some(4));
    assert_eq!(paths.predecessor.get("Z").map(String::as_str), Some("M"));
    assert!(routes(&network, "A").contains(&route("Z", "J", 5)));
}

#[test]
fn removed_link_disappears_from_neighbors_and_own_lsdb() {
    let mut network = build(&["A", "B"], &[("A", "B", 1)]);
    apply_event(&mut network, &remove("A", "B")).unwrap();

    assert!(!network.neighbors_of("A").unwrap().contains_key("B"));
    assert!(!network.node("A").unwrap().lsdb.contains(&LinkRecord::new("A", "B", 1)));
    assert!(routes(&network, "A").is_empty());
}

#[test]
fn unreachable_nodes_are_not_routed() {
    let network = build(&["A", "B", "C", "D"], &[("A", "B", 1), ("C", "D", 1)]);
    assert_eq!(routes(&network, "A"), vec![route("B", "B", 1)]);
    assert_eq!(routes(&network, "D"), vec![route("C", "C", 1)]);
}

#[test]
fn lsdb_only_floods_one_hop() {
    // D joins C after B-C was declared, so D never hears about A-B.
    let network = build(
        &["A", "B", "C", "D"],
        &[("B", "C", 1), ("A", "B", 4), ("C", "D", 2)],
    );
    let ab = LinkRecord::new("A", "B", 4);
    assert!(network.node("C").unwrap().lsdb.contains(&ab));
    assert!(!network.node("D").unwrap().lsdb.contains(&ab));
    // Routing still uses the full topology.
    assert!(routes(&network, "D").contains(&route("A", "C", 7)));
}
